/// Fixed demo content: one wireframe cube and the camera that frames it.
///
/// Nothing here is configurable at runtime. The whole demo is this constant
/// set plus a per-frame rotation step.
use crate::geometry::Geometry;
use crate::material::{Color, WireframeMaterial};
use crate::projection::{Camera, Viewport};
use crate::scene::{Mesh, Scene};

/// Cube edge length
pub const CUBE_SIZE: f32 = 500.0;
/// Grid subdivisions per cube face edge
pub const CUBE_SEGMENTS: u32 = 10;
/// Wireframe color, packed 0xRRGGBB
pub const CUBE_COLOR: u32 = 0x736AFF;

/// Vertical field of view in degrees
pub const FOV_DEGREES: f32 = 75.0;
/// Near clipping plane distance
pub const NEAR_PLANE: f32 = 1.0;
/// Far clipping plane distance
pub const FAR_PLANE: f32 = 10000.0;
/// Camera pull-back along +z so the cube is not clipped
pub const CAMERA_DISTANCE: f32 = 1000.0;

/// Per-frame rotation increment in radians, applied to x and y
pub const ROTATION_STEP: f32 = 0.01;

/// Build the demo scene: exactly one subdivided cube at the origin
pub fn build_scene() -> Scene {
    let geometry = Geometry::subdivided_box(
        CUBE_SIZE,
        CUBE_SIZE,
        CUBE_SIZE,
        CUBE_SEGMENTS,
        CUBE_SEGMENTS,
        CUBE_SEGMENTS,
    );
    let material = WireframeMaterial::new(Color::from_hex(CUBE_COLOR));

    let mut scene = Scene::new();
    scene.add(Mesh::new(geometry, material));
    scene
}

/// Build the demo camera for a drawing surface of the given size
pub fn build_camera(viewport: Viewport) -> Camera {
    let mut camera = Camera::new(viewport, FOV_DEGREES.to_radians(), NEAR_PLANE, FAR_PLANE);
    camera.position.z = CAMERA_DISTANCE;
    camera
}

/// One render-loop step: bump the mesh's x and y rotation angles.
///
/// Both frontends call this once per frame before drawing.
pub fn advance(mesh: &mut Mesh) {
    mesh.rotation.rotate(ROTATION_STEP, ROTATION_STEP, 0.0);
}
