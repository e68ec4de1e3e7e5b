/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

use crate::transform::Transform;

/// Drawing surface dimensions, captured once at setup.
///
/// There is no resize handling anywhere in the demo; whatever the host
/// reports at startup is the size for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Perspective camera for 3D rendering
///
/// Constructed at the origin looking down -z; callers position it before
/// the first draw (the demo pulls it back along +z so the cube is not
/// clipped by the near plane).
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(viewport: Viewport, fov: f32, near: f32, far: f32) -> Self {
        Self {
            position: Point3::origin(),
            target: Point3::origin(),
            up: Vector3::y(),
            fov,
            aspect: viewport.aspect(),
            near,
            far,
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the perspective projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Project a 3D point to 2D screen space.
    ///
    /// Returns `None` when the point falls outside the viewing frustum.
    /// Screen y grows downward, matching both terminal rows and canvas
    /// pixels.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        viewport: Viewport,
    ) -> Option<(f32, f32, f32)> {
        let view = self.view_matrix();
        let projection = self.projection_matrix();
        let mvp = Transform::mvp_matrix(model_matrix, &view, &projection);

        let clip = mvp * point.to_homogeneous();
        if clip.w <= 1e-6 {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let depth = clip.z / clip.w;

        // Frustum test in normalized device coordinates
        if !(-1.0..=1.0).contains(&ndc_x)
            || !(-1.0..=1.0).contains(&ndc_y)
            || !(-1.0..=1.0).contains(&depth)
        {
            return None;
        }

        let screen_x = (ndc_x + 1.0) * 0.5 * viewport.width as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * viewport.height as f32;

        Some((screen_x, screen_y, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_camera() -> Camera {
        let mut camera = Camera::new(
            Viewport::new(800, 600),
            75.0_f32.to_radians(),
            1.0,
            10000.0,
        );
        camera.position.z = 1000.0;
        camera
    }

    #[test]
    fn test_viewport_aspect() {
        let viewport = Viewport::new(800, 600);
        assert_relative_eq!(viewport.aspect(), 800.0 / 600.0, epsilon = 1e-6);
    }

    #[test]
    fn test_camera_starts_at_origin_until_placed() {
        let camera = Camera::new(Viewport::new(800, 600), 75.0_f32.to_radians(), 1.0, 10000.0);
        assert_eq!(camera.position, Point3::origin());
        assert_eq!(camera.target, Point3::origin());
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = test_camera();
        let (x, y, depth) = camera
            .project_to_screen(
                &Point3::origin(),
                &Matrix4::identity(),
                Viewport::new(800, 600),
            )
            .expect("origin is inside the frustum");
        assert_relative_eq!(x, 400.0, epsilon = 1e-2);
        assert_relative_eq!(y, 300.0, epsilon = 1e-2);
        assert!((-1.0..=1.0).contains(&depth));
    }

    #[test]
    fn test_point_behind_camera_is_clipped() {
        let camera = test_camera();
        let behind = Point3::new(0.0, 0.0, 2000.0);
        assert!(camera
            .project_to_screen(&behind, &Matrix4::identity(), Viewport::new(800, 600))
            .is_none());
    }

    #[test]
    fn test_point_beyond_far_plane_is_clipped() {
        let camera = test_camera();
        let too_far = Point3::new(0.0, 0.0, -20000.0);
        assert!(camera
            .project_to_screen(&too_far, &Matrix4::identity(), Viewport::new(800, 600))
            .is_none());
    }

    #[test]
    fn test_nearer_point_has_smaller_depth() {
        let camera = test_camera();
        let viewport = Viewport::new(800, 600);
        let near = camera
            .project_to_screen(&Point3::new(0.0, 0.0, 250.0), &Matrix4::identity(), viewport)
            .expect("near point visible");
        let far = camera
            .project_to_screen(&Point3::new(0.0, 0.0, -250.0), &Matrix4::identity(), viewport)
            .expect("far point visible");
        assert!(near.2 < far.2);
    }
}
