/// Scene graph - meshes and their placement
use nalgebra::{Matrix4, Point3};

use crate::geometry::Geometry;
use crate::material::WireframeMaterial;
use crate::transform::{RotationState, Transform};

/// A renderable object: geometry plus material plus placement.
///
/// Geometry and material are fixed at construction; only `position` and
/// `rotation` are open for mutation, and the demo only ever touches
/// `rotation`.
#[derive(Debug, Clone)]
pub struct Mesh {
    geometry: Geometry,
    material: WireframeMaterial,
    pub position: Point3<f32>,
    pub rotation: RotationState,
}

impl Mesh {
    /// Create a mesh at the origin with zero rotation
    pub fn new(geometry: Geometry, material: WireframeMaterial) -> Self {
        Self {
            geometry,
            material,
            position: Point3::origin(),
            rotation: RotationState::zero(),
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn material(&self) -> &WireframeMaterial {
        &self.material
    }

    /// Model matrix combining the mesh's rotation and position
    pub fn model_matrix(&self) -> Matrix4<f32> {
        let translation =
            Transform::translation_matrix(self.position.x, self.position.y, self.position.z);
        translation * Transform::rotation_matrix(&self.rotation)
    }
}

/// The set of visible objects
#[derive(Debug, Clone, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self { meshes: Vec::new() }
    }

    pub fn add(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut [Mesh] {
        &mut self.meshes
    }
}
