/// 3D transformation matrices and rotation state
use nalgebra::{Matrix4, Vector3};

/// Rotation state around three axes (in radians)
///
/// Angles accumulate without normalization; callers that run for very long
/// see monotonically growing values, matching the accumulated-step contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from a rotation state
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));

        // Apply rotations in order: Z, Y, X
        rz * ry * rx
    }

    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Create a model-view-projection matrix
    pub fn mvp_matrix(
        model: &Matrix4<f32>,
        view: &Matrix4<f32>,
        projection: &Matrix4<f32>,
    ) -> Matrix4<f32> {
        projection * view * model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        // Stepping from zero is exact
        state.rotate(0.1, 0.2, 0.3);
        assert_eq!(state, RotationState::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_rotation_accumulates_without_wrapping() {
        let mut state = RotationState::zero();
        for _ in 0..1000 {
            state.rotate(0.01, 0.01, 0.0);
        }
        // 10 radians, past 2*pi, still unwrapped
        assert!(state.x > std::f32::consts::TAU);
        assert!((state.x - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::zero();
        let matrix = Transform::rotation_matrix(&rotation);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_translation_moves_origin() {
        let matrix = Transform::translation_matrix(1.0, 2.0, 3.0);
        let moved = matrix.transform_point(&nalgebra::Point3::origin());
        assert!((moved - nalgebra::Point3::new(1.0, 2.0, 3.0)).norm() < 1e-6);
    }
}
