/// Ringcube Core Library - Shared scene and projection logic
///
/// This library provides the stateless core for the rotating-cube demo:
/// geometry construction, transformation matrices, perspective projection,
/// and the fixed demo content (one wireframe cube plus its camera).

pub mod content;
pub mod geometry;
pub mod material;
pub mod projection;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Geometry, Triangle, Vertex};
pub use material::{Color, WireframeMaterial};
pub use projection::{Camera, Viewport};
pub use scene::{Mesh, Scene};
pub use transform::{RotationState, Transform};
