/// Geometry primitives for 3D rendering
use nalgebra::{Point3, Vector3};

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }
}

/// A triangle soup making up one renderable shape
#[derive(Debug, Clone)]
pub struct Geometry {
    pub triangles: Vec<Triangle>,
}

impl Geometry {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Create a box centered on the origin with subdivided faces.
    ///
    /// Each face is a grid of `useg` x `vseg` cells, two triangles per cell,
    /// so a `w_seg = h_seg = d_seg = n` box has `12 * n * n` triangles. The
    /// interior grid lines are what make the wireframe read as a lattice
    /// rather than 12 bare edges.
    pub fn subdivided_box(
        width: f32,
        height: f32,
        depth: f32,
        w_seg: u32,
        h_seg: u32,
        d_seg: u32,
    ) -> Self {
        let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
        let cells = 2 * (w_seg * h_seg + d_seg * h_seg + w_seg * d_seg) as usize;
        let mut geometry = Self::with_capacity(cells * 2);

        let x = Vector3::new(width, 0.0, 0.0);
        let y = Vector3::new(0.0, height, 0.0);
        let z = Vector3::new(0.0, 0.0, depth);

        // Front (+z) and back (-z)
        geometry.add_face(Point3::new(-hw, -hh, hd), x, y, Vector3::z(), w_seg, h_seg);
        geometry.add_face(Point3::new(hw, -hh, -hd), -x, y, -Vector3::z(), w_seg, h_seg);
        // Right (+x) and left (-x)
        geometry.add_face(Point3::new(hw, -hh, hd), -z, y, Vector3::x(), d_seg, h_seg);
        geometry.add_face(Point3::new(-hw, -hh, -hd), z, y, -Vector3::x(), d_seg, h_seg);
        // Top (+y) and bottom (-y)
        geometry.add_face(Point3::new(-hw, hh, hd), x, -z, Vector3::y(), w_seg, d_seg);
        geometry.add_face(Point3::new(-hw, -hh, -hd), x, z, -Vector3::y(), w_seg, d_seg);

        geometry
    }

    /// Tessellate one box face as a grid of quads split into triangles.
    ///
    /// `du` and `dv` span the full face edge; `origin` is the (0, 0) grid
    /// corner. All triangles on the face share the face normal.
    fn add_face(
        &mut self,
        origin: Point3<f32>,
        du: Vector3<f32>,
        dv: Vector3<f32>,
        normal: Vector3<f32>,
        useg: u32,
        vseg: u32,
    ) {
        let at = |i: u32, j: u32| {
            let position =
                origin + du * (i as f32 / useg as f32) + dv * (j as f32 / vseg as f32);
            Vertex::new(position, normal)
        };

        for j in 0..vseg {
            for i in 0..useg {
                let a = at(i, j);
                let b = at(i + 1, j);
                let c = at(i + 1, j + 1);
                let d = at(i, j + 1);

                self.add_triangle(Triangle::new(a, b, c));
                self.add_triangle(Triangle::new(a, c, d));
            }
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsubdivided_box_is_twelve_triangles() {
        let geometry = Geometry::subdivided_box(2.0, 2.0, 2.0, 1, 1, 1);
        assert_eq!(geometry.triangles.len(), 12);
    }

    #[test]
    fn test_subdivided_box_triangle_count() {
        // 6 faces x 10 x 10 cells x 2 triangles
        let geometry = Geometry::subdivided_box(500.0, 500.0, 500.0, 10, 10, 10);
        assert_eq!(geometry.triangles.len(), 1200);
    }

    #[test]
    fn test_subdivided_box_stays_within_half_extents() {
        let geometry = Geometry::subdivided_box(500.0, 500.0, 500.0, 10, 10, 10);
        for triangle in &geometry.triangles {
            for vertex in &triangle.vertices {
                assert!(vertex.position.x.abs() <= 250.0 + 1e-3);
                assert!(vertex.position.y.abs() <= 250.0 + 1e-3);
                assert!(vertex.position.z.abs() <= 250.0 + 1e-3);
            }
        }
    }

    #[test]
    fn test_face_normals_are_axis_aligned() {
        let geometry = Geometry::subdivided_box(2.0, 2.0, 2.0, 2, 2, 2);
        for triangle in &geometry.triangles {
            for vertex in &triangle.vertices {
                // Every normal is a unit vector along one axis
                assert!((vertex.normal.norm() - 1.0).abs() < 1e-6);
                let components = [vertex.normal.x, vertex.normal.y, vertex.normal.z];
                let nonzero = components.iter().filter(|c| c.abs() > 1e-6).count();
                assert_eq!(nonzero, 1);
            }
        }
    }
}
