/// Shape primitives for 2D and 3D wireframe rendering
use nalgebra::{Point2, Point3};

use crate::error::{ensure_finite, Error, Result};

/// A closed planar polygon, immutable once constructed.
#[derive(Debug, Clone)]
pub struct Shape2 {
    vertices: Vec<Point2<f32>>,
}

impl Shape2 {
    /// Build a polygon from an ordered vertex list.
    pub fn polygon(vertices: Vec<Point2<f32>>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::InvalidArgument {
                op: "polygon",
                reason: format!("need at least 3 vertices, got {}", vertices.len()),
            });
        }
        for v in &vertices {
            ensure_finite("polygon", &[v.x, v.y])?;
        }
        Ok(Self { vertices })
    }

    /// The unit square with its corner at the origin.
    pub fn unit_square() -> Self {
        Self {
            vertices: vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
        }
    }

    /// An axis-aligned square with its corner at the origin.
    pub fn square(size: f32) -> Result<Self> {
        ensure_finite("square", &[size])?;
        if size <= 0.0 {
            return Err(Error::InvalidArgument {
                op: "square",
                reason: format!("size must be positive, got {size}"),
            });
        }
        Self::polygon(vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ])
    }

    pub fn vertices(&self) -> &[Point2<f32>] {
        &self.vertices
    }

    /// Vertex index pairs forming the closed outline.
    pub fn edges(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| [i, (i + 1) % n])
    }

    /// Replace every vertex through `f`, keeping the outline order.
    pub(crate) fn map_vertices(&self, f: impl Fn(&Point2<f32>) -> Point2<f32>) -> Self {
        Self {
            vertices: self.vertices.iter().map(f).collect(),
        }
    }
}

/// A 3D wireframe: ordered vertices plus an explicit edge list.
#[derive(Debug, Clone)]
pub struct Shape3 {
    vertices: Vec<Point3<f32>>,
    edges: Vec<[usize; 2]>,
}

impl Shape3 {
    /// Build a wireframe from vertices and vertex-index edge pairs.
    pub fn wireframe(vertices: Vec<Point3<f32>>, edges: Vec<[usize; 2]>) -> Result<Self> {
        for v in &vertices {
            ensure_finite("wireframe", &[v.x, v.y, v.z])?;
        }
        for edge in &edges {
            for &i in edge {
                if i >= vertices.len() {
                    return Err(Error::InvalidArgument {
                        op: "wireframe",
                        reason: format!(
                            "edge index {i} out of range for {} vertices",
                            vertices.len()
                        ),
                    });
                }
            }
        }
        Ok(Self { vertices, edges })
    }

    /// The unit cube with one corner at the origin.
    ///
    /// Vertex layout: bottom face 0-3 counter-clockwise, top face 4-7 above
    /// them, 12 edges (two rings plus four uprights).
    pub fn unit_cube() -> Self {
        let s = 1.0;
        Self {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(s, 0.0, 0.0),
                Point3::new(s, s, 0.0),
                Point3::new(0.0, s, 0.0),
                Point3::new(0.0, 0.0, s),
                Point3::new(s, 0.0, s),
                Point3::new(s, s, s),
                Point3::new(0.0, s, s),
            ],
            edges: Self::cube_edges(),
        }
    }

    /// An axis-aligned cube with one corner at the origin.
    pub fn cube(size: f32) -> Result<Self> {
        ensure_finite("cube", &[size])?;
        if size <= 0.0 {
            return Err(Error::InvalidArgument {
                op: "cube",
                reason: format!("size must be positive, got {size}"),
            });
        }
        let mut cube = Self::unit_cube();
        for v in &mut cube.vertices {
            *v *= size;
        }
        Ok(cube)
    }

    fn cube_edges() -> Vec<[usize; 2]> {
        vec![
            [0, 1],
            [1, 2],
            [2, 3],
            [3, 0],
            [4, 5],
            [5, 6],
            [6, 7],
            [7, 4],
            [0, 4],
            [1, 5],
            [2, 6],
            [3, 7],
        ]
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    pub(crate) fn map_vertices(&self, f: impl Fn(&Point3<f32>) -> Point3<f32>) -> Self {
        Self {
            vertices: self.vertices.iter().map(f).collect(),
            edges: self.edges.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square() {
        let square = Shape2::unit_square();
        assert_eq!(square.vertices().len(), 4);
        assert_eq!(square.vertices()[2], Point2::new(1.0, 1.0));
        assert_eq!(square.edges().count(), 4);
        // Outline closes back to the first vertex
        assert_eq!(square.edges().last(), Some([3, 0]));
    }

    #[test]
    fn test_polygon_needs_three_vertices() {
        let result = Shape2::polygon(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_cube() {
        let cube = Shape3::unit_cube();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.edges().len(), 12);
        assert_eq!(cube.vertices()[6], Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_cube_scales_vertices() {
        let cube = Shape3::cube(2.0).unwrap();
        assert_eq!(cube.vertices()[6], Point3::new(2.0, 2.0, 2.0));
        assert_eq!(cube.edges().len(), 12);
    }

    #[test]
    fn test_wireframe_rejects_bad_edge_index() {
        let result = Shape3::wireframe(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            vec![[0, 2]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_square_rejects_nonpositive_size() {
        assert!(Shape2::square(0.0).is_err());
        assert!(Shape3::cube(-1.0).is_err());
    }
}
