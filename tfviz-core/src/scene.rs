/// Dimension-checked application of transforms to shapes
use std::fmt;

use nalgebra::{Matrix3, Matrix4};

use crate::error::{Dim, Error, Result};
use crate::geometry::{Shape2, Shape3};

/// A planar or spatial shape, tagged with its dimensionality.
#[derive(Debug, Clone)]
pub enum Shape {
    Planar(Shape2),
    Spatial(Shape3),
}

impl Shape {
    pub fn dim(&self) -> Dim {
        match self {
            Shape::Planar(_) => Dim::Planar,
            Shape::Spatial(_) => Dim::Spatial,
        }
    }
}

impl From<Shape2> for Shape {
    fn from(shape: Shape2) -> Self {
        Shape::Planar(shape)
    }
}

impl From<Shape3> for Shape {
    fn from(shape: Shape3) -> Self {
        Shape::Spatial(shape)
    }
}

/// A homogeneous transformation matrix tagged with its dimensionality.
///
/// Builder output is affine by construction; the checked constructors guard
/// caller-supplied matrices so the bottom row stays [0, .., 0, 1].
#[derive(Debug, Clone, PartialEq)]
pub enum TransformMatrix {
    Planar(Matrix3<f32>),
    Spatial(Matrix4<f32>),
}

impl TransformMatrix {
    /// Wrap a caller-supplied 3x3 matrix, rejecting non-affine input.
    pub fn planar(matrix: Matrix3<f32>) -> Result<Self> {
        let wrapped = Self::Planar(matrix);
        if !wrapped.is_affine() {
            return Err(Error::InvalidArgument {
                op: "planar",
                reason: "bottom row must be [0, 0, 1]".to_string(),
            });
        }
        Ok(wrapped)
    }

    /// Wrap a caller-supplied 4x4 matrix, rejecting non-affine input.
    pub fn spatial(matrix: Matrix4<f32>) -> Result<Self> {
        let wrapped = Self::Spatial(matrix);
        if !wrapped.is_affine() {
            return Err(Error::InvalidArgument {
                op: "spatial",
                reason: "bottom row must be [0, 0, 0, 1]".to_string(),
            });
        }
        Ok(wrapped)
    }

    pub fn dim(&self) -> Dim {
        match self {
            TransformMatrix::Planar(_) => Dim::Planar,
            TransformMatrix::Spatial(_) => Dim::Spatial,
        }
    }

    /// Whether the bottom row preserves the homogeneous structure.
    pub fn is_affine(&self) -> bool {
        const EPS: f32 = 1e-6;
        match self {
            TransformMatrix::Planar(m) => {
                m[(2, 0)].abs() < EPS && m[(2, 1)].abs() < EPS && (m[(2, 2)] - 1.0).abs() < EPS
            }
            TransformMatrix::Spatial(m) => {
                (0..3).all(|col| m[(3, col)].abs() < EPS) && (m[(3, 3)] - 1.0).abs() < EPS
            }
        }
    }

    /// Multiply every vertex of `shape` through the homogeneous matrix.
    ///
    /// Fails with `DimensionMismatch` before touching any vertex when the
    /// matrix and shape dimensionalities differ.
    pub fn apply(&self, shape: &Shape) -> Result<Shape> {
        match (self, shape) {
            (TransformMatrix::Planar(m), Shape::Planar(s)) => {
                Ok(Shape::Planar(s.map_vertices(|v| m.transform_point(v))))
            }
            (TransformMatrix::Spatial(m), Shape::Spatial(s)) => {
                Ok(Shape::Spatial(s.map_vertices(|v| m.transform_point(v))))
            }
            _ => Err(Error::DimensionMismatch {
                matrix: self.dim(),
                shape: shape.dim(),
            }),
        }
    }
}

impl fmt::Display for TransformMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformMatrix::Planar(m) => write!(f, "{m}"),
            TransformMatrix::Spatial(m) => write!(f, "{m}"),
        }
    }
}

/// An original shape, the matrix applied to it, and the result.
#[derive(Debug, Clone)]
pub struct Scene {
    title: String,
    matrix: TransformMatrix,
    original: Shape,
    transformed: Shape,
}

impl Scene {
    /// Apply `matrix` to `shape` once and keep both for rendering.
    pub fn new(
        title: impl Into<String>,
        shape: impl Into<Shape>,
        matrix: TransformMatrix,
    ) -> Result<Self> {
        let original = shape.into();
        let transformed = matrix.apply(&original)?;
        Ok(Self {
            title: title.into(),
            matrix,
            original,
            transformed,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn matrix(&self) -> &TransformMatrix {
        &self.matrix
    }

    pub fn original(&self) -> &Shape {
        &self.original
    }

    pub fn transformed(&self) -> &Shape {
        &self.transformed
    }

    pub fn dim(&self) -> Dim {
        self.original.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    use crate::transform2::Transform2;
    use crate::transform3::Transform3;

    #[test]
    fn test_apply_planar() {
        let matrix = TransformMatrix::Planar(Transform2::translation(2.0, 3.0).unwrap());
        let scene = Scene::new("translate", Shape2::unit_square(), matrix).unwrap();
        match scene.transformed() {
            Shape::Planar(s) => assert_eq!(s.vertices()[0], Point2::new(2.0, 3.0)),
            Shape::Spatial(_) => panic!("planar scene produced a spatial shape"),
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let matrix = TransformMatrix::Spatial(Transform3::translation(1.0, 0.0, 0.0).unwrap());
        let err = matrix.apply(&Shape2::unit_square().into()).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                matrix: Dim::Spatial,
                shape: Dim::Planar,
            }
        ));
    }

    #[test]
    fn test_original_is_untouched() {
        let matrix = TransformMatrix::Planar(Transform2::scaling(2.0, 2.0).unwrap());
        let scene = Scene::new("scale", Shape2::unit_square(), matrix).unwrap();
        match scene.original() {
            Shape::Planar(s) => assert_eq!(s.vertices()[2], Point2::new(1.0, 1.0)),
            Shape::Spatial(_) => panic!("planar scene produced a spatial shape"),
        }
    }

    #[test]
    fn test_checked_constructor_rejects_non_affine() {
        let mut bad = Transform2::rotation(0.3).unwrap();
        bad[(2, 0)] = 0.5;
        assert!(TransformMatrix::planar(bad).is_err());

        let good = Transform3::scaling(2.0, 1.0, 1.0).unwrap();
        assert!(TransformMatrix::spatial(good).is_ok());
    }
}
