/// Planar transformation matrices (homogeneous 3x3)
use nalgebra::{Matrix3, Vector2};

use crate::error::{ensure_finite, Result};

/// Reflection axes for planar shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection2 {
    /// Across the x-axis (negates y)
    XAxis,
    /// Across the y-axis (negates x)
    YAxis,
    /// Through the origin (negates both)
    Origin,
    /// Across the line y = x (swaps x and y)
    LineYEqualsX,
    /// Across the line y = -x
    LineYEqualsNegX,
}

/// Transform builder for planar transformations
pub struct Transform2;

impl Transform2 {
    /// Create a translation matrix
    pub fn translation(tx: f32, ty: f32) -> Result<Matrix3<f32>> {
        ensure_finite("translation", &[tx, ty])?;
        Ok(Matrix3::new_translation(&Vector2::new(tx, ty)))
    }

    /// Create a counter-clockwise rotation matrix (angle in radians)
    pub fn rotation(theta: f32) -> Result<Matrix3<f32>> {
        ensure_finite("rotation", &[theta])?;
        Ok(Matrix3::new_rotation(theta))
    }

    /// Create a scale matrix
    pub fn scaling(sx: f32, sy: f32) -> Result<Matrix3<f32>> {
        ensure_finite("scaling", &[sx, sy])?;
        Ok(Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)))
    }

    /// Create a shear matrix: x' = x + shx * y, y' = y + shy * x
    pub fn shearing(shx: f32, shy: f32) -> Result<Matrix3<f32>> {
        ensure_finite("shearing", &[shx, shy])?;
        #[rustfmt::skip]
        let m = Matrix3::new(
            1.0, shx, 0.0,
            shy, 1.0, 0.0,
            0.0, 0.0, 1.0,
        );
        Ok(m)
    }

    /// Create a reflection matrix for the given axis
    pub fn reflection(axis: Reflection2) -> Matrix3<f32> {
        #[rustfmt::skip]
        let m = match axis {
            Reflection2::XAxis => Matrix3::new(
                1.0, 0.0, 0.0,
                0.0, -1.0, 0.0,
                0.0, 0.0, 1.0,
            ),
            Reflection2::YAxis => Matrix3::new(
                -1.0, 0.0, 0.0,
                0.0, 1.0, 0.0,
                0.0, 0.0, 1.0,
            ),
            Reflection2::Origin => Matrix3::new(
                -1.0, 0.0, 0.0,
                0.0, -1.0, 0.0,
                0.0, 0.0, 1.0,
            ),
            Reflection2::LineYEqualsX => Matrix3::new(
                0.0, 1.0, 0.0,
                1.0, 0.0, 0.0,
                0.0, 0.0, 1.0,
            ),
            Reflection2::LineYEqualsNegX => Matrix3::new(
                0.0, -1.0, 0.0,
                -1.0, 0.0, 0.0,
                0.0, 0.0, 1.0,
            ),
        };
        m
    }

    /// Multiply matrices so they apply in slice order: the first entry acts
    /// on a shape first. `compose(&[a, b, c])` is the product `c * b * a`.
    pub fn compose(matrices: &[Matrix3<f32>]) -> Matrix3<f32> {
        matrices
            .iter()
            .fold(Matrix3::identity(), |acc, m| m * acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    use crate::geometry::Shape2;

    const EPS: f32 = 1e-5;

    fn transform_vertices(shape: &Shape2, m: &Matrix3<f32>) -> Vec<Point2<f32>> {
        shape.vertices().iter().map(|v| m.transform_point(v)).collect()
    }

    #[test]
    fn test_translation_of_unit_square() {
        let m = Transform2::translation(2.0, 3.0).unwrap();
        let moved = transform_vertices(&Shape2::unit_square(), &m);
        let expected = [(2.0, 3.0), (3.0, 3.0), (3.0, 4.0), (2.0, 4.0)];
        for (p, (x, y)) in moved.iter().zip(expected) {
            assert!((p.x - x).abs() < EPS);
            assert!((p.y - y).abs() < EPS);
        }
    }

    #[test]
    fn test_translation_round_trip() {
        let forward = Transform2::translation(2.5, -1.25).unwrap();
        let back = Transform2::translation(-2.5, 1.25).unwrap();
        let round_trip = Transform2::compose(&[forward, back]);
        assert!((round_trip - Matrix3::identity()).norm() < EPS);
    }

    #[test]
    fn test_rotation_inverse_is_identity() {
        let theta = 0.7;
        let round_trip = Transform2::compose(&[
            Transform2::rotation(theta).unwrap(),
            Transform2::rotation(-theta).unwrap(),
        ]);
        assert!((round_trip - Matrix3::identity()).norm() < EPS);
    }

    #[test]
    fn test_unit_scaling_is_identity() {
        let m = Transform2::scaling(1.0, 1.0).unwrap();
        assert!((m - Matrix3::identity()).norm() < EPS);
    }

    #[test]
    fn test_reflection_twice_restores() {
        for axis in [
            Reflection2::XAxis,
            Reflection2::YAxis,
            Reflection2::Origin,
            Reflection2::LineYEqualsX,
            Reflection2::LineYEqualsNegX,
        ] {
            let m = Transform2::reflection(axis);
            assert!((m * m - Matrix3::identity()).norm() < EPS);
        }
    }

    #[test]
    fn test_shearing_moves_only_sheared_coordinate() {
        let m = Transform2::shearing(2.0, 0.0).unwrap();
        let p = m.transform_point(&Point2::new(1.0, 1.0));
        assert!((p.x - 3.0).abs() < EPS);
        assert!((p.y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_compose_applies_in_slice_order() {
        // Translate then rotate 90 degrees CCW: (1, 0) -> (3, 0) -> (0, 3)
        let translate = Transform2::translation(2.0, 0.0).unwrap();
        let rotate = Transform2::rotation(std::f32::consts::FRAC_PI_2).unwrap();

        let translate_first = Transform2::compose(&[translate, rotate]);
        let p = translate_first.transform_point(&Point2::new(1.0, 0.0));
        assert!((p.x - 0.0).abs() < EPS);
        assert!((p.y - 3.0).abs() < EPS);

        // Opposite order: (1, 0) -> (0, 1) -> (2, 1)
        let rotate_first = Transform2::compose(&[rotate, translate]);
        let q = rotate_first.transform_point(&Point2::new(1.0, 0.0));
        assert!((q.x - 2.0).abs() < EPS);
        assert!((q.y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_compose_preserves_affine_bottom_row() {
        let m = Transform2::compose(&[
            Transform2::translation(2.0, 1.0).unwrap(),
            Transform2::scaling(2.0, 2.0).unwrap(),
            Transform2::rotation(0.25).unwrap(),
            Transform2::shearing(0.5, 0.0).unwrap(),
        ]);
        assert!((m[(2, 0)]).abs() < EPS);
        assert!((m[(2, 1)]).abs() < EPS);
        assert!((m[(2, 2)] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_empty_compose_is_identity() {
        assert_eq!(Transform2::compose(&[]), Matrix3::identity());
    }

    #[test]
    fn test_non_finite_arguments_rejected() {
        assert!(Transform2::translation(f32::NAN, 0.0).is_err());
        assert!(Transform2::rotation(f32::INFINITY).is_err());
        assert!(Transform2::scaling(1.0, f32::NEG_INFINITY).is_err());
        assert!(Transform2::shearing(f32::NAN, f32::NAN).is_err());
    }
}
