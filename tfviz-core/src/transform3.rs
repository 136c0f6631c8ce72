/// Spatial transformation matrices (homogeneous 4x4)
use nalgebra::{Matrix4, Vector3};

use crate::error::{ensure_finite, Result};

/// Principal axes for spatial rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis3 {
    X,
    Y,
    Z,
}

/// Reflection axes for spatial shapes.
///
/// Axis variants mirror through the named axis line (the other two
/// coordinates are negated); `Origin` negates all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection3 {
    XAxis,
    YAxis,
    ZAxis,
    Origin,
}

/// Shear factors per axis pair. `xy` adds that multiple of y to x,
/// `zx` adds that multiple of x to z, and so on. Unset factors are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Shear3 {
    pub xy: f32,
    pub xz: f32,
    pub yx: f32,
    pub yz: f32,
    pub zx: f32,
    pub zy: f32,
}

impl Shear3 {
    /// Shear x by y only: x' = x + shx * y.
    pub fn along_x(shx: f32) -> Self {
        Self {
            xy: shx,
            ..Self::default()
        }
    }
}

/// Transform builder for spatial transformations
pub struct Transform3;

impl Transform3 {
    /// Create a translation matrix
    pub fn translation(tx: f32, ty: f32, tz: f32) -> Result<Matrix4<f32>> {
        ensure_finite("translation", &[tx, ty, tz])?;
        Ok(Matrix4::new_translation(&Vector3::new(tx, ty, tz)))
    }

    /// Create a rotation matrix about a principal axis (angle in radians)
    pub fn rotation(axis: Axis3, theta: f32) -> Result<Matrix4<f32>> {
        ensure_finite("rotation", &[theta])?;
        let axisangle = match axis {
            Axis3::X => Vector3::new(theta, 0.0, 0.0),
            Axis3::Y => Vector3::new(0.0, theta, 0.0),
            Axis3::Z => Vector3::new(0.0, 0.0, theta),
        };
        Ok(Matrix4::new_rotation(axisangle))
    }

    /// Create a scale matrix
    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Result<Matrix4<f32>> {
        ensure_finite("scaling", &[sx, sy, sz])?;
        Ok(Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)))
    }

    /// Create a shear matrix from per-axis-pair factors
    pub fn shearing(factors: Shear3) -> Result<Matrix4<f32>> {
        let Shear3 {
            xy,
            xz,
            yx,
            yz,
            zx,
            zy,
        } = factors;
        ensure_finite("shearing", &[xy, xz, yx, yz, zx, zy])?;
        #[rustfmt::skip]
        let m = Matrix4::new(
            1.0, xy, xz, 0.0,
            yx, 1.0, yz, 0.0,
            zx, zy, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Ok(m)
    }

    /// Create a reflection matrix for the given axis
    pub fn reflection(axis: Reflection3) -> Matrix4<f32> {
        let diag = match axis {
            Reflection3::XAxis => Vector3::new(1.0, -1.0, -1.0),
            Reflection3::YAxis => Vector3::new(-1.0, 1.0, -1.0),
            Reflection3::ZAxis => Vector3::new(-1.0, -1.0, 1.0),
            Reflection3::Origin => Vector3::new(-1.0, -1.0, -1.0),
        };
        Matrix4::new_nonuniform_scaling(&diag)
    }

    /// Multiply matrices so they apply in slice order: the first entry acts
    /// on a shape first. `compose(&[a, b, c])` is the product `c * b * a`.
    pub fn compose(matrices: &[Matrix4<f32>]) -> Matrix4<f32> {
        matrices
            .iter()
            .fold(Matrix4::identity(), |acc, m| m * acc)
    }
}
