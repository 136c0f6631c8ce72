/// Error types shared across the workspace
use std::fmt;

use thiserror::Error;

/// Dimensionality of a shape or transformation matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dim {
    /// 2D, homogeneous 3x3 matrices
    Planar,
    /// 3D, homogeneous 4x4 matrices
    Spatial,
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Planar => write!(f, "2D"),
            Dim::Spatial => write!(f, "3D"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument for {op}: {reason}")]
    InvalidArgument { op: &'static str, reason: String },

    #[error("dimension mismatch: {matrix} matrix applied to {shape} shape")]
    DimensionMismatch { matrix: Dim, shape: Dim },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject NaN and infinite parameters before they reach a matrix.
pub(crate) fn ensure_finite(op: &'static str, values: &[f32]) -> Result<()> {
    for &v in values {
        if !v.is_finite() {
            return Err(Error::InvalidArgument {
                op,
                reason: format!("non-finite value {v}"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_rejects_nan() {
        assert!(ensure_finite("scaling", &[1.0, f32::NAN]).is_err());
        assert!(ensure_finite("scaling", &[1.0, f32::INFINITY]).is_err());
        assert!(ensure_finite("scaling", &[1.0, -2.5]).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = Error::DimensionMismatch {
            matrix: Dim::Spatial,
            shape: Dim::Planar,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: 3D matrix applied to 2D shape"
        );
    }
}
