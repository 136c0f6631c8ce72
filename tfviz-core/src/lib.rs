/// TFViz Core Library - Shared geometry and transformation logic
///
/// This library provides the stateless core for visualizing affine
/// transformations: shape primitives, homogeneous transform builders,
/// dimension-checked application, and projection utilities.

pub mod demos;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod scene;
pub mod transform2;
pub mod transform3;

// Re-export commonly used types
pub use error::{Dim, Error, Result};
pub use geometry::{Shape2, Shape3};
pub use projection::{Camera, ProjectionMode, Viewport};
pub use scene::{Scene, Shape, TransformMatrix};
pub use transform2::{Reflection2, Transform2};
pub use transform3::{Axis3, Reflection3, Shear3, Transform3};
