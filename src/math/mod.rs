pub mod geometry;
mod ops;
pub mod scalar;
mod vector2;
mod vector3;

pub use scalar::{approx_eq, is_zero};
pub use vector2::Vector2;
pub use vector3::Vector3;

/// Global tolerance for floating-point comparisons and near-zero guards.
pub const EPSILON: f32 = 1e-5;
