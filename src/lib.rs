pub mod error;
pub mod math;

pub use error::{Result, VecmathError};
pub use math::{Vector2, Vector3};
