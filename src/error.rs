use thiserror::Error;

/// Top-level error type for the vecmath crate.
///
/// Numeric degeneracies (zero-length normalize, total internal reflection, ...)
/// never surface here; they resolve to the zero vector. Errors are reserved for
/// structural misuse at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VecmathError {
    #[error("{operation} requires at least one vector")]
    EmptyInput { operation: &'static str },

    #[error("expected {expected} components, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`VecmathError`].
pub type Result<T> = std::result::Result<T, VecmathError>;
