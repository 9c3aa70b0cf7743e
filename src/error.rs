use thiserror::Error;

/// Errors raised by the checked constructors and builders.
///
/// The permissive API never returns these: degenerate input there degrades to
/// NaN/Inf components instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("invalid shape: expected exactly 3 components, got {got}")]
    InvalidShape { got: usize },

    #[error("degenerate input: {0}")]
    Degenerate(&'static str),

    #[error("resolution must be at least 3, got {0}")]
    Resolution(usize),
}
