//! Error types for environment operations.

use thiserror::Error;

/// Errors that can occur during environment operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    /// The requested feature exists in the interface but is not implemented.
    #[error("unsupported feature: {0}")]
    Unsupported(String),
}

/// Convenience type alias for environment operations.
pub type Result<T> = std::result::Result<T, EnvError>;
