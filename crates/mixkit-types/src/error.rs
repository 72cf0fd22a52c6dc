use thiserror::Error;

/// Errors raised while invoking a [`Callable`](crate::Callable).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CallError {
    #[error("expected {expected} argument(s), got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("argument {position} must be {expected}, got {found}")]
    TypeMismatch {
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Failed(String),
}

impl CallError {
    /// Create a free-form failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
