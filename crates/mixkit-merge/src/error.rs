//! Error types for the merge crate.

use mixkit_types::CallError;

/// Errors from the dynamic merge entry points.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    /// The target (position 0) or a source (position 1..) is not an object.
    #[error("argument {position} is not an object (found {found})")]
    NotAnObject {
        position: usize,
        found: &'static str,
    },
}

impl From<MergeError> for CallError {
    fn from(err: MergeError) -> Self {
        match err {
            MergeError::NotAnObject { position, found } => CallError::TypeMismatch {
                position,
                expected: "object",
                found,
            },
        }
    }
}
