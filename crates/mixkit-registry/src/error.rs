use mixkit_types::CallError;

/// Errors that can occur when using a namespace.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No method is registered under this name.
    #[error("unknown method: {name}")]
    UnknownMethod { name: String },

    /// No utility is registered under this name.
    #[error("unknown utility: {name}")]
    UnknownUtil { name: String },

    /// A registered function returned an error.
    #[error("call to '{name}' failed: {source}")]
    Call {
        name: String,
        #[source]
        source: CallError,
    },

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    pub(crate) fn call(name: &str, source: CallError) -> Self {
        Self::Call {
            name: name.to_string(),
            source,
        }
    }
}

/// Convenience type alias for namespace operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
