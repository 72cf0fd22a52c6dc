use mixkit_env::EnvironmentKind;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// Configuration for building a [`Namespace`](crate::Namespace).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Name used in log output.
    pub name: String,
    /// Whether [`Namespace::standard`](crate::Namespace::standard) installs
    /// the built-in modules.
    pub standard_modules: bool,
    /// Overrides environment detection when set.
    pub environment: Option<EnvironmentKind>,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            name: "mixkit".into(),
            standard_modules: true,
            environment: None,
        }
    }
}

impl NamespaceConfig {
    /// No built-in modules; only what the caller registers.
    pub fn bare() -> Self {
        Self {
            standard_modules: false,
            ..Default::default()
        }
    }

    /// Default configuration pinned to an environment kind.
    pub fn with_environment(kind: EnvironmentKind) -> Self {
        Self {
            environment: Some(kind),
            ..Default::default()
        }
    }

    /// Parse a JSON configuration document. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| RegistryError::Config(e.to_string()))
    }
}
