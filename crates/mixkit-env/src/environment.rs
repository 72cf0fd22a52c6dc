use std::fmt;

use mixkit_types::{Object, Value};
use serde::{Deserialize, Serialize};

use crate::error::{EnvError, Result};

/// Version of the compiler that built this crate, captured by the build
/// script. Empty when it could not be determined.
const RUSTC_VERSION: &str = env!("MIXKIT_RUSTC_VERSION");

/// Toolchain version the workspace declares as its minimum.
const DECLARED_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

// ---------------------------------------------------------------------------
// EnvironmentKind
// ---------------------------------------------------------------------------

/// Where the code is running.
///
/// Every build target is one of the two kinds, so there is no unknown kind.
/// The host kind is reported as `"nodejs"`, matching the `isNodeJs`
/// predicate; `"host"` is accepted when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvironmentKind {
    /// A wasm32 web target.
    #[serde(rename = "browser")]
    Browser,
    /// A native host process.
    #[serde(rename = "nodejs", alias = "host")]
    Host,
}

impl EnvironmentKind {
    /// Kind for the current compilation target.
    pub fn current() -> Self {
        if cfg!(all(target_arch = "wasm32", target_os = "unknown")) {
            Self::Browser
        } else {
            Self::Host
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Host => "nodejs",
        }
    }
}

impl fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// A detected (or explicitly chosen) runtime environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Browser or host.
    pub kind: EnvironmentKind,
    /// Full version string (e.g. "1.82.0"). On a host this is the version of
    /// the compiler the crate was built with.
    pub version: String,
    /// Major version parsed from `version`; 0 when unparseable.
    pub v: u32,
    /// Legacy engine flag. Never set by detection.
    pub legacy: bool,
}

impl Environment {
    pub fn new(kind: EnvironmentKind, version: impl Into<String>) -> Self {
        let version = version.into();
        let v = major_version(&version);
        Self {
            kind,
            version,
            v,
            legacy: false,
        }
    }

    /// Probe the current target.
    pub fn detect() -> Self {
        let env = Self::with_kind(EnvironmentKind::current());
        tracing::debug!(kind = %env.kind, version = %env.version, "environment detected");
        env
    }

    /// An environment of the given kind carrying the detected version.
    pub fn with_kind(kind: EnvironmentKind) -> Self {
        Self::new(kind, detected_version())
    }

    pub fn is_browser(&self) -> bool {
        self.kind == EnvironmentKind::Browser
    }

    pub fn is_node_js(&self) -> bool {
        self.kind == EnvironmentKind::Host
    }

    pub fn is_ie(&self) -> bool {
        self.legacy
    }

    /// `{type, version, v}` as a value.
    pub fn descriptor(&self) -> Value {
        let mut map = Object::new();
        map.insert("type".into(), Value::from(self.kind.as_str()));
        map.insert("version".into(), Value::from(self.version.as_str()));
        map.insert("v".into(), Value::from(i64::from(self.v)));
        Value::Object(map)
    }

    // -----------------------------------------------------------------------
    // Conditional hooks
    // -----------------------------------------------------------------------

    /// Run `callback` if this is a browser. Returns whether it ran.
    pub fn browser<F: FnOnce()>(&self, callback: F) -> bool {
        self.run_if(EnvironmentKind::Browser, callback)
    }

    /// Run `callback` if this is a host runtime. Returns whether it ran.
    pub fn node_js<F: FnOnce()>(&self, callback: F) -> bool {
        self.run_if(EnvironmentKind::Host, callback)
    }

    /// Version-specific browser hook. Not implemented.
    pub fn browser_version<F: FnOnce()>(&self, version: &str, _callback: F) -> Result<bool> {
        Err(unsupported(EnvironmentKind::Browser, version))
    }

    /// Version-specific host hook. Not implemented.
    pub fn node_js_version<F: FnOnce()>(&self, version: &str, _callback: F) -> Result<bool> {
        Err(unsupported(EnvironmentKind::Host, version))
    }

    fn run_if<F: FnOnce()>(&self, kind: EnvironmentKind, callback: F) -> bool {
        if self.kind != kind {
            return false;
        }
        tracing::debug!(kind = %kind, "running environment hook");
        callback();
        true
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::detect()
    }
}

fn unsupported(kind: EnvironmentKind, version: &str) -> EnvError {
    tracing::warn!(kind = %kind, version, "version-specific environment hook requested");
    EnvError::Unsupported(format!("version-specific {kind} callback (version {version})"))
}

/// The building compiler's version, or the declared minimum when the build
/// script could not read it.
fn detected_version() -> &'static str {
    if RUSTC_VERSION.is_empty() {
        DECLARED_VERSION
    } else {
        RUSTC_VERSION
    }
}

fn major_version(version: &str) -> u32 {
    version
        .split('.')
        .next()
        .and_then(|major| major.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn native_tests_run_on_host() {
        let env = Environment::detect();
        assert!(env.is_node_js());
        assert!(!env.is_browser());
        assert!(!env.is_ie());
    }

    #[test]
    fn major_version_parsing() {
        assert_eq!(Environment::new(EnvironmentKind::Host, "18.12.1").v, 18);
        assert_eq!(Environment::new(EnvironmentKind::Host, "1.80").v, 1);
        assert_eq!(Environment::new(EnvironmentKind::Host, "").v, 0);
        assert_eq!(Environment::new(EnvironmentKind::Host, "nightly").v, 0);
    }

    #[test]
    fn descriptor_shape() {
        let env = Environment::new(EnvironmentKind::Browser, "11.0");
        let json = serde_json::Value::from(env.descriptor());
        assert_eq!(json, json!({"type": "browser", "version": "11.0", "v": 11}));
    }

    #[test]
    fn matching_hook_runs_once() {
        let env = Environment::with_kind(EnvironmentKind::Host);
        let mut runs = 0;
        assert!(env.node_js(|| runs += 1));
        assert_eq!(runs, 1);
    }

    #[test]
    fn other_hook_is_a_no_op() {
        let env = Environment::with_kind(EnvironmentKind::Host);
        let mut ran = false;
        assert!(!env.browser(|| ran = true));
        assert!(!ran);

        let env = Environment::with_kind(EnvironmentKind::Browser);
        assert!(env.browser(|| ran = true));
        assert!(ran);
    }

    #[test]
    fn version_specific_hooks_are_unsupported() {
        let env = Environment::with_kind(EnvironmentKind::Host);
        let mut ran = false;
        let err = env.node_js_version("18", || ran = true).unwrap_err();
        assert!(matches!(err, EnvError::Unsupported(_)));
        assert!(err.to_string().contains("version-specific nodejs"));
        assert!(env.browser_version("11", || ran = true).is_err());
        assert!(!ran);
    }

    #[test]
    fn kind_names() {
        assert_eq!(serde_json::to_value(EnvironmentKind::Host).unwrap(), json!("nodejs"));
        let kind: EnvironmentKind = serde_json::from_value(json!("browser")).unwrap();
        assert_eq!(kind, EnvironmentKind::Browser);
        let kind: EnvironmentKind = serde_json::from_value(json!("host")).unwrap();
        assert_eq!(kind, EnvironmentKind::Host);
    }

    #[test]
    fn host_descriptor_reports_nodejs() {
        let env = Environment::new(EnvironmentKind::Host, "1.82.0");
        let json = serde_json::Value::from(env.descriptor());
        assert_eq!(json, json!({"type": "nodejs", "version": "1.82.0", "v": 1}));
    }

    #[test]
    fn detected_version_is_the_building_compiler() {
        let env = Environment::detect();
        if !RUSTC_VERSION.is_empty() {
            assert_eq!(env.version, RUSTC_VERSION);
        } else {
            assert_eq!(env.version, DECLARED_VERSION);
        }
        assert_eq!(env.v, 1);
    }
}
