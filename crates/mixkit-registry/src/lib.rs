//! Namespace registry for mixkit.
//!
//! A [`Namespace`] is one shared registry of named operations in two
//! flavors: methods, invoked with the namespace as receiver, and utilities,
//! plain callables. Capabilities are contributed by [`Module`]s and
//! [`ModuleDescriptor`]s, either directly on a namespace or through a
//! [`NamespaceBuilder`] that applies them in order at construction time.
//!
//! # Quick Start
//!
//! ```rust
//! use mixkit_registry::{Namespace, NamespaceConfig};
//! use mixkit_types::Value;
//!
//! let ns = Namespace::standard(NamespaceConfig::default());
//! let merged = ns
//!     .call_util(
//!         "merge",
//!         &[
//!             Value::from(serde_json::json!({"tags": ["a"]})),
//!             Value::from(serde_json::json!({"tags": ["b", "c"]})),
//!         ],
//!     )
//!     .unwrap();
//! assert_eq!(merged, Value::from(serde_json::json!({"tags": ["a", "b", "c"]})));
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod method;
pub mod module;
pub mod modules;
pub mod namespace;

// Re-exports for convenience.
pub use config::NamespaceConfig;
pub use descriptor::ModuleDescriptor;
pub use error::{RegistryError, Result};
pub use method::{Method, MethodFn};
pub use module::{Module, NamespaceBuilder};
pub use modules::{EnvironmentModule, MergeModule, TypesModule, PREDICATES};
pub use namespace::Namespace;

#[cfg(test)]
mod tests {
    use super::*;
    use mixkit_env::EnvironmentKind;
    use mixkit_types::{CallError, Value};
    use serde_json::json;

    fn standard() -> Namespace {
        Namespace::standard(NamespaceConfig::with_environment(EnvironmentKind::Host))
    }

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    // -----------------------------------------------------------------------
    // 1. Standard namespace carries every built-in utility
    // -----------------------------------------------------------------------
    #[test]
    fn standard_namespace_surface() {
        let ns = standard();
        for name in [
            "isFunction", "isObject", "isArray", "isBoolean", "isNumber", "isError",
            "extend", "merge", "mergeWith", "isBrowser", "isNodeJs", "isIE", "environment", "platform",
        ] {
            assert!(ns.has_util(name), "missing utility {name}");
        }
        assert_eq!(ns.method_names(), ["extend"]);
    }

    // -----------------------------------------------------------------------
    // 2. Bare config installs nothing
    // -----------------------------------------------------------------------
    #[test]
    fn bare_standard_namespace_is_empty() {
        let ns = Namespace::standard(NamespaceConfig::bare());
        assert!(ns.util_names().is_empty());
        assert!(ns.method_names().is_empty());
    }

    // -----------------------------------------------------------------------
    // 3. Merge scenarios through the namespace
    // -----------------------------------------------------------------------
    #[test]
    fn merge_scenarios() {
        let ns = standard();
        let tags = ns
            .call_util("merge", &[v(json!({"tags": ["a"]})), v(json!({"tags": ["b", "c"]}))])
            .unwrap();
        assert_eq!(tags, v(json!({"tags": ["a", "b", "c"]})));

        let cfg = ns
            .call_util(
                "merge",
                &[v(json!({"cfg": {"x": 1, "y": 2}})), v(json!({"cfg": {"y": 3, "z": 4}}))],
            )
            .unwrap();
        assert_eq!(cfg, v(json!({"cfg": {"x": 1, "y": 3, "z": 4}})));
    }

    // -----------------------------------------------------------------------
    // 4. Extend is a plain overwrite
    // -----------------------------------------------------------------------
    #[test]
    fn extend_scenario() {
        let ns = standard();
        let out = ns
            .call_util("extend", &[v(json!({"a": 1})), v(json!({"a": 2})), v(json!({"b": 3}))])
            .unwrap();
        assert_eq!(out, v(json!({"a": 2, "b": 3})));
    }

    // -----------------------------------------------------------------------
    // 5. A user module overrides a built-in utility
    // -----------------------------------------------------------------------
    #[test]
    fn user_definition_overrides_builtin() {
        let ns = NamespaceBuilder::standard(NamespaceConfig::default())
            .util("isNumber", |_| Ok(Value::from("patched")))
            .build();
        assert_eq!(ns.call_util("isNumber", &[]).unwrap(), Value::from("patched"));
        assert_eq!(ns.call_util("isArray", &[v(json!([]))]).unwrap(), Value::Bool(true));
    }

    // -----------------------------------------------------------------------
    // 6. Methods and utilities of the same name coexist
    // -----------------------------------------------------------------------
    #[test]
    fn extend_util_and_method_coexist() {
        let mut ns = standard();
        let from_util = ns
            .call_util("extend", &[v(json!({"x": 1})), v(json!({"y": 2}))])
            .unwrap();
        assert_eq!(from_util, v(json!({"x": 1, "y": 2})));
        assert!(ns.target().is_empty());

        let from_method = ns.call_method("extend", &[v(json!({"z": 3}))]).unwrap();
        assert_eq!(from_method, v(json!({"z": 3})));
    }

    // -----------------------------------------------------------------------
    // 7. Defining an empty descriptor changes nothing
    // -----------------------------------------------------------------------
    #[test]
    fn define_empty_is_idempotent() {
        let mut ns = standard();
        let utils: Vec<String> = ns.util_names().iter().map(|s| s.to_string()).collect();
        let methods: Vec<String> = ns.method_names().iter().map(|s| s.to_string()).collect();
        ns.define(ModuleDescriptor::default());
        assert_eq!(ns.util_names(), utils);
        assert_eq!(ns.method_names(), methods);
    }

    // -----------------------------------------------------------------------
    // 8. Utilities compose: a method can call a utility on its receiver
    // -----------------------------------------------------------------------
    #[test]
    fn method_calls_utility_through_receiver() {
        let mut ns = standard();
        ns.method("describe", |ns, args| {
            let arg = args.first().cloned().unwrap_or_default();
            let is_array = ns
                .call_util("isArray", &[arg])
                .map_err(|e| CallError::failed(e.to_string()))?;
            Ok(Value::from(if is_array == Value::Bool(true) { "array" } else { "other" }))
        });
        assert_eq!(ns.call_method("describe", &[v(json!([1]))]).unwrap(), Value::from("array"));
        assert_eq!(ns.call_method("describe", &[]).unwrap(), Value::from("other"));
    }

    // -----------------------------------------------------------------------
    // 9. Environment override reaches the modules
    // -----------------------------------------------------------------------
    #[test]
    fn browser_namespace_from_json_config() {
        let config = NamespaceConfig::from_json(r#"{"name": "web", "environment": "browser"}"#)
            .unwrap();
        let ns = Namespace::standard(config);
        assert_eq!(ns.name(), "web");
        assert_eq!(ns.call_util("isBrowser", &[]).unwrap(), Value::Bool(true));
        assert!(!ns.has_util("platform"));
    }
}
