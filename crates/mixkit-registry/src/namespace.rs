//! The shared namespace and its registrar operations.

use std::collections::BTreeMap;

use mixkit_env::Environment;
use mixkit_merge::Extender;
use mixkit_types::{CallError, Callable, Object, Value};

use crate::config::NamespaceConfig;
use crate::descriptor::ModuleDescriptor;
use crate::error::{RegistryError, Result};
use crate::method::Method;
use crate::module::{Module, NamespaceBuilder};

/// A registry of named methods and utilities.
///
/// Methods and utilities live in separate slots, so the same name may be
/// registered once in each. Registering a name that already exists in a slot
/// replaces the previous entry.
///
/// The namespace also owns a target object that the instance-bound
/// [`Namespace::extend`] grows.
#[derive(Debug)]
pub struct Namespace {
    name: String,
    environment: Environment,
    methods: BTreeMap<String, Method>,
    utils: BTreeMap<String, Callable>,
    target: Extender,
}

impl Namespace {
    /// Create an empty namespace. No modules are installed.
    pub fn new(config: &NamespaceConfig) -> Self {
        let environment = match config.environment {
            Some(kind) => Environment::with_kind(kind),
            None => Environment::detect(),
        };
        Self {
            name: config.name.clone(),
            environment,
            methods: BTreeMap::new(),
            utils: BTreeMap::new(),
            target: Extender::default(),
        }
    }

    /// Create a namespace with the standard modules installed (unless the
    /// configuration disables them).
    pub fn standard(config: NamespaceConfig) -> Self {
        NamespaceBuilder::standard(config).build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register a method under `name`.
    pub fn method<F>(&mut self, name: impl Into<String>, func: F) -> &mut Self
    where
        F: Fn(&mut Namespace, &[Value]) -> std::result::Result<Value, CallError>
            + Send
            + Sync
            + 'static,
    {
        self.insert_method(name.into(), Method::new(func))
    }

    /// Register every method in `methods`, in iteration order.
    pub fn methods<I, K>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Method)>,
        K: Into<String>,
    {
        for (name, method) in methods {
            self.insert_method(name.into(), method);
        }
        self
    }

    /// Register a utility under `name`.
    pub fn util<F>(&mut self, name: impl Into<String>, func: F) -> &mut Self
    where
        F: Fn(&[Value]) -> std::result::Result<Value, CallError> + Send + Sync + 'static,
    {
        self.insert_util(name.into(), Callable::new(func))
    }

    /// Register every utility in `utils`, in iteration order.
    pub fn utils<I, K>(&mut self, utils: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Callable)>,
        K: Into<String>,
    {
        for (name, util) in utils {
            self.insert_util(name.into(), util);
        }
        self
    }

    /// Register whatever halves of `descriptor` are present.
    pub fn define(&mut self, descriptor: ModuleDescriptor) -> &mut Self {
        if descriptor.is_empty() {
            tracing::trace!(namespace = %self.name, "empty descriptor, nothing to define");
            return self;
        }
        if let Some(methods) = descriptor.methods {
            self.methods(methods);
        }
        if let Some(utils) = descriptor.utils {
            self.utils(utils);
        }
        self
    }

    /// Register the descriptor a module produces for this namespace.
    pub fn install(&mut self, module: &dyn Module) -> &mut Self {
        let descriptor = module.descriptor(self);
        tracing::debug!(
            namespace = %self.name,
            module = module.name(),
            methods = descriptor.methods.as_ref().map_or(0, Vec::len),
            utils = descriptor.utils.as_ref().map_or(0, Vec::len),
            "installing module"
        );
        self.define(descriptor)
    }

    fn insert_method(&mut self, name: String, method: Method) -> &mut Self {
        let replaced = self.methods.insert(name.clone(), method).is_some();
        tracing::trace!(namespace = %self.name, method = %name, replaced, "method registered");
        self
    }

    fn insert_util(&mut self, name: String, util: Callable) -> &mut Self {
        let replaced = self.utils.insert(name.clone(), util).is_some();
        tracing::trace!(namespace = %self.name, util = %name, replaced, "utility registered");
        self
    }

    // -----------------------------------------------------------------------
    // Lookup and invocation
    // -----------------------------------------------------------------------

    pub fn get_method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn get_util(&self, name: &str) -> Option<&Callable> {
        self.utils.get(name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn has_util(&self, name: &str) -> bool {
        self.utils.contains_key(name)
    }

    /// Registered method names, sorted.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    /// Registered utility names, sorted.
    pub fn util_names(&self) -> Vec<&str> {
        self.utils.keys().map(String::as_str).collect()
    }

    /// Invoke a method with this namespace as receiver.
    pub fn call_method(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        let method = self
            .methods
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownMethod {
                name: name.to_string(),
            })?;
        method
            .call(self, args)
            .map_err(|e| RegistryError::call(name, e))
    }

    /// Invoke a utility.
    pub fn call_util(&self, name: &str, args: &[Value]) -> Result<Value> {
        let util = self.utils.get(name).ok_or_else(|| RegistryError::UnknownUtil {
            name: name.to_string(),
        })?;
        util.call(args).map_err(|e| RegistryError::call(name, e))
    }

    // -----------------------------------------------------------------------
    // Instance target
    // -----------------------------------------------------------------------

    /// Shallow-copy `source` onto the namespace's target and return the
    /// namespace for chaining.
    pub fn extend(&mut self, source: &Object) -> &mut Self {
        self.target.extend(source);
        self
    }

    /// The object accumulated by [`Namespace::extend`].
    pub fn target(&self) -> &Object {
        self.target.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bare() -> Namespace {
        Namespace::new(&NamespaceConfig::bare())
    }

    fn constant(value: i64) -> Callable {
        Callable::new(move |_| Ok(Value::from(value)))
    }

    #[test]
    fn method_and_util_slots_are_independent() {
        let mut ns = bare();
        ns.method("foo", |_, _| Ok(Value::from("method")));
        ns.util("foo", |_| Ok(Value::from("util")));

        assert_eq!(ns.call_method("foo", &[]).unwrap(), Value::from("method"));
        assert_eq!(ns.call_util("foo", &[]).unwrap(), Value::from("util"));
    }

    #[test]
    fn last_registration_wins() {
        let mut ns = bare();
        ns.util("n", |_| Ok(Value::from(1)));
        ns.util("n", |_| Ok(Value::from(2)));
        assert_eq!(ns.call_util("n", &[]).unwrap(), Value::from(2));
        assert_eq!(ns.util_names(), ["n"]);
    }

    #[test]
    fn bulk_registration_later_duplicate_wins() {
        let mut ns = bare();
        ns.utils([("n", constant(1)), ("m", constant(5)), ("n", constant(3))]);
        assert_eq!(ns.call_util("n", &[]).unwrap(), Value::from(3));
        assert_eq!(ns.util_names(), ["m", "n"]);
    }

    #[test]
    fn bulk_methods() {
        let mut ns = bare();
        ns.methods(vec![
            ("name".to_string(), Method::new(|ns, _| Ok(Value::from(ns.name())))),
            ("argc".to_string(), Method::new(|_, args| Ok(Value::from(args.len() as i64)))),
        ]);
        assert_eq!(ns.call_method("name", &[]).unwrap(), Value::from("mixkit"));
        assert_eq!(
            ns.call_method("argc", &[Value::Null, Value::Null]).unwrap(),
            Value::from(2)
        );
    }

    #[test]
    fn define_empty_descriptor_is_a_no_op() {
        let mut ns = bare();
        ns.util("keep", |_| Ok(Value::Null));
        ns.define(ModuleDescriptor::default());
        assert_eq!(ns.util_names(), ["keep"]);
        assert!(ns.method_names().is_empty());
    }

    #[test]
    fn define_present_but_empty_halves_is_a_no_op() {
        let mut ns = bare();
        ns.define(ModuleDescriptor {
            methods: Some(Vec::new()),
            utils: Some(Vec::new()),
        });
        assert!(ns.util_names().is_empty());
        assert!(ns.method_names().is_empty());
    }

    #[test]
    fn define_registers_both_halves() {
        let mut ns = bare();
        ns.define(
            ModuleDescriptor::new()
                .method("m", |_, _| Ok(Value::Null))
                .util("u", |_| Ok(Value::Null)),
        );
        assert!(ns.has_method("m"));
        assert!(ns.has_util("u"));
        assert!(!ns.has_method("u"));
    }

    #[test]
    fn methods_can_mutate_the_receiver() {
        let mut ns = bare();
        ns.method("register", |ns, args| {
            let name = args
                .first()
                .and_then(Value::as_str)
                .ok_or(CallError::Arity { expected: 1, actual: 0 })?
                .to_string();
            ns.util(name, |_| Ok(Value::Bool(true)));
            Ok(Value::Null)
        });
        ns.call_method("register", &[Value::from("added")]).unwrap();
        assert_eq!(ns.call_util("added", &[]).unwrap(), Value::Bool(true));
    }

    #[test]
    fn unknown_names_are_errors() {
        let mut ns = bare();
        assert!(matches!(
            ns.call_method("nope", &[]),
            Err(RegistryError::UnknownMethod { .. })
        ));
        assert!(matches!(
            ns.call_util("nope", &[]),
            Err(RegistryError::UnknownUtil { .. })
        ));
    }

    #[test]
    fn failing_call_reports_name() {
        let mut ns = bare();
        ns.util("boom", |_| Err(CallError::failed("kaput")));
        let err = ns.call_util("boom", &[]).unwrap_err();
        assert_eq!(err.to_string(), "call to 'boom' failed: kaput");
    }

    #[test]
    fn extend_chains_on_target() {
        let mut ns = bare();
        let first = Value::from(json!({"a": 1}));
        let second = Value::from(json!({"a": 2, "b": 3}));
        ns.extend(first.as_object().unwrap())
            .extend(second.as_object().unwrap());
        assert_eq!(Value::Object(ns.target().clone()), Value::from(json!({"a": 2, "b": 3})));
    }

    #[test]
    fn environment_override_from_config() {
        let config = NamespaceConfig {
            environment: Some(mixkit_env::EnvironmentKind::Browser),
            ..NamespaceConfig::bare()
        };
        let ns = Namespace::new(&config);
        assert!(ns.environment().is_browser());
    }
}
