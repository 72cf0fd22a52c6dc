use mixkit_types::{CallError, Callable, Value};

use crate::method::Method;
use crate::namespace::Namespace;

/// A bundle of methods and utilities to register in one step.
///
/// Both halves are optional and kept in insertion order; when a name appears
/// twice the later entry wins once registered.
#[derive(Clone, Debug, Default)]
pub struct ModuleDescriptor {
    pub methods: Option<Vec<(String, Method)>>,
    pub utils: Option<Vec<(String, Callable)>>,
}

impl ModuleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a method entry.
    pub fn method<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut Namespace, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        self.methods
            .get_or_insert_with(Vec::new)
            .push((name.into(), Method::new(func)));
        self
    }

    /// Add a utility entry.
    pub fn util<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        self.utils
            .get_or_insert_with(Vec::new)
            .push((name.into(), Callable::new(func)));
        self
    }

    /// Returns `true` if registering this descriptor would change nothing.
    pub fn is_empty(&self) -> bool {
        self.methods.as_ref().map_or(true, Vec::is_empty)
            && self.utils.as_ref().map_or(true, Vec::is_empty)
    }
}
