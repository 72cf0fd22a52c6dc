//! Native functions stored inside values and registries.

use std::fmt;
use std::sync::Arc;

use crate::error::CallError;
use crate::value::Value;

/// Signature shared by every native function.
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value, CallError> + Send + Sync;

/// A cheaply clonable handle to a native function.
///
/// Two callables are equal only when they share the same underlying
/// allocation, i.e. one is a clone of the other.
#[derive(Clone)]
pub struct Callable {
    func: Arc<NativeFn>,
}

impl Callable {
    /// Wrap a closure.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Invoke the function with the given arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        (self.func)(args)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(<native>)")
    }
}
