use std::fmt;
use std::sync::Arc;

use mixkit_types::{CallError, Value};

use crate::namespace::Namespace;

/// Signature of a receiver-bound method.
pub type MethodFn = dyn Fn(&mut Namespace, &[Value]) -> Result<Value, CallError> + Send + Sync;

/// A function invoked with the namespace as its receiver.
///
/// Unlike a utility ([`Callable`](mixkit_types::Callable)), a method can read
/// and mutate the namespace it is called on.
#[derive(Clone)]
pub struct Method {
    func: Arc<MethodFn>,
}

impl Method {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&mut Namespace, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    pub fn call(&self, receiver: &mut Namespace, args: &[Value]) -> Result<Value, CallError> {
        (self.func)(receiver, args)
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method(<native>)")
    }
}
