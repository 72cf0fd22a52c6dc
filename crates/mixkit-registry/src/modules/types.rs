use mixkit_types::{
    is_array, is_boolean, is_error, is_function, is_number, is_object, CallError, Value,
};

use crate::descriptor::ModuleDescriptor;
use crate::module::Module;
use crate::namespace::Namespace;

/// Utility names and the predicates they expose, in registration order.
pub const PREDICATES: [(&str, fn(&Value) -> bool); 6] = [
    ("isFunction", is_function),
    ("isObject", is_object),
    ("isArray", is_array),
    ("isBoolean", is_boolean),
    ("isNumber", is_number),
    ("isError", is_error),
];

/// Registers the type predicates as utilities.
///
/// Each utility inspects its first argument; a call without arguments
/// classifies `null`.
pub struct TypesModule;

impl Module for TypesModule {
    fn name(&self) -> &str {
        "types"
    }

    fn descriptor(&self, _namespace: &Namespace) -> ModuleDescriptor {
        PREDICATES
            .iter()
            .fold(ModuleDescriptor::new(), |descriptor, (name, test)| {
                descriptor.util(*name, predicate(*test))
            })
    }
}

fn predicate(
    test: fn(&Value) -> bool,
) -> impl Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static {
    move |args: &[Value]| {
        let verdict = match args.first() {
            Some(value) => test(value),
            None => test(&Value::Null),
        };
        Ok(Value::Bool(verdict))
    }
}
