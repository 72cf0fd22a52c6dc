use mixkit_merge::{extend_values, merge_values, CallableStrategy};
use mixkit_types::{CallError, Value};

use crate::descriptor::ModuleDescriptor;
use crate::module::Module;
use crate::namespace::Namespace;

/// Registers `extend`, `merge` and `mergeWith` utilities and the
/// instance-bound `extend` method.
///
/// `extend` and `merge` take `(target, ...sources)`, work on a copy of the
/// target and return the result. `mergeWith` takes the strategy function
/// first, `(strategy, target, ...sources)`; the strategy is called with
/// `(existing, incoming)` on collisions only, and a `null` return defers to
/// the incoming value. The method takes exactly one source and grows the
/// namespace's own target, returning a snapshot of it.
pub struct MergeModule;

impl Module for MergeModule {
    fn name(&self) -> &str {
        "merge"
    }

    fn descriptor(&self, _namespace: &Namespace) -> ModuleDescriptor {
        ModuleDescriptor::new()
            .util("extend", |args| {
                let (target, sources) = split_target(args)?;
                let mut target = target.clone();
                extend_values(&mut target, sources)?;
                Ok(target)
            })
            .util("merge", |args| {
                let (target, sources) = split_target(args)?;
                let mut target = target.clone();
                merge_values(&mut target, sources, None)?;
                Ok(target)
            })
            .util("mergeWith", |args| {
                let (strategy, rest) = args.split_first().ok_or(CallError::Arity {
                    expected: 2,
                    actual: 0,
                })?;
                let func = strategy.as_callable().ok_or(CallError::TypeMismatch {
                    position: 0,
                    expected: "function",
                    found: strategy.type_name(),
                })?;
                let (target, sources) = rest.split_first().ok_or(CallError::Arity {
                    expected: 2,
                    actual: 1,
                })?;
                let strategy = CallableStrategy::new(func.clone());
                let mut target = target.clone();
                // positions count from the target; shift past the strategy
                merge_values(&mut target, sources, Some(&strategy)).map_err(|err| {
                    match CallError::from(err) {
                        CallError::TypeMismatch { position, expected, found } => {
                            CallError::TypeMismatch { position: position + 1, expected, found }
                        }
                        other => other,
                    }
                })?;
                strategy.finish()?;
                Ok(target)
            })
            .method("extend", |namespace, args| {
                let source = match args {
                    [source] => source,
                    _ => {
                        return Err(CallError::Arity {
                            expected: 1,
                            actual: args.len(),
                        })
                    }
                };
                let object = source.as_object().ok_or(CallError::TypeMismatch {
                    position: 0,
                    expected: "object",
                    found: source.type_name(),
                })?;
                namespace.extend(object);
                Ok(Value::Object(namespace.target().clone()))
            })
    }
}

fn split_target(args: &[Value]) -> Result<(&Value, &[Value]), CallError> {
    args.split_first().ok_or(CallError::Arity {
        expected: 1,
        actual: 0,
    })
}
