//! In-place merge and extend.
//!
//! Both operations mutate the target and return it; callers that need the
//! original must clone it first. Sources are applied left to right, so a
//! later source collides with whatever an earlier one just wrote.

use mixkit_types::{Object, Value};

use crate::error::MergeError;
use crate::strategy::{DefaultStrategy, MergeStrategy};

/// Merge `sources` into `target`, resolving collisions with `strategy`, or
/// with [`DefaultStrategy`] when `None`.
pub fn merge<'t, 's, I>(
    target: &'t mut Object,
    sources: I,
    strategy: Option<&dyn MergeStrategy>,
) -> &'t mut Object
where
    I: IntoIterator<Item = &'s Object>,
{
    match strategy {
        Some(strategy) => merge_with(target, sources, strategy),
        None => merge_with(target, sources, &DefaultStrategy),
    }
}

/// Merge `sources` into `target` with an explicit strategy.
///
/// The strategy sees only genuine collisions: a key the target does not
/// hold yet is assigned directly.
pub fn merge_with<'t, 's, I, S>(target: &'t mut Object, sources: I, strategy: &S) -> &'t mut Object
where
    I: IntoIterator<Item = &'s Object>,
    S: MergeStrategy + ?Sized,
{
    for source in sources {
        for (key, incoming) in source {
            let resolved = match target.get(key) {
                Some(existing) => {
                    let resolved = strategy.resolve(existing, incoming);
                    tracing::trace!(
                        key = %key,
                        resolved = resolved.is_some(),
                        "merge collision"
                    );
                    resolved.unwrap_or_else(|| incoming.clone())
                }
                None => incoming.clone(),
            };
            target.insert(key.clone(), resolved);
        }
    }
    target
}

/// Shallow copy of every source key onto `target`; the last source wins.
pub fn extend<'t, 's, I>(target: &'t mut Object, sources: I) -> &'t mut Object
where
    I: IntoIterator<Item = &'s Object>,
{
    for source in sources {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// [`merge`] over dynamic values.
///
/// Every argument must be an object. Nothing is mutated when one is not.
pub fn merge_values<'t>(
    target: &'t mut Value,
    sources: &[Value],
    strategy: Option<&dyn MergeStrategy>,
) -> Result<&'t mut Value, MergeError> {
    let objects = source_objects(sources)?;
    let map = target_object(target)?;
    merge(map, objects, strategy);
    Ok(target)
}

/// [`extend`] over dynamic values.
pub fn extend_values<'t>(target: &'t mut Value, sources: &[Value]) -> Result<&'t mut Value, MergeError> {
    let objects = source_objects(sources)?;
    let map = target_object(target)?;
    extend(map, objects);
    Ok(target)
}

fn source_objects(sources: &[Value]) -> Result<Vec<&Object>, MergeError> {
    sources
        .iter()
        .enumerate()
        .map(|(i, source)| {
            source.as_object().ok_or(MergeError::NotAnObject {
                position: i + 1,
                found: source.type_name(),
            })
        })
        .collect()
}

fn target_object(target: &mut Value) -> Result<&mut Object, MergeError> {
    let found = target.type_name();
    target.as_object_mut().ok_or(MergeError::NotAnObject { position: 0, found })
}
