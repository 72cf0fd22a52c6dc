use std::cell::RefCell;

use mixkit_types::{CallError, Callable, Value};

use crate::merge::merge_with;

// ---------------------------------------------------------------------------
// MergeStrategy trait
// ---------------------------------------------------------------------------

/// Conflict resolution for a key present in both the target and a source.
///
/// Returning `None` means "no opinion": the incoming value replaces the
/// existing one unchanged. Any closure `Fn(&Value, &Value) -> Option<Value>`
/// is a strategy.
pub trait MergeStrategy {
    fn resolve(&self, existing: &Value, incoming: &Value) -> Option<Value>;
}

impl<F> MergeStrategy for F
where
    F: Fn(&Value, &Value) -> Option<Value>,
{
    fn resolve(&self, existing: &Value, incoming: &Value) -> Option<Value> {
        self(existing, incoming)
    }
}

// ---------------------------------------------------------------------------
// DefaultStrategy
// ---------------------------------------------------------------------------

/// The strategy used when none is supplied.
///
/// 1. Existing array: append the incoming value. An incoming array
///    contributes its elements; anything else is pushed as one element.
/// 2. Both plain objects: merge recursively with this same strategy.
/// 3. Anything else: no opinion, the incoming value wins.
///
/// Only the existing side is checked for arrays. An array arriving over a
/// scalar replaces it.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStrategy;

impl MergeStrategy for DefaultStrategy {
    fn resolve(&self, existing: &Value, incoming: &Value) -> Option<Value> {
        match (existing, incoming) {
            (Value::Array(items), Value::Array(more)) => {
                let mut joined = Vec::with_capacity(items.len() + more.len());
                joined.extend(items.iter().cloned());
                joined.extend(more.iter().cloned());
                Some(Value::Array(joined))
            }
            (Value::Array(items), other) => {
                let mut joined = items.clone();
                joined.push(other.clone());
                Some(Value::Array(joined))
            }
            (Value::Object(current), Value::Object(next)) => {
                let mut merged = current.clone();
                merge_with(&mut merged, [next], self);
                Some(Value::Object(merged))
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// OverwriteStrategy
// ---------------------------------------------------------------------------

/// Never has an opinion: every collision is won by the incoming value.
///
/// Merging with this strategy matches [`extend`](crate::extend).
#[derive(Clone, Copy, Debug, Default)]
pub struct OverwriteStrategy;

impl MergeStrategy for OverwriteStrategy {
    fn resolve(&self, _existing: &Value, _incoming: &Value) -> Option<Value> {
        None
    }
}

// ---------------------------------------------------------------------------
// CallableStrategy
// ---------------------------------------------------------------------------

/// A strategy backed by a native function taking `(existing, incoming)`.
///
/// A `Null` return is "no opinion". The first error the function returns is
/// kept, and every later collision gets no opinion; check [`Self::finish`]
/// once the merge is done.
#[derive(Debug)]
pub struct CallableStrategy {
    func: Callable,
    error: RefCell<Option<CallError>>,
}

impl CallableStrategy {
    pub fn new(func: Callable) -> Self {
        Self {
            func,
            error: RefCell::new(None),
        }
    }

    /// The first error raised by the function, if any.
    pub fn finish(self) -> Result<(), CallError> {
        match self.error.into_inner() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl MergeStrategy for CallableStrategy {
    fn resolve(&self, existing: &Value, incoming: &Value) -> Option<Value> {
        if self.error.borrow().is_some() {
            return None;
        }
        match self.func.call(&[existing.clone(), incoming.clone()]) {
            Ok(Value::Null) => None,
            Ok(resolved) => Some(resolved),
            Err(err) => {
                tracing::debug!(error = %err, "merge strategy failed");
                *self.error.borrow_mut() = Some(err);
                None
            }
        }
    }
}
