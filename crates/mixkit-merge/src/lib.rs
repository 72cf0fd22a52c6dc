//! Merge engine for mixkit.
//!
//! Combines mapping objects into a target, in place. [`merge`] resolves
//! colliding keys through a [`MergeStrategy`]; [`extend`] is the shallow
//! sibling where the last source always wins.
//!
//! # Quick Start
//!
//! ```rust
//! use mixkit_merge::merge;
//! use mixkit_types::Value;
//!
//! let mut target = Value::from(serde_json::json!({"tags": ["a"]}));
//! let source = Value::from(serde_json::json!({"tags": ["b", "c"]}));
//! merge(target.as_object_mut().unwrap(), [source.as_object().unwrap()], None);
//! assert_eq!(target, Value::from(serde_json::json!({"tags": ["a", "b", "c"]})));
//! ```

pub mod error;
pub mod extender;
pub mod merge;
pub mod strategy;

pub use error::MergeError;
pub use extender::Extender;
pub use merge::{extend, extend_values, merge, merge_values, merge_with};
pub use strategy::{CallableStrategy, DefaultStrategy, MergeStrategy, OverwriteStrategy};
