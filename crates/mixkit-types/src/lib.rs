//! Foundation types for mixkit.
//!
//! This crate provides the dynamic value model shared by every other mixkit
//! crate: the merger combines [`Object`]s, the registry stores [`Callable`]s,
//! and the type predicates classify [`Value`]s.
//!
//! # Key Types
//!
//! - [`Value`] — Dynamic value (null, boolean, number, string, array, object, function, error)
//! - [`Object`] — Ordered string-keyed mapping of values
//! - [`Callable`] — Shareable native function over values
//! - [`ErrorValue`] — Error carried as data
//! - [`CallError`] — Failure raised by a callable

pub mod callable;
pub mod error;
pub mod predicates;
pub mod value;

pub use callable::{Callable, NativeFn};
pub use error::CallError;
pub use predicates::{is_array, is_boolean, is_error, is_function, is_number, is_object};
pub use value::{ErrorValue, Object, Value};
