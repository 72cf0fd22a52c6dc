//! Type predicates.
//!
//! Each predicate inspects only the variant tag. `null` is not an object:
//! [`is_object`] is true for [`Value::Object`] alone, so arrays, functions and
//! error values are excluded as well.

use crate::value::Value;

pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// True for every number, including NaN and infinities.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

pub fn is_error(value: &Value) -> bool {
    matches!(value, Value::Error(_))
}
