//! Built-in classification predicates
//!
//! Each function here is a pure test over a single [`Value`]. The same
//! functions are pre-registered in the global registry under their
//! camel-case names (see [`BUILTINS`]), so a schema can refer to them by
//! name:
//!
//! ```rust
//! use fieldcheck_validator::{Validator, Value};
//! use serde_json::json;
//!
//! let v = Validator::new(json!({"foo": "isString"}).into()).unwrap();
//! assert!(!v.test(&Value::from(json!({"foo": 1}))).unwrap());
//! ```

use crate::value::Value;

/// Type alias for a builtin classification function
pub type BuiltinFn = fn(&Value) -> bool;

/// Registry names of every builtin, in registration order.
pub const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("isObject", is_object),
    ("isString", is_string),
    ("isBoolean", is_boolean),
    ("isFunction", is_function),
    ("isArray", is_array),
    ("isNumber", is_number),
    ("isFiniteNumber", is_finite_number),
    ("isDate", is_date),
    ("isArguments", is_arguments),
    ("isNotEmptyString", is_not_empty_string),
];

/// Plain key/value mapping. Arrays, null, dates, argument lists and
/// functions are not objects.
#[must_use]
pub fn is_object(thing: &Value) -> bool {
    matches!(thing, Value::Object(_))
}

#[must_use]
pub fn is_string(thing: &Value) -> bool {
    matches!(thing, Value::String(_))
}

/// Only `true` and `false`; no truthy or falsy stand-ins.
#[must_use]
pub fn is_boolean(thing: &Value) -> bool {
    matches!(thing, Value::Bool(_))
}

#[must_use]
pub fn is_function(thing: &Value) -> bool {
    matches!(thing, Value::Function(_))
}

#[must_use]
pub fn is_array(thing: &Value) -> bool {
    matches!(thing, Value::Array(_))
}

/// Any number, including NaN and the infinities.
#[must_use]
pub fn is_number(thing: &Value) -> bool {
    matches!(thing, Value::Number(_))
}

#[must_use]
pub fn is_finite_number(thing: &Value) -> bool {
    matches!(thing, Value::Number(n) if n.is_finite())
}

#[must_use]
pub fn is_date(thing: &Value) -> bool {
    matches!(thing, Value::Date(_))
}

#[must_use]
pub fn is_arguments(thing: &Value) -> bool {
    matches!(thing, Value::Arguments(_))
}

/// A string with at least one non-whitespace character.
#[must_use]
pub fn is_not_empty_string(thing: &Value) -> bool {
    matches!(thing, Value::String(s) if !s.trim().is_empty())
}
