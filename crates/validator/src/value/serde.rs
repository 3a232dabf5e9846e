//! Serde serialization for Value
//!
//! JSON has no undefined, NaN, infinity, date or function, so those are
//! lowered: undefined, NaN and functions become `null`, infinities become
//! signed strings, dates become RFC 3339 strings and argument lists become
//! arrays.

use super::Value;
use ::serde::ser::{SerializeMap, SerializeSeq};
use ::serde::{Serialize, Serializer};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_none(),

            Value::Bool(b) => serializer.serialize_bool(*b),

            Value::Number(n) => {
                if n.is_nan() {
                    serializer.serialize_none()
                } else if n.is_infinite() {
                    if n.is_sign_positive() {
                        serializer.serialize_str("+Infinity")
                    } else {
                        serializer.serialize_str("-Infinity")
                    }
                } else {
                    serializer.serialize_f64(*n)
                }
            }

            Value::String(s) => serializer.serialize_str(s),

            Value::Array(items) => serialize_seq(items, serializer),

            Value::Arguments(args) => serialize_seq(args.values(), serializer),

            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (key, value) in obj {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }

            Value::Date(d) => serializer.serialize_str(&d.to_rfc3339()),
        }
    }
}

fn serialize_seq<S>(items: &[Value], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}
