//! `serde_json` integration
//!
//! JSON objects are open-schema records: every member is reachable through
//! keyed lookup. A `serde_json::Value` stored inside a struct field is a
//! dynamic wrapper around whatever it holds.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::record::Record;
use crate::value::{AsFieldValue, FieldValue};

/// Convert a JSON value without adding a dynamic wrapper.
///
/// Numbers that fit in an `i64` become integers; every other number becomes
/// a float.
pub fn json_field_value(value: &Value) -> FieldValue<'_> {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Int(i),
            None => n
                .as_f64()
                .map(FieldValue::Float)
                .unwrap_or(FieldValue::Composite("number")),
        },
        Value::String(s) => FieldValue::Str(Cow::Borrowed(s.as_str())),
        Value::Array(_) => FieldValue::Composite("array"),
        Value::Object(_) => FieldValue::Composite("object"),
    }
}

impl AsFieldValue for Value {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Dynamic(Box::new(json_field_value(self)))
    }
}

impl Record for Map<String, Value> {
    fn get_key(&self, key: &str) -> Option<FieldValue<'_>> {
        self.get(key).map(json_field_value)
    }
}

/// Only objects have keys; every other JSON value answers `None`.
impl Record for Value {
    fn get_key(&self, key: &str) -> Option<FieldValue<'_>> {
        self.as_object().and_then(|object| object.get_key(key))
    }
}
