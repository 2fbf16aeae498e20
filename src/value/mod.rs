//! Runtime value model for validation
//!
//! Values form a tagged union the validator pattern-matches against:
//! undefined, null, bool, number, string, array, object.
//!
//! `Undefined` is distinct from `Null`. It is the absent value: a missing
//! object field, or "nothing" validated at top level. JSON has no
//! undefined, so conversion to `serde_json::Value` drops undefined object
//! fields and renders a bare undefined as null.

use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

/// A runtime value to be validated.
///
/// Object entries are ordered. Insertion order is preserved and
/// significant: validated output carries declared fields in schema
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value
    Undefined,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Numeric value (single 64-bit float kind)
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Ordered sequence
    Array(Vec<Value>),
    /// Keyed structure with ordered entries
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Returns the kind name for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns true if this is the absent value
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns the string content if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the elements if this is an array
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the ordered entries if this is an object
    pub fn as_entries(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up an object field by name. Returns None for non-objects
    /// and for fields that are not present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_entries()
            .and_then(|entries| entries.iter().find(|(k, _)| k == key))
            .map(|(_, v)| v)
    }

    /// Convenience constructor for string values
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Renders the value as JSON text (undefined fields dropped,
    /// bare undefined rendered as null)
    pub fn to_json_string(&self) -> String {
        JsonValue::from(self).to_string()
    }
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            // as_f64 is total for standard (non-arbitrary-precision) numbers
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Undefined | Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => JsonNumber::from_f64(*n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Array(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
            Value::Object(entries) => {
                let mut map = JsonMap::new();
                for (k, v) in entries {
                    // Missing fields do not survive serialization
                    if !v.is_undefined() {
                        map.insert(k.clone(), JsonValue::from(v));
                    }
                }
                JsonValue::Object(map)
            }
        }
    }
}
