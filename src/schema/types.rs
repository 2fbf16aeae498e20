//! Schema type definitions
//!
//! Supported shapes:
//! - string, number, bool, null, undefined: exact kind checks
//! - email: string carrying a well-formed address
//! - object: keyed structure with declared, ordered fields
//! - array: homogeneous sequence with a single element schema
//! - optional: wrapped schema that also admits the absent value
//!
//! Schemas are immutable. Combinators (`array_of`, `optional`, `merge`)
//! always build a new schema.

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};

/// A declarative description of an expected value shape.
///
/// Serializes as a tagged JSON document, e.g. `{"type":"string"}` or
/// `{"type":"array","element":{"type":"email"}}`, so schemas can live
/// in plain JSON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schema {
    /// UTF-8 string
    String,
    /// Numeric value (single 64-bit float kind)
    Number,
    /// Boolean
    Bool,
    /// Explicit null
    Null,
    /// The absent value
    Undefined,
    /// String carrying a well-formed email address
    Email,
    /// Keyed structure with declared fields in declaration order
    Object {
        /// Declared fields; order is significant
        fields: Vec<Field>,
    },
    /// Homogeneous sequence with a single element schema
    Array {
        /// Element schema (boxed to allow recursive shapes)
        element: Box<Schema>,
    },
    /// Admits the absent value in addition to the wrapped schema
    Optional {
        /// Wrapped schema
        inner: Box<Schema>,
    },
}

/// A declared object field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name
    pub name: String,
    /// Field schema
    pub schema: Schema,
}

impl Field {
    /// Create a field declaration
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

impl Schema {
    /// String schema
    pub fn string() -> Self {
        Schema::String
    }

    /// Number schema
    pub fn number() -> Self {
        Schema::Number
    }

    /// Boolean schema
    pub fn boolean() -> Self {
        Schema::Bool
    }

    /// Null schema
    pub fn null() -> Self {
        Schema::Null
    }

    /// Undefined schema (accepts only the absent value)
    pub fn undefined() -> Self {
        Schema::Undefined
    }

    /// Email schema (string with a well-formed address)
    pub fn email() -> Self {
        Schema::Email
    }

    /// Object schema with the given declared fields
    pub fn object(fields: Vec<Field>) -> Self {
        Schema::Object { fields }
    }

    /// Array schema with the given element schema
    pub fn array(element: Schema) -> Self {
        Schema::Array {
            element: Box::new(element),
        }
    }

    /// Wraps this schema as the element of an array schema
    pub fn array_of(self) -> Self {
        Schema::array(self)
    }

    /// Wraps this schema so that the absent value is also accepted
    pub fn optional(self) -> Self {
        Schema::Optional {
            inner: Box::new(self),
        }
    }

    /// Returns the shape name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Schema::String => "string",
            Schema::Number => "number",
            Schema::Bool => "bool",
            Schema::Null => "null",
            Schema::Undefined => "undefined",
            Schema::Email => "email",
            Schema::Object { .. } => "object",
            Schema::Array { .. } => "array",
            Schema::Optional { .. } => "optional",
        }
    }

    /// Returns the declared fields if this is an object schema
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            Schema::Object { fields } => Some(fields),
            _ => None,
        }
    }

    /// True when validating the absent value against this schema succeeds
    pub(crate) fn admits_absence(&self) -> bool {
        matches!(self, Schema::Optional { .. } | Schema::Undefined)
    }

    /// Merges two object schemas into a new object schema.
    ///
    /// The result carries `a`'s fields overlaid with `b`'s: on a name
    /// collision `b`'s declaration wins but keeps `a`'s position;
    /// fields only `b` declares follow in `b`'s order. Merge builds a
    /// schema, it never validates data.
    ///
    /// # Errors
    ///
    /// Returns `CONF_MERGE_TARGET` when either operand is not an
    /// object schema.
    pub fn merge(a: &Schema, b: &Schema) -> SchemaResult<Schema> {
        let (left, right) = match (a, b) {
            (Schema::Object { fields: left }, Schema::Object { fields: right }) => (left, right),
            (Schema::Object { .. }, other) | (other, _) => {
                return Err(SchemaError::merge_target(other.type_name()));
            }
        };

        let mut merged: Vec<Field> = Vec::with_capacity(left.len() + right.len());
        for field in left {
            match right.iter().find(|r| r.name == field.name) {
                Some(winner) => merged.push(winner.clone()),
                None => merged.push(field.clone()),
            }
        }
        for field in right {
            if !left.iter().any(|f| f.name == field.name) {
                merged.push(field.clone());
            }
        }

        Ok(Schema::Object { fields: merged })
    }

    /// Validates the schema structure itself (not a value).
    ///
    /// Object schemas must not declare the same field name twice, at
    /// any nesting level.
    pub fn validate_structure(&self) -> SchemaResult<()> {
        match self {
            Schema::Object { fields } => {
                for (i, field) in fields.iter().enumerate() {
                    if fields[..i].iter().any(|f| f.name == field.name) {
                        return Err(SchemaError::duplicate_field(&field.name));
                    }
                    field.schema.validate_structure()?;
                }
                Ok(())
            }
            Schema::Array { element } => element.validate_structure(),
            Schema::Optional { inner } => inner.validate_structure(),
            _ => Ok(()),
        }
    }
}
