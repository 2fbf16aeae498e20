//! Recursive schema validator
//!
//! Validation is a pure, stateless function from (schema, value) to an
//! outcome. The traversal never stops at the first problem: every
//! issue found anywhere in the input is collected and reported with
//! its structural path.
//!
//! Validation semantics:
//! - Value kinds must match schema kinds exactly, no coercion
//! - Email requires a string with exactly one '@' and non-empty
//!   local and domain parts
//! - Declared object fields are checked in declaration order; absence
//!   is an issue unless the field schema admits it
//! - Undeclared object fields follow the configured policy
//! - Array elements are all checked; element failures do not stop
//!   later elements
//! - Validated output carries declared fields in schema declaration
//!   order; `Passthrough` extras follow in input order

use std::sync::OnceLock;

use regex::Regex;

use crate::schema::{Field, Schema};
use crate::value::Value;

use super::errors::{ParseOutcome, ValidationError};
use super::issue::Issue;

/// Treatment of object fields present in the input but not declared
/// in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtraFields {
    /// Drop undeclared fields from the output
    #[default]
    Strip,
    /// Copy undeclared fields to the output verbatim
    Passthrough,
    /// Report one issue per undeclared field
    Deny,
}

/// Validator configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorOptions {
    /// Undeclared object field policy
    pub extra_fields: ExtraFields,
}

/// A configured validator.
///
/// Validators hold no state beyond their options; concurrent use
/// against a shared schema is safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    /// Creates a validator with the default options (`Strip`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given options.
    pub fn with_options(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// Validates `input` against `schema`, propagating failure.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` carrying every issue found.
    pub fn parse(&self, schema: &Schema, input: &Value) -> Result<Value, ValidationError> {
        self.safe_parse(schema, input).into_result()
    }

    /// Validates `input` against `schema`, returning an outcome for
    /// inspection. Never propagates.
    pub fn safe_parse(&self, schema: &Schema, input: &Value) -> ParseOutcome {
        let mut issues = Vec::new();
        let output = self.check(schema, input, "", &mut issues);
        if issues.is_empty() {
            ParseOutcome::Success(output)
        } else {
            ParseOutcome::Failure(ValidationError::new(issues))
        }
    }

    /// Recursive check. Returns the output value built so far; the
    /// output is only meaningful when no issues were recorded.
    fn check(&self, schema: &Schema, value: &Value, path: &str, issues: &mut Vec<Issue>) -> Value {
        match schema {
            Schema::String | Schema::Number | Schema::Bool | Schema::Null | Schema::Undefined => {
                let expected = schema.type_name();
                if value.kind() == expected {
                    value.clone()
                } else {
                    issues.push(Issue::type_mismatch(at(path), expected, value.kind()));
                    Value::Undefined
                }
            }
            Schema::Email => match value {
                Value::String(s) if is_email(s) => value.clone(),
                Value::String(_) => {
                    issues.push(Issue::invalid_format(at(path), "not a well-formed email address"));
                    value.clone()
                }
                other => {
                    issues.push(Issue::type_mismatch(at(path), "string", other.kind()));
                    Value::Undefined
                }
            },
            Schema::Object { fields } => self.check_object(fields, value, path, issues),
            Schema::Array { element } => match value {
                Value::Array(items) => {
                    let mut output = Vec::with_capacity(items.len());
                    for (index, item) in items.iter().enumerate() {
                        let item_path = index_path(path, index);
                        output.push(self.check(element, item, &item_path, issues));
                    }
                    Value::Array(output)
                }
                other => {
                    issues.push(Issue::type_mismatch(at(path), "array", other.kind()));
                    Value::Undefined
                }
            },
            Schema::Optional { inner } => {
                if value.is_undefined() {
                    Value::Undefined
                } else {
                    self.check(inner, value, path, issues)
                }
            }
        }
    }

    fn check_object(
        &self,
        fields: &[Field],
        value: &Value,
        path: &str,
        issues: &mut Vec<Issue>,
    ) -> Value {
        let entries = match value.as_entries() {
            Some(entries) => entries,
            None => {
                issues.push(Issue::type_mismatch(at(path), "object", value.kind()));
                return Value::Undefined;
            }
        };

        let mut output = Vec::with_capacity(fields.len());
        for field in fields {
            let field_path = make_path(path, &field.name);
            let field_value = value.get(&field.name).unwrap_or(&Value::Undefined);

            if field_value.is_undefined() && !field.schema.admits_absence() {
                issues.push(Issue::missing_field(field_path));
                continue;
            }

            let checked = self.check(&field.schema, field_value, &field_path, issues);
            output.push((field.name.clone(), checked));
        }

        match self.options.extra_fields {
            ExtraFields::Strip => {}
            ExtraFields::Passthrough => {
                for (name, extra) in entries {
                    if !declares(fields, name) {
                        output.push((name.clone(), extra.clone()));
                    }
                }
            }
            ExtraFields::Deny => {
                for (name, _) in entries {
                    if !declares(fields, name) {
                        issues.push(Issue::extra_field(make_path(path, name)));
                    }
                }
            }
        }

        Value::Object(output)
    }
}

impl Schema {
    /// Validates `input` with default options, propagating failure.
    ///
    /// On success, object output carries only declared fields, in
    /// schema declaration order.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` carrying every issue found.
    pub fn parse(&self, input: &Value) -> Result<Value, ValidationError> {
        Validator::new().parse(self, input)
    }

    /// Validates `input` with default options, returning an outcome
    /// for inspection.
    pub fn safe_parse(&self, input: &Value) -> ParseOutcome {
        Validator::new().safe_parse(self, input)
    }
}

fn declares(fields: &[Field], name: &str) -> bool {
    fields.iter().any(|f| f.name == name)
}

/// Renders the issue path; the empty root path displays as `$root`.
fn at(path: &str) -> String {
    if path.is_empty() {
        "$root".to_string()
    } else {
        path.to_string()
    }
}

/// Extends a field-access path.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

/// Extends a path with an array index.
fn index_path(prefix: &str, index: usize) -> String {
    format!("{}[{}]", prefix, index)
}

/// Exactly one '@' with non-empty local and domain parts.
fn is_email(s: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new("^[^@]+@[^@]+$").expect("valid pattern"))
        .is_match(s)
}
