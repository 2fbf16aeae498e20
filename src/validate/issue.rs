//! Validation issue model
//!
//! Each failed check produces one issue tagged with the structural
//! path of the violating location: `$root` for the top level, dotted
//! field access (`address.city`), bracketed indices (`tags[1]`).

use std::fmt;

/// Issue kinds with stable string codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    /// Value kind differs from the schema kind
    TypeMismatch,
    /// Declared field absent where the schema does not admit absence
    MissingField,
    /// String present but the format predicate failed
    InvalidFormat,
    /// Input field not declared in the schema (deny policy)
    ExtraField,
}

impl IssueCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            IssueCode::TypeMismatch => "CONF_TYPE_MISMATCH",
            IssueCode::MissingField => "CONF_MISSING_FIELD",
            IssueCode::InvalidFormat => "CONF_INVALID_FORMAT",
            IssueCode::ExtraField => "CONF_EXTRA_FIELD",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single validation failure record
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Structural path of the violating location
    pub path: String,
    /// Issue kind
    pub code: IssueCode,
    /// Human-readable reason
    pub message: String,
}

impl Issue {
    pub fn type_mismatch(path: impl Into<String>, expected: &str, actual: &str) -> Self {
        Self {
            path: path.into(),
            code: IssueCode::TypeMismatch,
            message: format!("expected {}, got {}", expected, actual),
        }
    }

    pub fn missing_field(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code: IssueCode::MissingField,
            message: "required field is missing".into(),
        }
    }

    pub fn invalid_format(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code: IssueCode::InvalidFormat,
            message: detail.into(),
        }
    }

    pub fn extra_field(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code: IssueCode::ExtraField,
            message: "field is not declared in the schema".into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}
