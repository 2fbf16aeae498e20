//! Schema construction and registry errors
//!
//! Error codes:
//! - CONF_MERGE_TARGET (merge on a non-object operand)
//! - CONF_CODEGEN_TARGET (codegen on a non-object schema)
//! - CONF_DUPLICATE_FIELD (object schema declares a field twice)
//! - CONF_SCHEMA_IMMUTABLE (attempt to replace a registered schema)
//! - CONF_UNKNOWN_SCHEMA (schema name not found in the registry)
//! - CONF_MALFORMED_SCHEMA (schema file unreadable or invalid)

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema construction and registry errors
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// Merge is defined only over object schemas
    #[error("merge target must be an object schema, got {0}")]
    MergeTarget(String),

    /// Struct generation is defined only over object schemas
    #[error("codegen target must be an object schema, got {0}")]
    CodegenTarget(String),

    /// Object schemas declare each field at most once
    #[error("duplicate field '{0}' in object schema")]
    DuplicateField(String),

    /// Registered schemas never change
    #[error("schema '{0}' is already registered and immutable")]
    SchemaImmutable(String),

    /// Schema name not present in the registry
    #[error("schema '{0}' not found")]
    UnknownSchema(String),

    /// Schema file unreadable, invalid JSON, or structurally invalid
    #[error("malformed schema '{path}': {reason}")]
    MalformedSchema { path: String, reason: String },
}

impl SchemaError {
    /// Merge on a non-object operand
    pub fn merge_target(kind: impl Into<String>) -> Self {
        Self::MergeTarget(kind.into())
    }

    /// Codegen on a non-object schema
    pub fn codegen_target(kind: impl Into<String>) -> Self {
        Self::CodegenTarget(kind.into())
    }

    /// Duplicate field name in an object schema
    pub fn duplicate_field(name: impl Into<String>) -> Self {
        Self::DuplicateField(name.into())
    }

    /// Malformed schema file
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSchema {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::MergeTarget(_) => "CONF_MERGE_TARGET",
            SchemaError::CodegenTarget(_) => "CONF_CODEGEN_TARGET",
            SchemaError::DuplicateField(_) => "CONF_DUPLICATE_FIELD",
            SchemaError::SchemaImmutable(_) => "CONF_SCHEMA_IMMUTABLE",
            SchemaError::UnknownSchema(_) => "CONF_UNKNOWN_SCHEMA",
            SchemaError::MalformedSchema { .. } => "CONF_MALFORMED_SCHEMA",
        }
    }
}
