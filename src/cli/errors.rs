//! CLI error types
//!
//! Every failure path surfaces as `[CODE] message` on stderr and a
//! non-zero exit; nothing is dropped silently.

use thiserror::Error;

use crate::schema::SchemaError;
use crate::validate::ValidationError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// A schema or input file could not be read
    #[error("failed to read '{path}': {reason}")]
    Io { path: String, reason: String },

    /// An input document is not valid JSON
    #[error("invalid JSON in '{path}': {reason}")]
    InvalidJson { path: String, reason: String },

    /// Output could not be rendered
    #[error("failed to render output: {0}")]
    Render(String),

    /// Schema document malformed or structurally invalid
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The document failed validation (throwing mode)
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CliError {
    /// File read failure
    pub fn io(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Io {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// JSON parse failure
    pub fn invalid_json(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidJson {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the stable string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Io { .. } => "CONF_CLI_IO_ERROR",
            CliError::InvalidJson { .. } => "CONF_CLI_INVALID_JSON",
            CliError::Render(_) => "CONF_CLI_RENDER_ERROR",
            CliError::Schema(e) => e.code(),
            CliError::Validation(_) => "CONF_VALIDATION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(CliError::io("a.json", "gone").code(), "CONF_CLI_IO_ERROR");
        assert_eq!(CliError::invalid_json("a.json", "bad").code(), "CONF_CLI_INVALID_JSON");
        assert_eq!(
            CliError::from(SchemaError::merge_target("string")).code(),
            "CONF_MERGE_TARGET"
        );
    }

    #[test]
    fn test_io_display_names_the_path() {
        let err = CliError::io("schemas/schema_user.json", "no such file");
        let display = err.to_string();
        assert!(display.contains("schema_user.json"));
        assert!(display.contains("no such file"));
    }
}
