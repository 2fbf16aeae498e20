//! Validation outcome types
//!
//! `ValidationError` is the propagating form: it implements
//! `std::error::Error` and aborts the caller's operation through `?`.
//! `ParseOutcome` is the inspection form returned by `safe_parse`: it
//! never participates in error propagation, the caller examines it.

use thiserror::Error;

use crate::value::Value;

use super::issue::Issue;

/// Error carrying every issue found by one validation call.
///
/// The issue list is ordered by traversal and never empty.
#[derive(Debug, Clone, Error)]
#[error("validation failed with {} issue(s):\n{}", .issues.len(), render_issues(.issues))]
pub struct ValidationError {
    issues: Vec<Issue>,
}

fn render_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    /// Returns the ordered issue list
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Returns the number of issues
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// Inspection result of `safe_parse`.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// The input conformed; carries the validated output value
    Success(Value),
    /// The input violated the schema; carries every issue found
    Failure(ValidationError),
}

impl ParseOutcome {
    /// True when validation succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success(_))
    }

    /// Returns the validated value on success
    pub fn success(self) -> Option<Value> {
        match self {
            ParseOutcome::Success(value) => Some(value),
            ParseOutcome::Failure(_) => None,
        }
    }

    /// Returns the error on failure
    pub fn failure(self) -> Option<ValidationError> {
        match self {
            ParseOutcome::Success(_) => None,
            ParseOutcome::Failure(error) => Some(error),
        }
    }

    /// Borrows the validated value on success
    pub fn as_success(&self) -> Option<&Value> {
        match self {
            ParseOutcome::Success(value) => Some(value),
            ParseOutcome::Failure(_) => None,
        }
    }

    /// Borrows the error on failure
    pub fn as_failure(&self) -> Option<&ValidationError> {
        match self {
            ParseOutcome::Success(_) => None,
            ParseOutcome::Failure(error) => Some(error),
        }
    }

    /// Converts into the propagating form
    pub fn into_result(self) -> Result<Value, ValidationError> {
        match self {
            ParseOutcome::Success(value) => Ok(value),
            ParseOutcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::issue::Issue;

    #[test]
    fn test_display_lists_every_issue() {
        let error = ValidationError::new(vec![
            Issue::type_mismatch("phone", "number", "string"),
            Issue::missing_field("email"),
        ]);

        let display = error.to_string();
        assert!(display.contains("2 issue(s)"));
        assert!(display.contains("phone"));
        assert!(display.contains("email"));
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = ParseOutcome::Success(Value::Null);
        assert!(ok.is_success());
        assert_eq!(ok.clone().success(), Some(Value::Null));
        assert!(ok.into_result().is_ok());

        let err = ParseOutcome::Failure(ValidationError::new(vec![Issue::missing_field("x")]));
        assert!(!err.is_success());
        assert_eq!(err.as_failure().map(ValidationError::issue_count), Some(1));
        assert!(err.into_result().is_err());
    }
}
