//! CLI command implementations
//!
//! Throwing mode (`validate` without `--safe`) lets the validation
//! error propagate to `main`, which prints every issue and exits 1.
//! Safe mode converts the same judgment into a JSON outcome object on
//! stdout and always exits 0: the caller decides what to surface.

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::codegen;
use crate::schema::Schema;
use crate::validate::{ParseOutcome, Validator, ValidatorOptions};
use crate::value::Value;

use super::args::{Cli, Command, ExtraFieldsArg};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Check { schema } => check(&schema),
        Command::Validate {
            schema,
            input,
            safe,
            extra_fields,
        } => validate(&schema, &input, safe, extra_fields),
        Command::Codegen { schema, name } => emit(&schema, &name),
    }
}

/// Loads and structurally checks a schema document.
fn load_schema(path: &Path) -> CliResult<Schema> {
    let content =
        fs::read_to_string(path).map_err(|e| CliError::io(path.display().to_string(), e))?;

    let schema: Schema = serde_json::from_str(&content)
        .map_err(|e| CliError::invalid_json(path.display().to_string(), e))?;

    schema.validate_structure()?;
    Ok(schema)
}

/// Loads a JSON document as a runtime value.
fn load_value(path: &Path) -> CliResult<Value> {
    let content =
        fs::read_to_string(path).map_err(|e| CliError::io(path.display().to_string(), e))?;

    let json: JsonValue = serde_json::from_str(&content)
        .map_err(|e| CliError::invalid_json(path.display().to_string(), e))?;

    Ok(Value::from(json))
}

fn check(schema_path: &Path) -> CliResult<()> {
    let schema = load_schema(schema_path)?;
    println!("schema ok: {}", schema.type_name());
    Ok(())
}

fn validate(
    schema_path: &Path,
    input_path: &Path,
    safe: bool,
    extra_fields: ExtraFieldsArg,
) -> CliResult<()> {
    let schema = load_schema(schema_path)?;
    let input = load_value(input_path)?;
    let validator = Validator::with_options(ValidatorOptions {
        extra_fields: extra_fields.into(),
    });

    if safe {
        let outcome = validator.safe_parse(&schema, &input);
        println!("{}", render_outcome(&outcome)?);
        return Ok(());
    }

    let output = validator.parse(&schema, &input)?;
    println!("{}", pretty(&JsonValue::from(&output))?);
    Ok(())
}

fn emit(schema_path: &Path, name: &str) -> CliResult<()> {
    let schema = load_schema(schema_path)?;
    let code = codegen::emit_struct(name, &schema)?;
    println!("{}", code);
    Ok(())
}

/// Renders a safe-parse outcome as a JSON object mirroring the
/// `{"success": ...}` inspection shape.
fn render_outcome(outcome: &ParseOutcome) -> CliResult<String> {
    let report = match outcome {
        ParseOutcome::Success(value) => serde_json::json!({
            "success": true,
            "data": JsonValue::from(value),
        }),
        ParseOutcome::Failure(error) => serde_json::json!({
            "success": false,
            "issues": error
                .issues()
                .iter()
                .map(|issue| serde_json::json!({
                    "path": issue.path,
                    "code": issue.code.code(),
                    "message": issue.message,
                }))
                .collect::<Vec<_>>(),
        }),
    };
    pretty(&report)
}

fn pretty(value: &JsonValue) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationError;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_schema_rejects_missing_file() {
        let err = load_schema(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert_eq!(err.code(), "CONF_CLI_IO_ERROR");
    }

    #[test]
    fn test_load_schema_rejects_bad_json() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "schema_bad.json", "{ nope");
        let err = load_schema(&path).unwrap_err();
        assert_eq!(err.code(), "CONF_CLI_INVALID_JSON");
    }

    #[test]
    fn test_load_schema_runs_structure_check() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "schema_dup.json",
            r#"{"type":"object","fields":[
                {"name":"x","schema":{"type":"string"}},
                {"name":"x","schema":{"type":"number"}}
            ]}"#,
        );
        let err = load_schema(&path).unwrap_err();
        assert_eq!(err.code(), "CONF_DUPLICATE_FIELD");
    }

    #[test]
    fn test_load_value_converts_json() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "doc.json", r#"{"name":"Alice"}"#);
        let value = load_value(&path).unwrap();
        assert_eq!(value.get("name").and_then(Value::as_str), Some("Alice"));
    }

    #[test]
    fn test_render_outcome_success_shape() {
        let outcome = ParseOutcome::Success(Value::string("ok"));
        let rendered = render_outcome(&outcome).unwrap();
        let json: JsonValue = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "ok");
    }

    #[test]
    fn test_render_outcome_failure_lists_issues() {
        let outcome = Schema::string().safe_parse(&Value::Number(1.0));
        let rendered = render_outcome(&outcome).unwrap();
        let json: JsonValue = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["issues"][0]["path"], "$root");
        assert_eq!(json["issues"][0]["code"], "CONF_TYPE_MISMATCH");
    }

    #[test]
    fn test_validation_error_propagates_through_cli_error() {
        let err: ValidationError = Schema::string().parse(&Value::Null).unwrap_err();
        let cli_err = CliError::from(err);
        assert_eq!(cli_err.code(), "CONF_VALIDATION_FAILED");
        assert!(cli_err.to_string().contains("$root"));
    }
}
