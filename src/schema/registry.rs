//! Named schema registry backed by a directory of schema files
//!
//! Schemas are stored one per file at `<dir>/schema_<name>.json`,
//! loaded once at startup, and reused across many validations.
//! Registered schemas are immutable: a name can be bound exactly once.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{SchemaError, SchemaResult};
use super::types::Schema;

/// File-backed registry of named, immutable schemas.
pub struct SchemaRegistry {
    /// Directory containing schema files
    schema_dir: PathBuf,
    /// Loaded schemas indexed by name
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    /// Creates a registry rooted at the given directory.
    pub fn new(dir: &Path) -> Self {
        Self {
            schema_dir: dir.to_path_buf(),
            schemas: HashMap::new(),
        }
    }

    /// Returns the registry directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Loads every `schema_<name>.json` file from the registry directory.
    ///
    /// A missing directory is created and treated as empty. Malformed
    /// files and structurally invalid schemas are errors.
    pub fn load_all(&mut self) -> SchemaResult<()> {
        if !self.schema_dir.exists() {
            fs::create_dir_all(&self.schema_dir).map_err(|e| {
                SchemaError::malformed(
                    self.schema_dir.display().to_string(),
                    format!("failed to create schema directory: {}", e),
                )
            })?;
            return Ok(());
        }

        let entries = fs::read_dir(&self.schema_dir).map_err(|e| {
            SchemaError::malformed(
                self.schema_dir.display().to_string(),
                format!("failed to read schema directory: {}", e),
            )
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                SchemaError::malformed(
                    self.schema_dir.display().to_string(),
                    format!("failed to read directory entry: {}", e),
                )
            })?;

            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            self.load_schema_file(&path)?;
        }

        Ok(())
    }

    /// Loads a single schema file, deriving the name from the filename.
    fn load_schema_file(&mut self, path: &Path) -> SchemaResult<()> {
        let name = schema_name_from_path(path).ok_or_else(|| {
            SchemaError::malformed(
                path.display().to_string(),
                "expected filename of the form schema_<name>.json",
            )
        })?;

        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::malformed(path.display().to_string(), format!("failed to read file: {}", e))
        })?;

        let schema: Schema = serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed(path.display().to_string(), format!("invalid JSON: {}", e))
        })?;

        schema
            .validate_structure()
            .map_err(|e| SchemaError::malformed(path.display().to_string(), e.to_string()))?;

        self.register(name, schema)
    }

    /// Registers a schema under a name.
    ///
    /// # Errors
    ///
    /// Returns `CONF_DUPLICATE_FIELD` when the schema structure is
    /// invalid and `CONF_SCHEMA_IMMUTABLE` when the name is taken.
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) -> SchemaResult<()> {
        let name = name.into();
        schema.validate_structure()?;

        if self.schemas.contains_key(&name) {
            return Err(SchemaError::SchemaImmutable(name));
        }

        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Gets a schema by name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Gets a schema by name, erroring when absent.
    pub fn require(&self, name: &str) -> SchemaResult<&Schema> {
        self.get(name)
            .ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))
    }

    /// Checks whether a name is registered.
    pub fn exists(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Saves a schema to its file in the registry directory.
    ///
    /// Refuses to overwrite an existing file (immutability).
    pub fn save(&self, name: &str, schema: &Schema) -> SchemaResult<PathBuf> {
        schema.validate_structure()?;

        let path = self.schema_dir.join(format!("schema_{}.json", name));
        if path.exists() {
            return Err(SchemaError::SchemaImmutable(name.to_string()));
        }

        if !self.schema_dir.exists() {
            fs::create_dir_all(&self.schema_dir).map_err(|e| {
                SchemaError::malformed(
                    self.schema_dir.display().to_string(),
                    format!("failed to create schema directory: {}", e),
                )
            })?;
        }

        let content = serde_json::to_string_pretty(schema).map_err(|e| {
            SchemaError::malformed(
                path.display().to_string(),
                format!("failed to serialize schema: {}", e),
            )
        })?;

        fs::write(&path, content).map_err(|e| {
            SchemaError::malformed(path.display().to_string(), format!("failed to write file: {}", e))
        })?;

        Ok(path)
    }
}

/// Extracts `<name>` from a `schema_<name>.json` path.
fn schema_name_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let name = stem.strip_prefix("schema_")?;
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::Field;
    use tempfile::TempDir;

    fn user_schema() -> Schema {
        Schema::object(vec![
            Field::new("email", Schema::email()),
            Field::new("fullName", Schema::string()),
        ])
    }

    #[test]
    fn test_register_and_get() {
        let tmp = TempDir::new().unwrap();
        let mut registry = SchemaRegistry::new(tmp.path());

        registry.register("user", user_schema()).unwrap();

        assert!(registry.exists("user"));
        assert_eq!(registry.get("user"), Some(&user_schema()));
        assert_eq!(registry.schema_count(), 1);
    }

    #[test]
    fn test_register_is_once_only() {
        let tmp = TempDir::new().unwrap();
        let mut registry = SchemaRegistry::new(tmp.path());

        registry.register("user", user_schema()).unwrap();

        let err = registry.register("user", Schema::string()).unwrap_err();
        assert_eq!(err.code(), "CONF_SCHEMA_IMMUTABLE");
        // The original binding survives
        assert_eq!(registry.get("user"), Some(&user_schema()));
    }

    #[test]
    fn test_register_rejects_invalid_structure() {
        let tmp = TempDir::new().unwrap();
        let mut registry = SchemaRegistry::new(tmp.path());

        let bad = Schema::object(vec![
            Field::new("x", Schema::string()),
            Field::new("x", Schema::string()),
        ]);
        assert!(registry.register("bad", bad).is_err());
        assert_eq!(registry.schema_count(), 0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let registry = SchemaRegistry::new(tmp.path());
        registry.save("user", &user_schema()).unwrap();

        let mut loaded = SchemaRegistry::new(tmp.path());
        loaded.load_all().unwrap();

        assert_eq!(loaded.get("user"), Some(&user_schema()));
    }

    #[test]
    fn test_save_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let registry = SchemaRegistry::new(tmp.path());

        registry.save("user", &user_schema()).unwrap();
        let err = registry.save("user", &Schema::string()).unwrap_err();
        assert_eq!(err.code(), "CONF_SCHEMA_IMMUTABLE");
    }

    #[test]
    fn test_load_all_missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let mut registry = SchemaRegistry::new(&tmp.path().join("schemas"));

        registry.load_all().unwrap();
        assert_eq!(registry.schema_count(), 0);
    }

    #[test]
    fn test_load_all_rejects_malformed_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("schema_broken.json"), "{ not json").unwrap();

        let mut registry = SchemaRegistry::new(tmp.path());
        let err = registry.load_all().unwrap_err();
        assert_eq!(err.code(), "CONF_MALFORMED_SCHEMA");
    }

    #[test]
    fn test_load_all_rejects_misnamed_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("user.json"), "{\"type\":\"string\"}").unwrap();

        let mut registry = SchemaRegistry::new(tmp.path());
        let err = registry.load_all().unwrap_err();
        assert!(err.to_string().contains("schema_<name>.json"));
    }

    #[test]
    fn test_load_all_skips_non_json_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes.txt"), "ignore me").unwrap();

        let mut registry = SchemaRegistry::new(tmp.path());
        registry.load_all().unwrap();
        assert_eq!(registry.schema_count(), 0);
    }

    #[test]
    fn test_names_are_sorted() {
        let tmp = TempDir::new().unwrap();
        let mut registry = SchemaRegistry::new(tmp.path());

        registry.register("user", user_schema()).unwrap();
        registry.register("address", Schema::object(vec![])).unwrap();

        assert_eq!(registry.names(), vec!["address", "user"]);
        assert!(registry.require("user").is_ok());
        assert_eq!(registry.require("missing").unwrap_err().code(), "CONF_UNKNOWN_SCHEMA");
    }
}
