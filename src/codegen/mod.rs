//! Rust type derivation from schemas
//!
//! Renders the static Rust definitions matching a schema so literal
//! values can be checked at compile time. Generated types and schemas
//! are paired declarations: the schema stays the source of truth and
//! bidirectional sync is not guaranteed.

use crate::schema::{Field, Schema, SchemaError, SchemaResult};

/// Identifiers that cannot be used as field names verbatim
const KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "static", "struct", "super", "trait", "true", "type", "use", "where", "while",
];

/// Renders the Rust type expression for a schema.
///
/// Object schemas render by the default struct name `Record`; use
/// [`emit_struct`] to generate the definition itself.
pub fn type_expr(schema: &Schema) -> String {
    expr(schema, "Record")
}

fn expr(schema: &Schema, object_name: &str) -> String {
    match schema {
        Schema::String | Schema::Email => "String".into(),
        Schema::Number => "f64".into(),
        Schema::Bool => "bool".into(),
        Schema::Null | Schema::Undefined => "()".into(),
        Schema::Object { .. } => object_name.to_string(),
        Schema::Array { element } => format!("Vec<{}>", expr(element, object_name)),
        Schema::Optional { inner } => format!("Option<{}>", expr(inner, object_name)),
    }
}

/// Generates struct definitions for an object schema.
///
/// The root struct takes `name`; nested object schemas emit auxiliary
/// structs named `<Name><FieldPascal>`, appended after the root.
/// Optional fields render as `Option<...>` with serde defaults; field
/// names that are not valid Rust identifiers get a serde rename.
///
/// # Errors
///
/// Returns `CONF_CODEGEN_TARGET` when `schema` is not an object schema.
pub fn emit_struct(name: &str, schema: &Schema) -> SchemaResult<String> {
    let fields = schema
        .fields()
        .ok_or_else(|| SchemaError::codegen_target(schema.type_name()))?;

    let mut defs = Vec::new();
    emit_object(name, fields, &mut defs);
    Ok(defs.join("\n"))
}

fn emit_object(name: &str, fields: &[Field], defs: &mut Vec<String>) {
    let mut out = String::new();
    out.push_str(&format!("/// {}\n", name));
    out.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
    out.push_str(&format!("pub struct {} {{\n", name));

    let mut nested: Vec<(String, Vec<Field>)> = Vec::new();
    for field in fields {
        let rust_name = sanitize_ident(&field.name);
        let aux_name = format!("{}{}", name, pascal_case(&field.name));

        let (field_schema, optional) = match &field.schema {
            Schema::Optional { inner } => (inner.as_ref(), true),
            other => (other, false),
        };

        if let Some(inner_fields) = innermost_object_fields(field_schema) {
            nested.push((aux_name.clone(), inner_fields.to_vec()));
        }

        if optional {
            out.push_str("    #[serde(default, skip_serializing_if = \"Option::is_none\")]\n");
        }
        if rust_name != field.name {
            out.push_str(&format!("    #[serde(rename = \"{}\")]\n", field.name));
        }

        let ty = expr(field_schema, &aux_name);
        let ty = if optional { format!("Option<{}>", ty) } else { ty };
        out.push_str(&format!("    pub {}: {},\n", rust_name, ty));
    }

    out.push_str("}\n");
    defs.push(out);

    for (aux_name, aux_fields) in nested {
        emit_object(&aux_name, &aux_fields, defs);
    }
}

/// Finds the object fields below a field schema, looking through
/// arrays and optionals.
fn innermost_object_fields(schema: &Schema) -> Option<&[Field]> {
    match schema {
        Schema::Object { fields } => Some(fields),
        Schema::Array { element } => innermost_object_fields(element),
        Schema::Optional { inner } => innermost_object_fields(inner),
        _ => None,
    }
}

/// Converts a field name into a valid snake_case Rust identifier.
fn sanitize_ident(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if KEYWORDS.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

/// Converts a field name into a PascalCase type-name segment.
fn pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if upper_next {
                out.push(c.to_ascii_uppercase());
                upper_next = false;
            } else {
                out.push(c);
            }
        } else {
            upper_next = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;

    fn citizen_schema() -> Schema {
        Schema::object(vec![
            Field::new("email", Schema::email()),
            Field::new("fullName", Schema::string()),
            Field::new("phone", Schema::number()),
            Field::new("age", Schema::number().optional()),
            Field::new(
                "address",
                Schema::object(vec![
                    Field::new("street", Schema::string()),
                    Field::new("city", Schema::string()),
                ]),
            ),
        ])
    }

    #[test]
    fn test_type_expr_primitives() {
        assert_eq!(type_expr(&Schema::string()), "String");
        assert_eq!(type_expr(&Schema::email()), "String");
        assert_eq!(type_expr(&Schema::number()), "f64");
        assert_eq!(type_expr(&Schema::boolean()), "bool");
        assert_eq!(type_expr(&Schema::null()), "()");
    }

    #[test]
    fn test_type_expr_follows_combinator_order() {
        assert_eq!(
            type_expr(&Schema::string().array_of().optional()),
            "Option<Vec<String>>"
        );
        assert_eq!(
            type_expr(&Schema::string().optional().array_of()),
            "Vec<Option<String>>"
        );
    }

    #[test]
    fn test_emit_struct_fields_in_schema_order() {
        let code = emit_struct("Citizen", &citizen_schema()).unwrap();
        let email_pos = code.find("pub email: String").unwrap();
        let phone_pos = code.find("pub phone: f64").unwrap();
        assert!(email_pos < phone_pos);
    }

    #[test]
    fn test_emit_struct_renames_non_snake_fields() {
        let code = emit_struct("Citizen", &citizen_schema()).unwrap();
        assert!(code.contains("#[serde(rename = \"fullName\")]"));
        assert!(code.contains("pub full_name: String"));
    }

    #[test]
    fn test_emit_struct_optional_field() {
        let code = emit_struct("Citizen", &citizen_schema()).unwrap();
        assert!(code.contains("#[serde(default, skip_serializing_if = \"Option::is_none\")]"));
        assert!(code.contains("pub age: Option<f64>"));
    }

    #[test]
    fn test_emit_struct_nested_object_emits_auxiliary() {
        let code = emit_struct("Citizen", &citizen_schema()).unwrap();
        assert!(code.contains("pub address: CitizenAddress"));
        assert!(code.contains("pub struct CitizenAddress"));
        assert!(code.contains("pub city: String"));
    }

    #[test]
    fn test_emit_struct_array_of_objects() {
        let schema = Schema::object(vec![Field::new(
            "contacts",
            Schema::object(vec![Field::new("email", Schema::email())]).array_of(),
        )]);

        let code = emit_struct("Book", &schema).unwrap();
        assert!(code.contains("pub contacts: Vec<BookContacts>"));
        assert!(code.contains("pub struct BookContacts"));
    }

    #[test]
    fn test_emit_struct_rejects_non_objects() {
        let err = emit_struct("Nope", &Schema::string().array_of()).unwrap_err();
        assert_eq!(err.code(), "CONF_CODEGEN_TARGET");
    }

    #[test]
    fn test_keyword_field_names_are_suffixed() {
        let schema = Schema::object(vec![Field::new("type", Schema::string())]);
        let code = emit_struct("Tagged", &schema).unwrap();
        assert!(code.contains("#[serde(rename = \"type\")]"));
        assert!(code.contains("pub type_: String"));
    }
}
