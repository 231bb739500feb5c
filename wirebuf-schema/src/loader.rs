//! Schema loader.
//!
//! This module parses the textual schema form (a JSON object mapping type
//! name to declaration) into the internal [`Schema`] representation,
//! preserving declaration order.

use crate::error::ParseError;
use crate::types::{
    AttrType, Attribute, ByteDecl, Disposition, EnumDecl, EnumValueDecl, Schema, SizeSpec,
    StructDecl, TypeDecl,
};
use serde_json::Value;
use tracing::debug;

/// Loads a schema from its textual JSON form.
///
/// # Arguments
/// * `text` - JSON schema content
///
/// # Returns
/// Loaded schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or contains invalid schema
/// declarations.
pub fn load_schema(text: &str) -> Result<Schema, ParseError> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Object(entries) = document else {
        return Err(ParseError::invalid_document(
            "top-level schema must be an object",
        ));
    };

    let mut schema = Schema::new();
    for (name, decl) in &entries {
        schema.add(parse_declaration(name, decl)?);
    }

    debug!(declarations = schema.len(), "schema loaded");
    Ok(schema)
}

/// Loads a schema from a file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn load_schema_file(path: &std::path::Path) -> Result<Schema, ParseError> {
    let text = std::fs::read_to_string(path)?;
    load_schema(&text)
}

/// Parses one type declaration.
fn parse_declaration(name: &str, value: &Value) -> Result<TypeDecl, ParseError> {
    let Value::Object(fields) = value else {
        return Err(ParseError::invalid_field(name, "type", value.to_string()));
    };
    let kind = fields
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::missing_field(name, "type"))?;

    match kind {
        "byte" => Ok(TypeDecl::Byte(parse_byte(name, fields)?)),
        "enum" => Ok(TypeDecl::Enum(parse_enum(name, fields)?)),
        "struct" => Ok(TypeDecl::Struct(parse_struct(name, fields)?)),
        other => Err(ParseError::UnknownKind {
            declaration: name.to_string(),
            kind: other.to_string(),
        }),
    }
}

/// Parses a byte declaration.
fn parse_byte(
    name: &str,
    fields: &serde_json::Map<String, Value>,
) -> Result<ByteDecl, ParseError> {
    let mut decl = ByteDecl::new(name.to_string());
    if let Some(size) = fields.get("size") {
        decl.size = Some(parse_size(name, size)?);
    }
    decl.comments = parse_comments(fields);
    Ok(decl)
}

/// Parses an enum declaration.
fn parse_enum(
    name: &str,
    fields: &serde_json::Map<String, Value>,
) -> Result<EnumDecl, ParseError> {
    let size = fields
        .get("size")
        .ok_or_else(|| ParseError::missing_field(name, "size"))?;
    let size = size
        .as_u64()
        .ok_or_else(|| ParseError::invalid_field(name, "size", size.to_string()))?;

    let mut decl = EnumDecl::new(name.to_string(), size);
    decl.comments = parse_comments(fields);

    if let Some(values) = fields.get("values") {
        let Value::Array(values) = values else {
            return Err(ParseError::invalid_field(name, "values", values.to_string()));
        };
        for value in values {
            decl.values.push(parse_enum_value(name, value)?);
        }
    }
    Ok(decl)
}

/// Parses one enum value entry.
fn parse_enum_value(enum_name: &str, value: &Value) -> Result<EnumValueDecl, ParseError> {
    let Value::Object(fields) = value else {
        return Err(ParseError::invalid_field(
            enum_name,
            "values",
            value.to_string(),
        ));
    };
    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::missing_field(enum_name, "values.name"))?;
    let backing = fields
        .get("value")
        .ok_or_else(|| ParseError::missing_field(enum_name, "values.value"))?;
    let backing = backing
        .as_u64()
        .ok_or_else(|| ParseError::invalid_field(enum_name, "values.value", backing.to_string()))?;

    let mut decl = EnumValueDecl::new(name.to_string(), backing);
    decl.comments = parse_comments(fields);
    Ok(decl)
}

/// Parses a struct declaration.
fn parse_struct(
    name: &str,
    fields: &serde_json::Map<String, Value>,
) -> Result<StructDecl, ParseError> {
    let mut decl = StructDecl::new(name.to_string());
    decl.comments = parse_comments(fields);

    if let Some(layout) = fields.get("layout") {
        let Value::Array(layout) = layout else {
            return Err(ParseError::invalid_field(name, "layout", layout.to_string()));
        };
        for attribute in layout {
            decl.layout.push(parse_attribute(name, attribute)?);
        }
    }
    Ok(decl)
}

/// Parses one struct layout attribute.
fn parse_attribute(struct_name: &str, value: &Value) -> Result<Attribute, ParseError> {
    let Value::Object(fields) = value else {
        return Err(ParseError::invalid_field(
            struct_name,
            "layout",
            value.to_string(),
        ));
    };
    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::missing_field(struct_name, "layout.name"))?;
    let attr_type = fields
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::missing_field(struct_name, "layout.type"))?;

    let mut attribute = Attribute::new(name.to_string(), AttrType::parse(attr_type));

    if let Some(size) = fields.get("size") {
        attribute.size = Some(parse_size(struct_name, size)?);
    }
    if let Some(disposition) = fields.get("disposition") {
        let disposition = disposition
            .as_str()
            .and_then(Disposition::parse)
            .ok_or_else(|| {
                ParseError::invalid_field(struct_name, "disposition", disposition.to_string())
            })?;
        attribute.disposition = Some(disposition);
    }
    if let Some(value) = fields.get("value") {
        let value = value
            .as_u64()
            .ok_or_else(|| ParseError::invalid_field(struct_name, "value", value.to_string()))?;
        attribute.value = Some(value);
    }
    attribute.comments = parse_comments(fields);
    Ok(attribute)
}

/// Parses a size field: an integer literal or a sibling attribute name.
fn parse_size(declaration: &str, value: &Value) -> Result<SizeSpec, ParseError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(SizeSpec::Literal)
            .ok_or_else(|| ParseError::invalid_field(declaration, "size", n.to_string())),
        Value::String(s) => Ok(SizeSpec::Reference(s.clone())),
        other => Err(ParseError::invalid_field(
            declaration,
            "size",
            other.to_string(),
        )),
    }
}

/// Extracts the optional comments field.
fn parse_comments(fields: &serde_json::Map<String, Value>) -> Option<String> {
    fields
        .get("comments")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDecl;

    #[test]
    fn test_load_byte_declaration() {
        let schema = load_schema(r#"{"Amount": {"type": "byte", "size": 8}}"#)
            .expect("Failed to load");

        match schema.get("Amount").expect("missing Amount") {
            TypeDecl::Byte(decl) => assert_eq!(decl.size, Some(SizeSpec::Literal(8))),
            other => panic!("unexpected declaration: {other:?}"),
        }
    }

    #[test]
    fn test_load_enum_declaration() {
        let schema = load_schema(
            r#"{"AliasAction": {
                "type": "enum",
                "size": 1,
                "values": [
                    {"name": "Link", "value": 1, "comments": "link alias"},
                    {"name": "Unlink", "value": 0}
                ]
            }}"#,
        )
        .expect("Failed to load");

        match schema.get("AliasAction").expect("missing AliasAction") {
            TypeDecl::Enum(decl) => {
                assert_eq!(decl.size, 1);
                assert_eq!(decl.values.len(), 2);
                assert_eq!(decl.get_value("Link").map(|v| v.value), Some(1));
            }
            other => panic!("unexpected declaration: {other:?}"),
        }
    }

    #[test]
    fn test_load_struct_declaration() {
        let schema = load_schema(
            r#"{"Mosaic": {
                "type": "struct",
                "layout": [
                    {"name": "mosaicId", "type": "UnresolvedMosaicId"},
                    {"name": "amount", "type": "byte", "size": 8},
                    {"name": "payload", "type": "byte", "size": "payloadSize"}
                ]
            }}"#,
        )
        .expect("Failed to load");

        match schema.get("Mosaic").expect("missing Mosaic") {
            TypeDecl::Struct(decl) => {
                assert_eq!(decl.layout.len(), 3);
                assert_eq!(
                    decl.layout[0].attr_type,
                    AttrType::Named("UnresolvedMosaicId".to_string())
                );
                assert_eq!(decl.layout[1].size, Some(SizeSpec::Literal(8)));
                assert_eq!(
                    decl.layout[2].size,
                    Some(SizeSpec::Reference("payloadSize".to_string()))
                );
            }
            other => panic!("unexpected declaration: {other:?}"),
        }
    }

    #[test]
    fn test_load_preserves_order() {
        let schema = load_schema(
            r#"{
                "Zebra": {"type": "byte", "size": 1},
                "Alpha": {"type": "byte", "size": 2},
                "Mid": {"type": "byte", "size": 4}
            }"#,
        )
        .expect("Failed to load");

        let names: Vec<&str> = schema.entries().iter().map(TypeDecl::name).collect();
        assert_eq!(names, vec!["Zebra", "Alpha", "Mid"]);
    }

    #[test]
    fn test_load_disposition_and_const_value() {
        let schema = load_schema(
            r#"{"T": {
                "type": "struct",
                "layout": [
                    {"name": "body", "type": "EmbeddedBody", "disposition": "inline"},
                    {"name": "version", "type": "byte", "size": 1, "disposition": "const", "value": 2}
                ]
            }}"#,
        )
        .expect("Failed to load");

        match schema.get("T").expect("missing T") {
            TypeDecl::Struct(decl) => {
                assert!(decl.layout[0].is_inline());
                assert!(decl.layout[1].is_const());
                assert_eq!(decl.layout[1].value, Some(2));
            }
            other => panic!("unexpected declaration: {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_unknown_kind() {
        let err = load_schema(r#"{"T": {"type": "union"}}"#).expect_err("should fail");
        assert!(matches!(err, ParseError::UnknownKind { .. }));
    }

    #[test]
    fn test_load_rejects_missing_type() {
        let err = load_schema(r#"{"T": {"size": 1}}"#).expect_err("should fail");
        assert!(matches!(err, ParseError::MissingField { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_size() {
        let err = load_schema(r#"{"T": {"type": "byte", "size": true}}"#).expect_err("should fail");
        assert!(matches!(err, ParseError::InvalidField { .. }));
    }

    #[test]
    fn test_load_rejects_non_object_document() {
        let err = load_schema(r#"[1, 2, 3]"#).expect_err("should fail");
        assert!(matches!(err, ParseError::InvalidDocument { .. }));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let err = load_schema("{").expect_err("should fail");
        assert!(matches!(err, ParseError::Json(_)));
    }
}
