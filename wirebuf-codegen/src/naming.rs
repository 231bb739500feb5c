//! Type and name resolution.
//!
//! This module maps schema types to generated type/class names, resolves the
//! built-in scalar representation for fixed-width fields, and carries the
//! naming helpers shared by the emitters.

use crate::classify::{AttributeKind, classify};
use crate::error::CodegenError;
use crate::resolve::effective_size;
use wirebuf_schema::{Attribute, Schema, SizeSpec, TypeDecl};

/// Returns the built-in scalar type for a SIMPLE attribute width.
///
/// Sizes 1, 2 and 4 map to the target's native numeric scalar. Size 8 maps
/// to a numeric sequence type: the target runtime's scalar cannot losslessly
/// hold a 64-bit unsigned value, so it is carried as two 32-bit words.
#[must_use]
pub fn builtin_type(size: u64) -> Option<&'static str> {
    match size {
        1 | 2 | 4 => Some("number"),
        8 => Some("number[]"),
        _ => None,
    }
}

/// Returns the generated class name for a referenced type.
///
/// Struct declarations generate `<Name>Builder` (mutable instances are
/// constructed progressively); byte and enum declarations, and types not
/// declared in the schema at all (externally defined), generate `<Name>Dto`.
#[must_use]
pub fn generated_class_name(schema: &Schema, type_name: &str) -> String {
    match schema.get(type_name) {
        Some(TypeDecl::Struct(_)) => format!("{type_name}Builder"),
        _ => format!("{type_name}Dto"),
    }
}

/// Returns the field type of an enum-valued wire field.
///
/// Enums up to 4 bytes wide fit the target's native scalar and keep their
/// generated enum type. An 8-byte enum value cannot be held by the target
/// enum's backing scalar, so the field degrades to the raw numeric sequence
/// representation.
#[must_use]
pub fn enum_value_type(schema: &Schema, type_name: &str, width: u64) -> String {
    match builtin_type(width) {
        Some("number[]") | None => "number[]".to_string(),
        _ => generated_class_name(schema, type_name),
    }
}

/// Returns the generated type of an attribute, per its kind.
///
/// # Errors
/// Propagates classification failures, and returns
/// `CodegenError::UnsupportedScalarWidth` for a SIMPLE attribute whose width
/// has no built-in representation.
pub fn generated_type(schema: &Schema, attribute: &Attribute) -> Result<String, CodegenError> {
    let kind = classify(attribute)?;
    let type_name = attribute.attr_type.name();

    // A named type backed by an enum declaration reads as its numeric
    // backing value, typed by that enum's width.
    if matches!(
        kind,
        AttributeKind::Buffer | AttributeKind::Custom | AttributeKind::Flags
    ) && let Some(TypeDecl::Enum(decl)) = schema.get(type_name)
    {
        return Ok(enum_value_type(schema, type_name, decl.size));
    }

    match kind {
        AttributeKind::Simple => {
            let size = effective_size(schema, attribute)
                .as_literal()
                .ok_or_else(|| {
                    CodegenError::unclassifiable(&attribute.name, "SIMPLE kind with named size")
                })?;
            builtin_type(size)
                .map(str::to_string)
                .ok_or(CodegenError::UnsupportedScalarWidth {
                    attribute: attribute.name.clone(),
                    size,
                })
        }
        AttributeKind::Enum => {
            let size = effective_size(schema, attribute).as_literal().unwrap_or(1);
            Ok(builtin_type(size).unwrap_or("number").to_string())
        }
        AttributeKind::Buffer => Ok("Uint8Array".to_string()),
        _ => {
            let type_name = if attribute.attr_type.is_byte() {
                type_name.to_string()
            } else {
                generated_class_name(schema, type_name)
            };
            match kind {
                AttributeKind::Array => Ok(format!("{type_name}[]")),
                _ => Ok(type_name),
            }
        }
    }
}

/// Returns the fully qualified import for a known collection token.
///
/// Targets with explicit collection imports consult this fixed table; tokens
/// not listed require no import.
#[must_use]
pub fn import_for_type(data_type: &str) -> Option<&'static str> {
    let actual = data_type.split('<').next().unwrap_or(data_type);
    match actual {
        "ArrayList" => Some("java.util.ArrayList"),
        "EnumSet" => Some("java.util.EnumSet"),
        _ => None,
    }
}

/// Derives a human-readable comment from a camelCase name.
///
/// `mosaicsCount` becomes `Mosaics count`.
#[must_use]
pub fn comment_from_name(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut result = String::with_capacity(name.len() + 4);
    result.extend(first.to_uppercase());
    for c in chars {
        if c.is_uppercase() {
            result.push(' ');
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Capitalizes a description and terminates it with a period.
#[must_use]
pub fn format_description(description: &str) -> String {
    let mut chars = description.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut formatted: String = first.to_uppercase().collect();
    formatted.push_str(chars.as_str());
    if !formatted.ends_with('.') {
        formatted.push('.');
    }
    formatted
}

/// Returns the doc comment text for an attribute.
///
/// Uses the attribute's own comments when present, otherwise a comment
/// derived from its name.
#[must_use]
pub fn comments_from_attribute(attribute: &Attribute) -> String {
    let comment = attribute
        .comments
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map_or_else(|| comment_from_name(&attribute.name), str::to_string);
    format_description(&comment)
}

/// Converts a value name to the generated enum constant form.
///
/// `resetVotingKeys` becomes `RESET_VOTING_KEYS`.
#[must_use]
pub fn enum_constant_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_uppercase());
    }
    result
}
