//! Schema validation utilities.
//!
//! This module provides structural checks run before code generation: inline
//! references must point at declared structs and must not form cycles, layout
//! attribute names must be unique, and enum encoding widths must be
//! representable.

use crate::error::SchemaError;
use crate::types::{Attribute, Schema, StructDecl, TypeDecl};
use std::collections::HashSet;
use tracing::debug;

/// Validates a loaded schema for structural correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Errors
/// Returns `SchemaError` describing the first issue found.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    for decl in schema.entries() {
        match decl {
            TypeDecl::Struct(struct_decl) => validate_struct(schema, struct_decl)?,
            TypeDecl::Enum(enum_decl) => {
                if !matches!(enum_decl.size, 1 | 2 | 4 | 8) {
                    return Err(SchemaError::InvalidEnumWidth {
                        enum_name: enum_decl.name.clone(),
                        size: enum_decl.size,
                    });
                }
            }
            TypeDecl::Byte(_) => {}
        }
    }
    debug!(declarations = schema.len(), "schema validated");
    Ok(())
}

/// Validates one struct declaration.
fn validate_struct(schema: &Schema, decl: &StructDecl) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for attribute in &decl.layout {
        if !seen.insert(attribute.name.as_str()) {
            return Err(SchemaError::DuplicateAttribute {
                struct_name: decl.name.clone(),
                attribute: attribute.name.clone(),
            });
        }
        if attribute.is_inline() {
            validate_inline(schema, attribute)?;
            check_inline_cycle(schema, decl, &mut vec![decl.name.clone()])?;
        }
    }
    Ok(())
}

/// Checks that an inline attribute references a declared struct.
fn validate_inline(schema: &Schema, attribute: &Attribute) -> Result<(), SchemaError> {
    let type_name = attribute.attr_type.name();
    match schema.get(type_name) {
        Some(TypeDecl::Struct(_)) => Ok(()),
        Some(_) => Err(SchemaError::InvalidInline {
            attribute: attribute.name.clone(),
            type_name: type_name.to_string(),
        }),
        None => Err(SchemaError::TypeNotFound {
            type_name: type_name.to_string(),
            referrer: attribute.name.clone(),
        }),
    }
}

/// Walks inline references depth-first, rejecting cycles.
fn check_inline_cycle(
    schema: &Schema,
    decl: &StructDecl,
    path: &mut Vec<String>,
) -> Result<(), SchemaError> {
    for attribute in &decl.layout {
        if !attribute.is_inline() {
            continue;
        }
        let target = attribute.attr_type.name();
        if path.iter().any(|seen| seen == target) {
            path.push(target.to_string());
            return Err(SchemaError::CyclicInline {
                path: path.join(" -> "),
            });
        }
        if let Some(TypeDecl::Struct(nested)) = schema.get(target) {
            path.push(target.to_string());
            check_inline_cycle(schema, nested, path)?;
            path.pop();
        }
    }
    Ok(())
}
