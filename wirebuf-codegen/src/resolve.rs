//! Size and reference resolution.
//!
//! This module determines an attribute's effective byte size and resolves
//! named size references ("field B's count is given by field A's value"),
//! including lookups through `inline`-disposition sub-layouts.

use crate::error::CodegenError;
use std::collections::HashSet;
use wirebuf_schema::{Attribute, Schema, SizeSpec, TypeDecl};

/// Returns the effective size of an attribute.
///
/// An explicit size is returned verbatim (literal or reference). Otherwise
/// the size declared by the attribute's own type is used, defaulting to 1
/// when the type declares none. This lets a field typed as another byte-type
/// inherit that type's width without repeating it.
#[must_use]
pub fn effective_size(schema: &Schema, attribute: &Attribute) -> SizeSpec {
    if let Some(size) = &attribute.size {
        return size.clone();
    }
    schema
        .get(attribute.attr_type.name())
        .and_then(TypeDecl::declared_size)
        .unwrap_or(SizeSpec::Literal(1))
}

/// Finds the attribute whose `size` field names `attribute_name`.
///
/// Direct layout entries are searched first; only when no direct match
/// exists does the search recurse into the layouts of `inline`-disposition
/// attributes. Returns `None` when no attribute is sized by the given name.
///
/// # Errors
/// Returns `CodegenError::UnknownType` when an inline attribute references
/// an undeclared or non-struct type, and `CodegenError::CyclicInline` when
/// inline references form a cycle.
pub fn find_size_provider<'a>(
    schema: &'a Schema,
    attributes: &'a [Attribute],
    attribute_name: &str,
) -> Result<Option<&'a Attribute>, CodegenError> {
    let mut visited = HashSet::new();
    find_in_layout(schema, attributes, attribute_name, &mut visited)
}

/// Searches one layout level, then its inline sub-layouts.
fn find_in_layout<'a>(
    schema: &'a Schema,
    attributes: &'a [Attribute],
    attribute_name: &str,
    visited: &mut HashSet<String>,
) -> Result<Option<&'a Attribute>, CodegenError> {
    for attribute in attributes {
        if attribute
            .size
            .as_ref()
            .and_then(SizeSpec::as_reference)
            .is_some_and(|reference| reference == attribute_name)
        {
            return Ok(Some(attribute));
        }
    }

    for attribute in attributes {
        if !attribute.is_inline() {
            continue;
        }
        let type_name = attribute.attr_type.name();
        if !visited.insert(type_name.to_string()) {
            return Err(CodegenError::CyclicInline {
                type_name: type_name.to_string(),
            });
        }
        let Some(TypeDecl::Struct(nested)) = schema.get(type_name) else {
            return Err(CodegenError::unknown_type(type_name, &attribute.name));
        };
        if let Some(found) = find_in_layout(schema, &nested.layout, attribute_name, visited)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}
