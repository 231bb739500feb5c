//! Attribute kind classification.
//!
//! This module maps a schema attribute to the structural kind that decides
//! which code pattern is emitted to read or write it.

use crate::error::CodegenError;
use wirebuf_schema::{AttrType, Attribute, SizeSpec};

/// Structural kind of a schema attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Fixed-width scalar.
    Simple,
    /// Raw byte range, fixed-size or sized by a named field.
    Buffer,
    /// Repeated elements whose count is given by a named field.
    Array,
    /// Nested generated object with its own layout logic.
    Custom,
    /// Bit-mask enumeration.
    Flags,
    /// Integer-backed enumeration.
    Enum,
    /// Defensive default; never produced by classification.
    Unknown,
}

/// Returns true for type names treated as bit-flag enumerations.
#[must_use]
pub fn is_flags_enum(name: &str) -> bool {
    name.ends_with("Flags")
}

/// Classifies an attribute into its structural kind.
///
/// The decision table is evaluated in priority order, first match wins:
///
/// 1. Type name ending in `Flags` is FLAGS, regardless of anything else.
/// 2. The literal `struct` kind, or a missing size, is CUSTOM.
/// 3. The literal `enum` kind is ENUM.
/// 4. A string size ending in `Size` is BUFFER; ending in `Count` is ARRAY.
/// 5. A numeric size up to 8 on a `byte` attribute is SIMPLE.
/// 6. Anything else is a fixed-size BUFFER.
///
/// # Errors
/// Returns `CodegenError::UnclassifiableAttribute` for a string size whose
/// suffix is neither `Size` nor `Count`; such a shape is not modelled and
/// must not be guessed at.
pub fn classify(attribute: &Attribute) -> Result<AttributeKind, CodegenError> {
    if is_flags_enum(attribute.attr_type.name()) {
        return Ok(AttributeKind::Flags);
    }

    if attribute.attr_type == AttrType::Struct || attribute.size.is_none() {
        return Ok(AttributeKind::Custom);
    }

    if attribute.attr_type == AttrType::Enum {
        return Ok(AttributeKind::Enum);
    }

    match &attribute.size {
        Some(SizeSpec::Reference(reference)) => {
            if reference.ends_with("Size") {
                Ok(AttributeKind::Buffer)
            } else if reference.ends_with("Count") {
                Ok(AttributeKind::Array)
            } else {
                Err(CodegenError::unclassifiable(
                    &attribute.name,
                    format!("size reference '{reference}' has no Size/Count suffix"),
                ))
            }
        }
        Some(SizeSpec::Literal(size)) => {
            if attribute.attr_type.is_byte() && *size <= 8 {
                Ok(AttributeKind::Simple)
            } else {
                Ok(AttributeKind::Buffer)
            }
        }
        // Unreachable: a missing size classified as CUSTOM above.
        None => Ok(AttributeKind::Custom),
    }
}
