//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] wirebuf_schema::SchemaError),

    /// Schema loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] wirebuf_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Size reference that does not resolve to any sibling attribute.
    #[error("size reference '{reference}' of attribute '{attribute}' does not resolve")]
    UnresolvedSizeReference {
        /// Attribute carrying the reference.
        attribute: String,
        /// The referenced name.
        reference: String,
    },

    /// Attribute shape the classifier does not model.
    #[error("attribute '{attribute}' is unclassifiable: {reason}")]
    UnclassifiableAttribute {
        /// Attribute name.
        attribute: String,
        /// What made classification fail.
        reason: String,
    },

    /// Scalar width with no safe target representation.
    #[error("unsupported scalar width {size} for attribute '{attribute}'")]
    UnsupportedScalarWidth {
        /// Attribute name.
        attribute: String,
        /// Offending width.
        size: u64,
    },

    /// Lookup of a type that must be declared but is not.
    #[error("unknown type '{type_name}' referenced by '{referrer}'")]
    UnknownType {
        /// Type name.
        type_name: String,
        /// Referring attribute or declaration.
        referrer: String,
    },

    /// Cyclic inline reference encountered during resolution.
    #[error("cyclic inline reference detected while resolving through '{type_name}'")]
    CyclicInline {
        /// Struct name closing the cycle.
        type_name: String,
    },
}

impl CodegenError {
    /// Creates an unresolved size reference error.
    pub fn unresolved(attribute: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::UnresolvedSizeReference {
            attribute: attribute.into(),
            reference: reference.into(),
        }
    }

    /// Creates an unclassifiable attribute error.
    pub fn unclassifiable(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnclassifiableAttribute {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown type error.
    pub fn unknown_type(type_name: impl Into<String>, referrer: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            referrer: referrer.into(),
        }
    }
}
