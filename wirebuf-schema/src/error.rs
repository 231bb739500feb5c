//! Error types for schema loading and validation.

use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level schema document is not an object.
    #[error("invalid schema document: {message}")]
    InvalidDocument {
        /// Error message.
        message: String,
    },

    /// Missing required field.
    #[error("missing required field '{field}' in declaration '{declaration}'")]
    MissingField {
        /// Declaration name.
        declaration: String,
        /// Field name.
        field: String,
    },

    /// Invalid field value.
    #[error("invalid value '{value}' for field '{field}' in declaration '{declaration}'")]
    InvalidField {
        /// Declaration name.
        declaration: String,
        /// Field name.
        field: String,
        /// Invalid value.
        value: String,
    },

    /// Unknown declaration kind.
    #[error("unknown declaration kind '{kind}' for '{declaration}'")]
    UnknownKind {
        /// Declaration name.
        declaration: String,
        /// Declared kind.
        kind: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates an invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Creates a missing field error.
    pub fn missing_field(declaration: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            declaration: declaration.into(),
            field: field.into(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(
        declaration: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            declaration: declaration.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Referenced type not declared where a declaration is required.
    #[error("type '{type_name}' referenced by '{referrer}' is not declared")]
    TypeNotFound {
        /// Type name.
        type_name: String,
        /// Referring declaration or attribute.
        referrer: String,
    },

    /// Inline attribute referencing something other than a struct.
    #[error("inline attribute '{attribute}' must reference a struct, got '{type_name}'")]
    InvalidInline {
        /// Attribute name.
        attribute: String,
        /// Referenced type name.
        type_name: String,
    },

    /// Cyclic inline reference chain.
    #[error("cyclic inline reference detected: {path}")]
    CyclicInline {
        /// Path of the cycle.
        path: String,
    },

    /// Duplicate attribute name within a struct layout.
    #[error("duplicate attribute '{attribute}' in struct '{struct_name}'")]
    DuplicateAttribute {
        /// Struct name.
        struct_name: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid enum encoding width.
    #[error("invalid encoding width {size} for enum '{enum_name}'")]
    InvalidEnumWidth {
        /// Enum name.
        enum_name: String,
        /// Declared width.
        size: u64,
    },
}
