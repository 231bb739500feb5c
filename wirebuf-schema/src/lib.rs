//! # Wirebuf Schema
//!
//! Wire-format schema model, loader and validation.
//!
//! This crate provides:
//! - Type declarations for schema elements (byte leaves, enums, structs)
//! - An order-preserving schema container
//! - JSON schema loading
//! - Structural validation

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use loader::{load_schema, load_schema_file};
pub use types::{
    AttrType, Attribute, ByteDecl, Disposition, EnumDecl, EnumValueDecl, Schema, SizeSpec,
    StructDecl, TypeDecl,
};
pub use validation::validate_schema;
