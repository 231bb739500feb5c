//! # Wirebuf Codegen
//!
//! Code generation from wirebuf JSON schemas.
//!
//! This crate provides:
//! - TypeScript class generation from wirebuf schemas
//! - Attribute classification and size-provider resolution
//! - Generated type and name resolution
//! - A lazy, deterministic artifact stream and a file-writing loop

pub mod classify;
pub mod error;
pub mod generator;
pub mod naming;
pub mod resolve;
pub mod target;
pub mod typescript;

pub use classify::AttributeKind;
pub use error::CodegenError;
pub use generator::{Artifact, Generator, GeneratorOptions, write_artifacts};
pub use target::Target;

/// Generates all artifacts from a JSON schema string.
///
/// # Arguments
/// * `text` - JSON schema content
///
/// # Returns
/// Generated artifacts in generation order.
///
/// # Errors
/// Returns `CodegenError` if loading, validation, or generation fails.
pub fn generate_from_str(
    text: &str,
    options: GeneratorOptions,
) -> Result<Vec<Artifact>, CodegenError> {
    let schema = wirebuf_schema::load_schema(text)?;
    wirebuf_schema::validate_schema(&schema)?;
    let generator = Generator::new(&schema, options);
    generator.generate()
}

/// Generates all artifacts from a JSON schema file.
///
/// # Arguments
/// * `path` - Path to the JSON schema file
///
/// # Returns
/// Generated artifacts in generation order.
///
/// # Errors
/// Returns `CodegenError` if reading, loading, validation, or generation
/// fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: GeneratorOptions,
) -> Result<Vec<Artifact>, CodegenError> {
    let text = std::fs::read_to_string(path)?;
    generate_from_str(&text, options)
}
