//! Shared TypeScript emission helpers and static helper artifacts.

/// Helper classes emitted once per run, independent of schema content.
pub const HELPER_CLASSES: &[&str] = &["GeneratorUtils"];

/// Generator for the static helper library artifacts.
pub struct StaticClassGenerator {
    name: &'static str,
}

impl StaticClassGenerator {
    /// Creates a generator for the named helper class.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Returns the generated class name.
    #[must_use]
    pub fn generated_name(&self) -> &'static str {
        self.name
    }

    /// Returns the helper class source.
    #[must_use]
    pub fn generate(&self) -> String {
        // GeneratorUtils is the only helper today.
        include_str!("GeneratorUtils.ts").to_string()
    }
}

/// Returns the expression reading a scalar of the given width from `source`.
pub(crate) fn scalar_read_call(width: u64, source: &str) -> String {
    if width == 8 {
        format!("GeneratorUtils.bufferToUint64({source})")
    } else {
        format!("GeneratorUtils.bufferToUint({source})")
    }
}

/// Returns the expression serializing a scalar `value` of the given width.
pub(crate) fn scalar_write_call(width: u64, value: &str) -> String {
    if width == 8 {
        format!("GeneratorUtils.uint64ToBuffer({value})")
    } else {
        format!("GeneratorUtils.uintToBuffer({value}, {width})")
    }
}

/// Returns the standard GeneratorUtils import line.
pub(crate) fn generator_utils_import() -> String {
    "import { GeneratorUtils } from './GeneratorUtils';".to_string()
}

/// Lowercases the first character of a type name, giving the field form.
pub(crate) fn field_name(type_name: &str) -> String {
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
