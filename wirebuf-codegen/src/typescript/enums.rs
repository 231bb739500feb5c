//! Enum class generation.
//!
//! Enum declarations are collected during the schema walk and emitted last;
//! this module produces the class for one registered enum, bit-flag sets
//! included.

use crate::classify::is_flags_enum;
use crate::naming::{
    comment_from_name, enum_constant_name, format_description, generated_class_name,
};
use wirebuf_schema::{EnumDecl, Schema};

/// Generator for one enum declaration.
pub struct EnumGenerator<'a> {
    schema: &'a Schema,
    decl: &'a EnumDecl,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(schema: &'a Schema, decl: &'a EnumDecl) -> Self {
        Self { schema, decl }
    }

    /// Returns the generated class name.
    #[must_use]
    pub fn generated_name(&self) -> String {
        generated_class_name(self.schema, &self.decl.name)
    }

    /// Returns the import lines this class needs.
    #[must_use]
    pub fn required_imports(&self) -> Vec<String> {
        Vec::new()
    }

    /// Generates the enum source.
    #[must_use]
    pub fn generate(&self) -> String {
        let class_name = self.generated_name();
        let description = format_description(
            self.decl
                .comments
                .as_deref()
                .unwrap_or(&comment_from_name(&self.decl.name)),
        );

        let mut output = String::new();
        if is_flags_enum(&self.decl.name) {
            output.push_str(&format!("/** {description} (bit-flag set) */\n"));
        } else {
            output.push_str(&format!("/** {description} */\n"));
        }
        output.push_str(&format!("export enum {class_name} {{\n"));
        for value in &self.decl.values {
            let comment = format_description(
                value
                    .comments
                    .as_deref()
                    .unwrap_or(&comment_from_name(&value.name)),
            );
            output.push_str(&format!("    /** {comment} */\n"));
            output.push_str(&format!(
                "    {} = {},\n",
                enum_constant_name(&value.name),
                value.value
            ));
        }
        output.push_str("}\n");
        output
    }
}
