//! Byte-type wrapper class generation.
//!
//! Every leaf byte declaration yields an immutable Dto wrapper class with a
//! single value field, `loadFromBinary`, `getSize` and `serialize`.

use crate::classify::{AttributeKind, classify};
use crate::error::CodegenError;
use crate::naming::{builtin_type, comment_from_name, format_description, generated_class_name};
use crate::typescript::helpers::{field_name, generator_utils_import, scalar_read_call, scalar_write_call};
use wirebuf_schema::{AttrType, Attribute, ByteDecl, Schema, SizeSpec};

/// Generator for a byte-type Dto wrapper class.
pub struct DefineTypeGenerator<'a> {
    schema: &'a Schema,
    decl: &'a ByteDecl,
}

impl<'a> DefineTypeGenerator<'a> {
    /// Creates a new byte-type generator.
    #[must_use]
    pub fn new(schema: &'a Schema, decl: &'a ByteDecl) -> Self {
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
        vec![generator_utils_import()]
    }

    /// Generates the wrapper class source.
    ///
    /// # Errors
    /// Returns `CodegenError` for unclassifiable shapes or unsupported
    /// scalar widths.
    pub fn generate(&self) -> Result<String, CodegenError> {
        // The declaration itself is classified as if it were an attribute of
        // its own kind; the same decision table applies.
        let mut attribute = Attribute::new(field_name(&self.decl.name), AttrType::Byte);
        attribute.size = self.decl.size.clone();
        let kind = classify(&attribute)?;

        let class_name = self.generated_name();
        let field = &attribute.name;
        let description = format_description(
            self.decl
                .comments
                .as_deref()
                .unwrap_or(&comment_from_name(&self.decl.name)),
        );

        let (ts_type, load_expr, size_expr, serialize_expr) = match kind {
            AttributeKind::Simple => {
                let width = attribute
                    .size
                    .as_ref()
                    .and_then(SizeSpec::as_literal)
                    .unwrap_or(1);
                let ts_type = builtin_type(width)
                    .ok_or(CodegenError::UnsupportedScalarWidth {
                        attribute: self.decl.name.clone(),
                        size: width,
                    })?
                    .to_string();
                (
                    ts_type,
                    scalar_read_call(
                        width,
                        &format!("GeneratorUtils.getBytes(payload, {width})"),
                    ),
                    width.to_string(),
                    scalar_write_call(width, &format!("this.{field}")),
                )
            }
            AttributeKind::Buffer => match &attribute.size {
                Some(SizeSpec::Literal(size)) => (
                    "Uint8Array".to_string(),
                    format!("GeneratorUtils.getBytes(payload, {size})"),
                    size.to_string(),
                    format!("this.{field}"),
                ),
                _ => (
                    "Uint8Array".to_string(),
                    "payload".to_string(),
                    format!("this.{field}.length"),
                    format!("this.{field}"),
                ),
            },
            other => {
                return Err(CodegenError::unclassifiable(
                    &self.decl.name,
                    format!("byte declaration classified as {other:?}"),
                ));
            }
        };

        let mut output = String::new();
        output.push_str(&format!("/** {description} */\n"));
        output.push_str(&format!("export class {class_name} {{\n"));
        output.push_str(&format!("    /** {description} */\n"));
        output.push_str(&format!("    public readonly {field}: {ts_type};\n\n"));

        output.push_str("    /**\n");
        output.push_str("     * Constructor.\n");
        output.push_str(&format!("     * @param {field} {description}\n"));
        output.push_str("     */\n");
        output.push_str(&format!("    constructor({field}: {ts_type}) {{\n"));
        output.push_str(&format!("        this.{field} = {field};\n"));
        output.push_str("    }\n\n");

        output.push_str("    /**\n");
        output.push_str(&format!(
            "     * Creates an instance of {class_name} from binary payload.\n"
        ));
        output.push_str("     * @param payload Byte payload.\n");
        output.push_str(&format!("     * @returns Instance of {class_name}.\n"));
        output.push_str("     */\n");
        output.push_str(&format!(
            "    public static loadFromBinary(payload: Uint8Array): {class_name} {{\n"
        ));
        output.push_str(&format!("        const {field} = {load_expr};\n"));
        output.push_str(&format!("        return new {class_name}({field});\n"));
        output.push_str("    }\n\n");

        output.push_str("    /**\n");
        output.push_str("     * Gets the size of the object.\n");
        output.push_str("     * @returns Size in bytes.\n");
        output.push_str("     */\n");
        output.push_str("    public getSize(): number {\n");
        output.push_str(&format!("        return {size_expr};\n"));
        output.push_str("    }\n\n");

        output.push_str("    /**\n");
        output.push_str("     * Serializes the object to bytes.\n");
        output.push_str("     * @returns Serialized bytes.\n");
        output.push_str("     */\n");
        output.push_str("    public serialize(): Uint8Array {\n");
        output.push_str(&format!("        return {serialize_expr};\n"));
        output.push_str("    }\n");
        output.push_str("}\n");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirebuf_schema::{TypeDecl, load_schema};

    fn byte_decl<'a>(schema: &'a Schema, name: &str) -> &'a ByteDecl {
        match schema.get(name).expect("missing declaration") {
            TypeDecl::Byte(decl) => decl,
            other => panic!("not a byte declaration: {other:?}"),
        }
    }

    #[test]
    fn test_uint64_wrapper() {
        let schema =
            load_schema(r#"{"Amount": {"type": "byte", "size": 8}}"#).expect("Failed to load");
        let generator = DefineTypeGenerator::new(&schema, byte_decl(&schema, "Amount"));

        assert_eq!(generator.generated_name(), "AmountDto");
        let output = generator.generate().expect("generate");
        assert!(output.contains("export class AmountDto"));
        assert!(output.contains("public readonly amount: number[];"));
        assert!(output.contains("GeneratorUtils.bufferToUint64"));
        assert!(output.contains("GeneratorUtils.uint64ToBuffer(this.amount)"));
        assert!(output.contains("return 8;"));
    }

    #[test]
    fn test_small_scalar_wrapper() {
        let schema =
            load_schema(r#"{"Height": {"type": "byte", "size": 4}}"#).expect("Failed to load");
        let generator = DefineTypeGenerator::new(&schema, byte_decl(&schema, "Height"));

        let output = generator.generate().expect("generate");
        assert!(output.contains("public readonly height: number;"));
        assert!(output.contains("GeneratorUtils.bufferToUint"));
        assert!(output.contains("GeneratorUtils.uintToBuffer(this.height, 4)"));
    }

    #[test]
    fn test_fixed_buffer_wrapper() {
        let schema =
            load_schema(r#"{"Signature": {"type": "byte", "size": 64}}"#).expect("Failed to load");
        let generator = DefineTypeGenerator::new(&schema, byte_decl(&schema, "Signature"));

        let output = generator.generate().expect("generate");
        assert!(output.contains("public readonly signature: Uint8Array;"));
        assert!(output.contains("GeneratorUtils.getBytes(payload, 64)"));
        assert!(output.contains("return 64;"));
        assert!(output.contains("return this.signature;"));
    }

    #[test]
    fn test_unsupported_scalar_width_fails() {
        let schema =
            load_schema(r#"{"Odd": {"type": "byte", "size": 3}}"#).expect("Failed to load");
        let generator = DefineTypeGenerator::new(&schema, byte_decl(&schema, "Odd"));

        let err = generator.generate().expect_err("should fail");
        assert!(matches!(err, CodegenError::UnsupportedScalarWidth { .. }));
    }

    #[test]
    fn test_required_imports() {
        let schema =
            load_schema(r#"{"Amount": {"type": "byte", "size": 8}}"#).expect("Failed to load");
        let generator = DefineTypeGenerator::new(&schema, byte_decl(&schema, "Amount"));
        let imports = generator.required_imports();
        assert_eq!(imports.len(), 1);
        assert!(imports[0].contains("GeneratorUtils"));
    }
}
