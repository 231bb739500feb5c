//! Struct builder class generation.
//!
//! A struct declaration yields a Builder class whose `loadFromBinary`,
//! `getSize` and `serialize` bodies follow the per-attribute code pattern
//! chosen by the classifier: scalar conversion, raw buffer copy,
//! count-prefixed element loop, or delegation to a nested generated class.

use std::collections::HashSet;

use crate::classify::{AttributeKind, classify};
use crate::error::CodegenError;
use crate::naming::{
    comment_from_name, comments_from_attribute, enum_constant_name, format_description,
    generated_class_name, generated_type,
};
use crate::resolve::{effective_size, find_size_provider};
use crate::typescript::helpers::{generator_utils_import, scalar_read_call, scalar_write_call};
use wirebuf_schema::{Attribute, Schema, SizeSpec, StructDecl, TypeDecl};

/// How an attribute is read from and written to the wire.
#[derive(Debug, Clone)]
enum WirePattern {
    /// Fixed-width numeric value (scalars, enum references, flag sets).
    Scalar { width: u64 },
    /// Raw byte range of literal size.
    FixedBuffer { size: u64 },
    /// Raw byte range whose length is supplied by a named field.
    SizedBuffer { provider: String },
    /// Repeated elements whose count is supplied by a named field.
    CountedArray { count: String, element: String },
    /// Nested generated object with its own layout logic.
    Nested { class: String },
    /// Fixed value with no wire presence.
    Constant { value: u64 },
}

/// Emission plan for one attribute.
#[derive(Debug, Clone)]
struct FieldPlan<'a> {
    attribute: &'a Attribute,
    ts_type: String,
    pattern: WirePattern,
    /// Set when this attribute supplies the size/count of a direct sibling;
    /// such fields are not stored but computed from the sibling on write.
    counts_for: Option<String>,
}

impl FieldPlan<'_> {
    /// Returns true if the field is stored on the generated class.
    fn is_stored(&self) -> bool {
        self.counts_for.is_none() && !matches!(self.pattern, WirePattern::Constant { .. })
    }
}

/// Generator for a struct builder class.
pub struct ClassGenerator<'a> {
    schema: &'a Schema,
    decl: &'a StructDecl,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(schema: &'a Schema, decl: &'a StructDecl) -> Self {
        Self { schema, decl }
    }

    /// Returns the generated class name.
    #[must_use]
    pub fn generated_name(&self) -> String {
        generated_class_name(self.schema, &self.decl.name)
    }

    /// Returns the import lines this class needs.
    ///
    /// # Errors
    /// Propagates planning failures.
    pub fn required_imports(&self) -> Result<Vec<String>, CodegenError> {
        let plans = self.plan()?;
        let mut classes: Vec<&str> = Vec::new();
        for plan in &plans {
            let referenced = match &plan.pattern {
                WirePattern::Nested { class } => Some(class.as_str()),
                WirePattern::CountedArray { element, .. } => Some(element.as_str()),
                WirePattern::Scalar { .. }
                    if plan.ts_type != "number" && plan.ts_type != "number[]" =>
                {
                    Some(plan.ts_type.as_str())
                }
                _ => None,
            };
            if let Some(class) = referenced
                && !classes.contains(&class)
            {
                classes.push(class);
            }
        }
        classes.sort_unstable();

        let mut imports = vec![generator_utils_import()];
        imports.extend(
            classes
                .iter()
                .map(|class| format!("import {{ {class} }} from './{class}';")),
        );
        Ok(imports)
    }

    /// Generates the builder class source.
    ///
    /// # Errors
    /// Returns `CodegenError` when an attribute cannot be classified, a size
    /// reference does not resolve, or a scalar width is unsupported.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let plans = self.plan()?;
        let class_name = self.generated_name();
        let description = format_description(
            self.decl
                .comments
                .as_deref()
                .unwrap_or(&comment_from_name(&self.decl.name)),
        );

        let mut output = String::new();
        output.push_str(&format!("/** {description} */\n"));
        output.push_str(&format!("export class {class_name} {{\n"));
        self.emit_fields(&mut output, &plans);
        self.emit_constructor(&mut output, &plans);
        self.emit_load_from_binary(&mut output, &class_name, &plans);
        self.emit_get_size(&mut output, &plans);
        self.emit_serialize(&mut output, &plans);
        output.push_str("}\n");
        Ok(output)
    }

    /// Builds the per-attribute emission plan.
    ///
    /// Layouts referenced through `disposition: inline` are spliced into the
    /// enclosing class, so their fields read and write exactly as if they had
    /// been declared in place.
    fn plan(&self) -> Result<Vec<FieldPlan<'a>>, CodegenError> {
        let mut flattened = Vec::new();
        let mut visited = HashSet::new();
        self.flatten_layout(&self.decl.layout, &mut flattened, &mut visited)?;
        flattened
            .iter()
            .map(|attribute| self.plan_attribute(*attribute, &flattened))
            .collect()
    }

    /// Splices inline sub-layouts into one flat attribute list.
    fn flatten_layout(
        &self,
        layout: &'a [Attribute],
        out: &mut Vec<&'a Attribute>,
        visited: &mut HashSet<String>,
    ) -> Result<(), CodegenError> {
        for attribute in layout {
            if !attribute.is_inline() {
                out.push(attribute);
                continue;
            }
            let type_name = attribute.attr_type.name();
            if !visited.insert(type_name.to_string()) {
                return Err(CodegenError::CyclicInline {
                    type_name: type_name.to_string(),
                });
            }
            let Some(TypeDecl::Struct(nested)) = self.schema.get(type_name) else {
                return Err(CodegenError::unknown_type(type_name, &attribute.name));
            };
            self.flatten_layout(&nested.layout, out, visited)?;
        }
        Ok(())
    }

    /// Plans one attribute of the flattened layout.
    fn plan_attribute(
        &self,
        attribute: &'a Attribute,
        flattened: &[&'a Attribute],
    ) -> Result<FieldPlan<'a>, CodegenError> {
        if attribute.is_const() {
            return Ok(FieldPlan {
                attribute,
                ts_type: "number".to_string(),
                pattern: WirePattern::Constant {
                    value: attribute.value.unwrap_or(0),
                },
                counts_for: None,
            });
        }

        let type_name = attribute.attr_type.name();
        let kind = classify(attribute)?;
        let ts_type = generated_type(self.schema, attribute)?;
        let pattern = match kind {
            AttributeKind::Flags => {
                let width = match self.schema.get(type_name) {
                    Some(TypeDecl::Enum(decl)) => decl.size,
                    _ => 1,
                };
                WirePattern::Scalar { width }
            }
            AttributeKind::Enum => WirePattern::Scalar {
                width: effective_size(self.schema, attribute)
                    .as_literal()
                    .unwrap_or(1),
            },
            AttributeKind::Simple => WirePattern::Scalar {
                width: effective_size(self.schema, attribute)
                    .as_literal()
                    .ok_or_else(|| {
                        CodegenError::unclassifiable(&attribute.name, "SIMPLE kind with named size")
                    })?,
            },
            AttributeKind::Buffer => {
                // A named type backed by an enum declaration reads as its
                // numeric backing value, not as a raw buffer.
                if let Some(TypeDecl::Enum(decl)) = self.schema.get(type_name) {
                    WirePattern::Scalar { width: decl.size }
                } else {
                    match &attribute.size {
                        Some(SizeSpec::Reference(reference)) => WirePattern::SizedBuffer {
                            provider: self.provider_access(attribute, flattened, reference)?,
                        },
                        Some(SizeSpec::Literal(size)) => WirePattern::FixedBuffer { size: *size },
                        None => WirePattern::FixedBuffer { size: 1 },
                    }
                }
            }
            AttributeKind::Array => {
                let reference = attribute
                    .size
                    .as_ref()
                    .and_then(SizeSpec::as_reference)
                    .ok_or_else(|| {
                        CodegenError::unclassifiable(&attribute.name, "ARRAY kind without count")
                    })?;
                let count = self.provider_access(attribute, flattened, reference)?;
                let element = ts_type.strip_suffix("[]").unwrap_or(&ts_type).to_string();
                WirePattern::CountedArray { count, element }
            }
            AttributeKind::Custom => {
                // Enum-typed attributes without an explicit size also land
                // here; they read as their declared backing width.
                if let Some(TypeDecl::Enum(decl)) = self.schema.get(type_name) {
                    WirePattern::Scalar { width: decl.size }
                } else {
                    WirePattern::Nested {
                        class: ts_type.clone(),
                    }
                }
            }
            AttributeKind::Unknown => {
                return Err(CodegenError::unclassifiable(
                    &attribute.name,
                    "unknown attribute kind",
                ));
            }
        };

        let counts_for = find_size_provider(self.schema, &self.decl.layout, &attribute.name)?
            .map(|consumer| consumer.name.clone());

        Ok(FieldPlan {
            attribute,
            ts_type,
            pattern,
            counts_for,
        })
    }

    /// Resolves the load-time access name of a size/count provider.
    ///
    /// After splicing, every reachable provider is a field of the flattened
    /// layout and is addressed by its own local name.
    fn provider_access(
        &self,
        attribute: &Attribute,
        flattened: &[&'a Attribute],
        reference: &str,
    ) -> Result<String, CodegenError> {
        if flattened.iter().any(|a| a.name == reference) {
            return Ok(reference.to_string());
        }
        Err(CodegenError::unresolved(&attribute.name, reference))
    }

    fn emit_fields(&self, output: &mut String, plans: &[FieldPlan<'_>]) {
        for plan in plans {
            let comment = comments_from_attribute(plan.attribute);
            if let WirePattern::Constant { value } = &plan.pattern {
                output.push_str(&format!("    /** {comment} */\n"));
                output.push_str(&format!(
                    "    public static readonly {}: number = {value};\n\n",
                    enum_constant_name(&plan.attribute.name)
                ));
            } else if plan.is_stored() {
                output.push_str(&format!("    /** {comment} */\n"));
                output.push_str(&format!(
                    "    public readonly {}: {};\n\n",
                    plan.attribute.name, plan.ts_type
                ));
            }
        }
    }

    fn emit_constructor(&self, output: &mut String, plans: &[FieldPlan<'_>]) {
        let stored: Vec<&FieldPlan<'_>> = plans.iter().filter(|p| p.is_stored()).collect();

        output.push_str("    /**\n");
        output.push_str("     * Constructor.\n");
        for plan in &stored {
            output.push_str(&format!(
                "     * @param {} {}\n",
                plan.attribute.name,
                comments_from_attribute(plan.attribute)
            ));
        }
        output.push_str("     */\n");

        let args = stored
            .iter()
            .map(|plan| format!("{}: {}", plan.attribute.name, plan.ts_type))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("    constructor({args}) {{\n"));
        for plan in &stored {
            output.push_str(&format!(
                "        this.{0} = {0};\n",
                plan.attribute.name
            ));
        }
        output.push_str("    }\n\n");
    }

    fn emit_load_from_binary(
        &self,
        output: &mut String,
        class_name: &str,
        plans: &[FieldPlan<'_>],
    ) {
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
        output.push_str("        let byteArray = payload;\n");

        for plan in plans {
            let name = &plan.attribute.name;
            match &plan.pattern {
                WirePattern::Constant { .. } => {}
                WirePattern::Scalar { width } => {
                    let read = scalar_read_call(
                        *width,
                        &format!("GeneratorUtils.getBytes(byteArray, {width})"),
                    );
                    output.push_str(&format!("        const {name} = {read};\n"));
                    output.push_str(&format!("        byteArray = byteArray.slice({width});\n"));
                }
                WirePattern::FixedBuffer { size } => {
                    output.push_str(&format!(
                        "        const {name} = GeneratorUtils.getBytes(byteArray, {size});\n"
                    ));
                    output.push_str(&format!("        byteArray = byteArray.slice({size});\n"));
                }
                WirePattern::SizedBuffer { provider } => {
                    output.push_str(&format!(
                        "        const {name} = GeneratorUtils.getBytes(byteArray, {provider});\n"
                    ));
                    output.push_str(&format!(
                        "        byteArray = byteArray.slice({provider});\n"
                    ));
                }
                WirePattern::CountedArray { count, element } => {
                    output.push_str(&format!("        const {name}: {element}[] = [];\n"));
                    output.push_str(&format!(
                        "        for (let i = 0; i < {count}; i++) {{\n"
                    ));
                    output.push_str(&format!(
                        "            const item = {element}.loadFromBinary(byteArray);\n"
                    ));
                    output.push_str(&format!("            {name}.push(item);\n"));
                    output
                        .push_str("            byteArray = byteArray.slice(item.getSize());\n");
                    output.push_str("        }\n");
                }
                WirePattern::Nested { class } => {
                    output.push_str(&format!(
                        "        const {name} = {class}.loadFromBinary(byteArray);\n"
                    ));
                    output.push_str(&format!(
                        "        byteArray = byteArray.slice({name}.getSize());\n"
                    ));
                }
            }
        }

        let args = plans
            .iter()
            .filter(|plan| plan.is_stored())
            .map(|plan| plan.attribute.name.clone())
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("        return new {class_name}({args});\n"));
        output.push_str("    }\n\n");
    }

    fn emit_get_size(&self, output: &mut String, plans: &[FieldPlan<'_>]) {
        output.push_str("    /**\n");
        output.push_str("     * Gets the size of the object.\n");
        output.push_str("     * @returns Size in bytes.\n");
        output.push_str("     */\n");
        output.push_str("    public getSize(): number {\n");
        output.push_str("        let size = 0;\n");

        for plan in plans {
            let name = &plan.attribute.name;
            match &plan.pattern {
                WirePattern::Constant { .. } => {}
                WirePattern::Scalar { width } => {
                    output.push_str(&format!("        size += {width};\n"));
                }
                WirePattern::FixedBuffer { size } => {
                    output.push_str(&format!("        size += {size};\n"));
                }
                WirePattern::SizedBuffer { .. } => {
                    output.push_str(&format!("        size += this.{name}.length;\n"));
                }
                WirePattern::CountedArray { .. } => {
                    output.push_str(&format!(
                        "        this.{name}.forEach((item) => {{ size += item.getSize(); }});\n"
                    ));
                }
                WirePattern::Nested { .. } => {
                    output.push_str(&format!("        size += this.{name}.getSize();\n"));
                }
            }
        }

        output.push_str("        return size;\n");
        output.push_str("    }\n\n");
    }

    fn emit_serialize(&self, output: &mut String, plans: &[FieldPlan<'_>]) {
        output.push_str("    /**\n");
        output.push_str("     * Serializes the object to bytes.\n");
        output.push_str("     * @returns Serialized bytes.\n");
        output.push_str("     */\n");
        output.push_str("    public serialize(): Uint8Array {\n");
        output.push_str("        let newArray = new Uint8Array(0);\n");

        for plan in plans {
            let name = &plan.attribute.name;
            match &plan.pattern {
                WirePattern::Constant { .. } => {}
                WirePattern::Scalar { width } => {
                    // Size providers are not stored; their value is the
                    // current length of the field they count.
                    let value = match &plan.counts_for {
                        Some(target) => format!("this.{target}.length"),
                        None => format!("this.{name}"),
                    };
                    let write = scalar_write_call(*width, &value);
                    output.push_str(&format!("        const {name}Bytes = {write};\n"));
                    output.push_str(&format!(
                        "        newArray = GeneratorUtils.concatTypedArrays(newArray, {name}Bytes);\n"
                    ));
                }
                WirePattern::FixedBuffer { .. } | WirePattern::SizedBuffer { .. } => {
                    output.push_str(&format!(
                        "        newArray = GeneratorUtils.concatTypedArrays(newArray, this.{name});\n"
                    ));
                }
                WirePattern::CountedArray { .. } => {
                    output.push_str(&format!("        this.{name}.forEach((item) => {{\n"));
                    output.push_str(
                        "            newArray = GeneratorUtils.concatTypedArrays(newArray, item.serialize());\n",
                    );
                    output.push_str("        });\n");
                }
                WirePattern::Nested { .. } => {
                    output.push_str(&format!(
                        "        const {name}Bytes = this.{name}.serialize();\n"
                    ));
                    output.push_str(&format!(
                        "        newArray = GeneratorUtils.concatTypedArrays(newArray, {name}Bytes);\n"
                    ));
                }
            }
        }

        output.push_str("        return newArray;\n");
        output.push_str("    }\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirebuf_schema::load_schema;

    fn struct_decl<'a>(schema: &'a Schema, name: &str) -> &'a StructDecl {
        match schema.get(name).expect("missing declaration") {
            TypeDecl::Struct(decl) => decl,
            other => panic!("not a struct declaration: {other:?}"),
        }
    }

    #[test]
    fn test_simple_scalar_fields() {
        let schema = load_schema(
            r#"{"Header": {"type": "struct", "layout": [
                {"name": "version", "type": "byte", "size": 2},
                {"name": "amount", "type": "byte", "size": 8}
            ]}}"#,
        )
        .expect("Failed to load");

        let generator = ClassGenerator::new(&schema, struct_decl(&schema, "Header"));
        assert_eq!(generator.generated_name(), "HeaderBuilder");

        let output = generator.generate().expect("generate");
        assert!(output.contains("export class HeaderBuilder"));
        assert!(output.contains("public readonly version: number;"));
        assert!(output.contains("public readonly amount: number[];"));
        assert!(output.contains("GeneratorUtils.uintToBuffer(this.version, 2)"));
        assert!(output.contains("GeneratorUtils.uint64ToBuffer(this.amount)"));
        assert!(output.contains("byteArray = byteArray.slice(2);"));
    }

    #[test]
    fn test_fixed_buffer_field() {
        let schema = load_schema(
            r#"{"T": {"type": "struct", "layout": [
                {"name": "signature", "type": "byte", "size": 64}
            ]}}"#,
        )
        .expect("Failed to load");

        let output = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect("generate");
        assert!(output.contains("public readonly signature: Uint8Array;"));
        assert!(output.contains("GeneratorUtils.getBytes(byteArray, 64)"));
        assert!(output.contains("size += 64;"));
        assert!(output.contains("concatTypedArrays(newArray, this.signature)"));
    }

    #[test]
    fn test_sized_buffer_with_provider() {
        let schema = load_schema(
            r#"{"T": {"type": "struct", "layout": [
                {"name": "messageSize", "type": "byte", "size": 2},
                {"name": "message", "type": "byte", "size": "messageSize"}
            ]}}"#,
        )
        .expect("Failed to load");

        let output = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect("generate");

        // The provider is computed from the message length, not stored.
        assert!(!output.contains("public readonly messageSize"));
        assert!(output.contains("GeneratorUtils.uintToBuffer(this.message.length, 2)"));
        assert!(output.contains("GeneratorUtils.getBytes(byteArray, messageSize)"));
        assert!(output.contains("size += this.message.length;"));
        assert!(output.contains("constructor(message: Uint8Array)"));
    }

    #[test]
    fn test_counted_array_with_provider() {
        let schema = load_schema(
            r#"{
                "Mosaic": {"type": "struct", "layout": [
                    {"name": "amount", "type": "byte", "size": 8}
                ]},
                "T": {"type": "struct", "layout": [
                    {"name": "mosaicsCount", "type": "byte", "size": 1},
                    {"name": "mosaics", "type": "Mosaic", "size": "mosaicsCount"}
                ]}
            }"#,
        )
        .expect("Failed to load");

        let output = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect("generate");
        assert!(output.contains("public readonly mosaics: MosaicBuilder[];"));
        assert!(output.contains("for (let i = 0; i < mosaicsCount; i++)"));
        assert!(output.contains("MosaicBuilder.loadFromBinary(byteArray)"));
        assert!(output.contains("GeneratorUtils.uintToBuffer(this.mosaics.length, 1)"));
        assert!(output.contains("this.mosaics.forEach((item) => { size += item.getSize(); });"));
    }

    #[test]
    fn test_nested_custom_field() {
        let schema = load_schema(
            r#"{
                "Amount": {"type": "byte", "size": 8},
                "T": {"type": "struct", "layout": [
                    {"name": "fee", "type": "Amount"}
                ]}
            }"#,
        )
        .expect("Failed to load");

        let output = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect("generate");
        assert!(output.contains("public readonly fee: AmountDto;"));
        assert!(output.contains("AmountDto.loadFromBinary(byteArray)"));
        assert!(output.contains("size += this.fee.getSize();"));
        assert!(output.contains("const feeBytes = this.fee.serialize();"));
    }

    #[test]
    fn test_enum_reference_reads_backing_value() {
        let schema = load_schema(
            r#"{
                "AliasAction": {"type": "enum", "size": 1, "values": [
                    {"name": "Link", "value": 1}
                ]},
                "T": {"type": "struct", "layout": [
                    {"name": "action", "type": "AliasAction", "size": 1}
                ]}
            }"#,
        )
        .expect("Failed to load");

        let output = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect("generate");
        assert!(output.contains("public readonly action: AliasActionDto;"));
        assert!(output.contains("GeneratorUtils.uintToBuffer(this.action, 1)"));
    }

    #[test]
    fn test_wide_enum_reference_reads_as_word_pair() {
        // An 8-byte enum value exceeds the target enum's backing scalar, so
        // the field type must match the uint64 read/write calls end to end.
        let schema = load_schema(
            r#"{
                "WideAction": {"type": "enum", "size": 8, "values": [
                    {"name": "Link", "value": 1}
                ]},
                "T": {"type": "struct", "layout": [
                    {"name": "action", "type": "WideAction"}
                ]}
            }"#,
        )
        .expect("Failed to load");

        let output = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect("generate");
        assert!(output.contains("public readonly action: number[];"));
        assert!(!output.contains("WideActionDto"));
        assert!(output.contains(
            "GeneratorUtils.bufferToUint64(GeneratorUtils.getBytes(byteArray, 8))"
        ));
        assert!(output.contains("GeneratorUtils.uint64ToBuffer(this.action)"));
    }

    #[test]
    fn test_flags_field() {
        let schema = load_schema(
            r#"{
                "MosaicFlags": {"type": "enum", "size": 1, "values": [
                    {"name": "None", "value": 0}
                ]},
                "T": {"type": "struct", "layout": [
                    {"name": "flags", "type": "MosaicFlags"}
                ]}
            }"#,
        )
        .expect("Failed to load");

        let output = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect("generate");
        assert!(output.contains("public readonly flags: MosaicFlagsDto;"));
        assert!(output.contains("GeneratorUtils.uintToBuffer(this.flags, 1)"));
    }

    #[test]
    fn test_const_attribute_has_no_wire_presence() {
        let schema = load_schema(
            r#"{"T": {"type": "struct", "layout": [
                {"name": "version", "type": "byte", "size": 1, "disposition": "const", "value": 2},
                {"name": "amount", "type": "byte", "size": 8}
            ]}}"#,
        )
        .expect("Failed to load");

        let output = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect("generate");
        assert!(output.contains("public static readonly VERSION: number = 2;"));
        assert!(output.contains("constructor(amount: number[])"));
        // Consts never reach getSize or serialize.
        assert!(!output.contains("size += 1;"));
        assert!(!output.contains("this.version"));
    }

    #[test]
    fn test_inline_attribute_splices_nested_layout() {
        let schema = load_schema(
            r#"{
                "Body": {"type": "struct", "layout": [
                    {"name": "amount", "type": "byte", "size": 8}
                ]},
                "T": {"type": "struct", "layout": [
                    {"name": "body", "type": "Body", "disposition": "inline"}
                ]}
            }"#,
        )
        .expect("Failed to load");

        let output = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect("generate");
        // The nested layout's fields appear in place of the inline marker.
        assert!(output.contains("public readonly amount: number[];"));
        assert!(output.contains("constructor(amount: number[])"));
        assert!(!output.contains("BodyBuilder"));
    }

    #[test]
    fn test_provider_through_inline_layout() {
        let schema = load_schema(
            r#"{
                "Header": {"type": "struct", "layout": [
                    {"name": "payloadSize", "type": "byte", "size": 2}
                ]},
                "T": {"type": "struct", "layout": [
                    {"name": "header", "type": "Header", "disposition": "inline"},
                    {"name": "payload", "type": "byte", "size": "payloadSize"}
                ]}
            }"#,
        )
        .expect("Failed to load");

        let output = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect("generate");
        // The spliced header field supplies the payload length and is
        // computed back from it on write.
        assert!(output.contains("GeneratorUtils.getBytes(byteArray, payloadSize)"));
        assert!(output.contains("GeneratorUtils.uintToBuffer(this.payload.length, 2)"));
        assert!(!output.contains("public readonly payloadSize"));
    }

    #[test]
    fn test_cyclic_inline_fails() {
        let schema = load_schema(
            r#"{
                "A": {"type": "struct", "layout": [
                    {"name": "b", "type": "B", "disposition": "inline"}
                ]},
                "B": {"type": "struct", "layout": [
                    {"name": "a", "type": "A", "disposition": "inline"}
                ]}
            }"#,
        )
        .expect("Failed to load");

        let err = ClassGenerator::new(&schema, struct_decl(&schema, "A"))
            .generate()
            .expect_err("should fail");
        assert!(matches!(err, CodegenError::CyclicInline { .. }));
    }

    #[test]
    fn test_unresolved_size_reference_fails() {
        let schema = load_schema(
            r#"{"T": {"type": "struct", "layout": [
                {"name": "payload", "type": "byte", "size": "missingSize"}
            ]}}"#,
        )
        .expect("Failed to load");

        let err = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect_err("should fail");
        assert!(matches!(err, CodegenError::UnresolvedSizeReference { .. }));
    }

    #[test]
    fn test_unsupported_string_suffix_fails() {
        let schema = load_schema(
            r#"{"T": {"type": "struct", "layout": [
                {"name": "payload", "type": "byte", "size": "payloadLength"}
            ]}}"#,
        )
        .expect("Failed to load");

        let err = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .generate()
            .expect_err("should fail");
        assert!(matches!(err, CodegenError::UnclassifiableAttribute { .. }));
    }

    #[test]
    fn test_required_imports_collects_referenced_classes() {
        let schema = load_schema(
            r#"{
                "Amount": {"type": "byte", "size": 8},
                "Mosaic": {"type": "struct", "layout": [
                    {"name": "amount", "type": "Amount"}
                ]},
                "T": {"type": "struct", "layout": [
                    {"name": "mosaicsCount", "type": "byte", "size": 1},
                    {"name": "mosaics", "type": "Mosaic", "size": "mosaicsCount"},
                    {"name": "fee", "type": "Amount"}
                ]}
            }"#,
        )
        .expect("Failed to load");

        let imports = ClassGenerator::new(&schema, struct_decl(&schema, "T"))
            .required_imports()
            .expect("imports");
        assert!(imports[0].contains("GeneratorUtils"));
        assert!(
            imports
                .iter()
                .any(|line| line == "import { AmountDto } from './AmountDto';")
        );
        assert!(
            imports
                .iter()
                .any(|line| line == "import { MosaicBuilder } from './MosaicBuilder';")
        );
    }
}
