//! Schema type declarations.
//!
//! This module contains the data structures representing wire-format schema
//! elements: raw byte leaves, enumerations and structs with ordered layouts.

use std::collections::HashMap;

/// Complete schema definition.
///
/// An ordered mapping from type name to type declaration. Declaration order
/// is significant: it defines the emission order for non-enum entries and is
/// preserved exactly as loaded.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Type declarations in declaration order.
    entries: Vec<TypeDecl>,
    /// Name lookup map (built as declarations are added).
    index: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds a type declaration to the schema.
    pub fn add(&mut self, decl: TypeDecl) {
        let name = decl.name().to_string();
        let idx = self.entries.len();
        self.entries.push(decl);
        self.index.insert(name, idx);
    }

    /// Looks up a declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    /// Returns true if a declaration with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the declarations in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[TypeDecl] {
        &self.entries
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the schema has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Type declaration variants.
#[derive(Debug, Clone)]
pub enum TypeDecl {
    /// Raw scalar/buffer leaf carrying its own size.
    Byte(ByteDecl),
    /// Named set of integer-backed values.
    Enum(EnumDecl),
    /// Ordered list of attributes (the struct's layout).
    Struct(StructDecl),
}

impl TypeDecl {
    /// Returns the name of the declaration.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Byte(b) => &b.name,
            Self::Enum(e) => &e.name,
            Self::Struct(s) => &s.name,
        }
    }

    /// Returns the declaration comments, if any.
    #[must_use]
    pub fn comments(&self) -> Option<&str> {
        match self {
            Self::Byte(b) => b.comments.as_deref(),
            Self::Enum(e) => e.comments.as_deref(),
            Self::Struct(s) => s.comments.as_deref(),
        }
    }

    /// Returns true if this is a byte declaration.
    #[must_use]
    pub const fn is_byte(&self) -> bool {
        matches!(self, Self::Byte(_))
    }

    /// Returns true if this is an enum declaration.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns true if this is a struct declaration.
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Returns the declared size of the type, if it carries one.
    ///
    /// Byte declarations return their own size, enum declarations their
    /// encoding width. Structs have no declared size.
    #[must_use]
    pub fn declared_size(&self) -> Option<SizeSpec> {
        match self {
            Self::Byte(b) => b.size.clone(),
            Self::Enum(e) => Some(SizeSpec::Literal(e.size)),
            Self::Struct(_) => None,
        }
    }
}

/// Raw byte leaf declaration.
#[derive(Debug, Clone)]
pub struct ByteDecl {
    /// Type name.
    pub name: String,
    /// Size in bytes (absent means 1).
    pub size: Option<SizeSpec>,
    /// Description.
    pub comments: Option<String>,
}

impl ByteDecl {
    /// Creates a new byte declaration.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            size: None,
            comments: None,
        }
    }
}

/// Enum declaration.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    /// Type name.
    pub name: String,
    /// Encoding width in bytes.
    pub size: u64,
    /// Enumeration values in declaration order.
    pub values: Vec<EnumValueDecl>,
    /// Description.
    pub comments: Option<String>,
}

impl EnumDecl {
    /// Creates a new enum declaration.
    #[must_use]
    pub fn new(name: String, size: u64) -> Self {
        Self {
            name,
            size,
            values: Vec::new(),
            comments: None,
        }
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&EnumValueDecl> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// One value of an enum declaration.
#[derive(Debug, Clone)]
pub struct EnumValueDecl {
    /// Value name.
    pub name: String,
    /// Backing integer value.
    pub value: u64,
    /// Description.
    pub comments: Option<String>,
}

impl EnumValueDecl {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: String, value: u64) -> Self {
        Self {
            name,
            value,
            comments: None,
        }
    }
}

/// Struct declaration.
#[derive(Debug, Clone)]
pub struct StructDecl {
    /// Type name.
    pub name: String,
    /// Attributes in layout order.
    pub layout: Vec<Attribute>,
    /// Description.
    pub comments: Option<String>,
}

impl StructDecl {
    /// Creates a new struct declaration.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            layout: Vec::new(),
            comments: None,
        }
    }

    /// Looks up an attribute by name among the direct layout entries.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.layout.iter().find(|a| a.name == name)
    }
}

/// Attribute of a struct layout.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute type.
    pub attr_type: AttrType,
    /// Size: integer literal, or the name of the sibling attribute whose
    /// runtime value supplies the length/count. Absent means "use the
    /// referenced type's own size".
    pub size: Option<SizeSpec>,
    /// Disposition, if any.
    pub disposition: Option<Disposition>,
    /// Fixed value for `const` disposition attributes.
    pub value: Option<u64>,
    /// Description.
    pub comments: Option<String>,
}

impl Attribute {
    /// Creates a new attribute.
    #[must_use]
    pub fn new(name: String, attr_type: AttrType) -> Self {
        Self {
            name,
            attr_type,
            size: None,
            disposition: None,
            value: None,
            comments: None,
        }
    }

    /// Returns true if this attribute's layout is spliced into its parent.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.disposition == Some(Disposition::Inline)
    }

    /// Returns true if this attribute has a fixed value and no wire presence.
    #[must_use]
    pub fn is_const(&self) -> bool {
        self.disposition == Some(Disposition::Const)
    }
}

/// Attribute type: a built-in kind keyword or the name of a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrType {
    /// Raw byte field.
    Byte,
    /// Literal `enum` kind keyword.
    Enum,
    /// Literal `struct` kind keyword.
    Struct,
    /// Reference to a declared (or externally-defined) type.
    Named(String),
}

impl AttrType {
    /// Parses an attribute type from its schema string form.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "byte" => Self::Byte,
            "enum" => Self::Enum,
            "struct" => Self::Struct,
            _ => Self::Named(s.to_string()),
        }
    }

    /// Returns the schema string form.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Byte => "byte",
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::Named(n) => n,
        }
    }

    /// Returns true for the `byte` kind keyword.
    #[must_use]
    pub const fn is_byte(&self) -> bool {
        matches!(self, Self::Byte)
    }

    /// Returns the referenced type name for named types.
    #[must_use]
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Named(n) => Some(n),
            _ => None,
        }
    }
}

/// Attribute disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The attribute's own layout is spliced into the parent's attribute
    /// list for size-reference lookup purposes.
    Inline,
    /// Fixed value, no wire presence.
    Const,
}

impl Disposition {
    /// Parses a disposition from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inline" => Some(Self::Inline),
            "const" => Some(Self::Const),
            _ => None,
        }
    }
}

/// Size specification: a literal byte count or a sibling attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeSpec {
    /// Fixed size in bytes.
    Literal(u64),
    /// Name of the attribute whose runtime value supplies the size.
    Reference(String),
}

impl SizeSpec {
    /// Returns the literal size, if this is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<u64> {
        match self {
            Self::Literal(n) => Some(*n),
            Self::Reference(_) => None,
        }
    }

    /// Returns the referenced attribute name, if this is a reference.
    #[must_use]
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Reference(name) => Some(name),
        }
    }

    /// Returns true if this size is given by another attribute's value.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}
