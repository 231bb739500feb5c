//! Target language registry.

/// Supported target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// TypeScript classes operating on `Uint8Array`.
    #[default]
    Typescript,
}

impl Target {
    /// All registered targets.
    pub const ALL: &'static [Self] = &[Self::Typescript];

    /// Parses a target from its registry name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "typescript" => Some(Self::Typescript),
            _ => None,
        }
    }

    /// Returns the registry name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Typescript => "typescript",
        }
    }

    /// Returns the canonical source file extension, dot included.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Typescript => ".ts",
        }
    }
}
