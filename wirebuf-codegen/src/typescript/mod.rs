//! TypeScript emitters.
//!
//! One generator per declaration shape: byte aliases become `Dto` wrapper
//! classes, enums become plain TypeScript enums, and structs become
//! `Builder` classes with load/size/serialize methods. A static helper
//! class carries the shared byte-twiddling routines every artifact imports.

pub mod classes;
pub mod define_types;
pub mod enums;
pub mod helpers;

pub use classes::ClassGenerator;
pub use define_types::DefineTypeGenerator;
pub use enums::EnumGenerator;
pub use helpers::{HELPER_CLASSES, StaticClassGenerator};
