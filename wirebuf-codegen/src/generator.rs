//! Generation driver.
//!
//! Walks the schema in declaration order in a single pass: byte aliases and
//! struct builders are emitted as they appear, enums are registered into a
//! per-run registry and emitted after the last declaration, and the static
//! helper classes close the run. The artifact stream is lazy and
//! deterministic; re-running over the same schema yields byte-identical
//! artifacts in the same order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wirebuf_schema::{EnumDecl, Schema, TypeDecl};

use crate::error::CodegenError;
use crate::target::Target;
use crate::typescript::{
    ClassGenerator, DefineTypeGenerator, EnumGenerator, HELPER_CLASSES, StaticClassGenerator,
};

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name, extension included.
    pub file_name: String,
    /// Complete file contents.
    pub contents: String,
}

/// Options controlling a generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Target language.
    pub target: Target,
    /// Header text prefixed to every artifact.
    pub copyright: Option<String>,
}

/// Returns true when a struct declaration gets its own artifact.
///
/// A struct referenced somewhere in the schema exclusively through
/// `disposition: inline` exists only as a reusable layout fragment and
/// is not materialized.
#[must_use]
pub fn should_generate_class(schema: &Schema, name: &str) -> bool {
    let mut referenced = false;
    for entry in schema.entries() {
        let TypeDecl::Struct(decl) = entry else {
            continue;
        };
        for attribute in &decl.layout {
            if attribute.attr_type.as_named() == Some(name) {
                referenced = true;
                if !attribute.is_inline() {
                    return true;
                }
            }
        }
    }
    !referenced
}

/// Schema-driven artifact generator.
pub struct Generator<'a> {
    schema: &'a Schema,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a generator over a loaded schema.
    #[must_use]
    pub fn new(schema: &'a Schema, options: GeneratorOptions) -> Self {
        Self { schema, options }
    }

    /// Returns the lazy artifact stream.
    #[must_use]
    pub fn artifacts(&self) -> Artifacts<'a, '_> {
        Artifacts {
            generator: self,
            stage: Stage::Declarations,
            index: 0,
            enums: Vec::new(),
            failed: false,
        }
    }

    /// Generates all artifacts eagerly.
    ///
    /// # Errors
    /// Returns the first generation failure.
    pub fn generate(&self) -> Result<Vec<Artifact>, CodegenError> {
        self.artifacts().collect()
    }

    /// Assembles an artifact from its name, import lines and body.
    fn render(&self, name: &str, imports: &[String], body: &str) -> Artifact {
        let mut contents = String::new();
        if let Some(copyright) = &self.options.copyright {
            contents.push_str(copyright);
            if !copyright.ends_with('\n') {
                contents.push('\n');
            }
            contents.push('\n');
        }
        if !imports.is_empty() {
            for import in imports {
                contents.push_str(import);
                contents.push('\n');
            }
            contents.push('\n');
        }
        contents.push_str(body);
        debug!(artifact = name, "generated artifact");
        Artifact {
            file_name: format!("{name}{}", self.options.target.extension()),
            contents,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Declarations,
    Enums,
    Helpers,
    Done,
}

/// Lazy artifact stream over a schema.
///
/// Yields `None` after the first error.
pub struct Artifacts<'a, 'g> {
    generator: &'g Generator<'a>,
    stage: Stage,
    index: usize,
    enums: Vec<&'a EnumDecl>,
    failed: bool,
}

impl Artifacts<'_, '_> {
    fn next_declaration(&mut self) -> Option<Result<Artifact, CodegenError>> {
        let schema = self.generator.schema;
        while let Some(entry) = schema.entries().get(self.index) {
            self.index += 1;
            match entry {
                TypeDecl::Byte(decl) => {
                    let emitter = DefineTypeGenerator::new(schema, decl);
                    let artifact = emitter.generate().map(|body| {
                        self.generator.render(
                            &emitter.generated_name(),
                            &emitter.required_imports(),
                            &body,
                        )
                    });
                    return Some(artifact);
                }
                TypeDecl::Enum(decl) => {
                    self.enums.push(decl);
                }
                TypeDecl::Struct(decl) => {
                    if !should_generate_class(schema, &decl.name) {
                        debug!(name = %decl.name, "skipping embedding-only struct");
                        continue;
                    }
                    let emitter = ClassGenerator::new(schema, decl);
                    let artifact = emitter.required_imports().and_then(|imports| {
                        let body = emitter.generate()?;
                        Ok(self
                            .generator
                            .render(&emitter.generated_name(), &imports, &body))
                    });
                    return Some(artifact);
                }
            }
        }
        self.stage = Stage::Enums;
        self.index = 0;
        None
    }

    fn next_enum(&mut self) -> Option<Artifact> {
        let decl = *self.enums.get(self.index)?;
        self.index += 1;
        let emitter = EnumGenerator::new(self.generator.schema, decl);
        Some(self.generator.render(
            &emitter.generated_name(),
            &emitter.required_imports(),
            &emitter.generate(),
        ))
    }

    fn next_helper(&mut self) -> Option<Artifact> {
        let name = *HELPER_CLASSES.get(self.index)?;
        self.index += 1;
        let emitter = StaticClassGenerator::new(name);
        Some(
            self.generator
                .render(emitter.generated_name(), &[], &emitter.generate()),
        )
    }
}

impl Iterator for Artifacts<'_, '_> {
    type Item = Result<Artifact, CodegenError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            match self.stage {
                Stage::Declarations => {
                    if let Some(result) = self.next_declaration() {
                        self.failed = result.is_err();
                        return Some(result);
                    }
                }
                Stage::Enums => {
                    if let Some(artifact) = self.next_enum() {
                        return Some(Ok(artifact));
                    }
                    self.stage = Stage::Helpers;
                    self.index = 0;
                }
                Stage::Helpers => {
                    if let Some(artifact) = self.next_helper() {
                        return Some(Ok(artifact));
                    }
                    self.stage = Stage::Done;
                }
                Stage::Done => return None,
            }
        }
    }
}

/// Generates all artifacts and writes them under a directory.
///
/// Creates the directory if needed and returns the written paths in
/// generation order.
///
/// # Errors
/// Returns generation failures and I/O failures.
pub fn write_artifacts(
    schema: &Schema,
    options: GeneratorOptions,
    dir: &Path,
) -> Result<Vec<PathBuf>, CodegenError> {
    fs::create_dir_all(dir)?;
    let generator = Generator::new(schema, options);
    let mut written = Vec::new();
    for artifact in generator.artifacts() {
        let artifact = artifact?;
        let path = dir.join(&artifact.file_name);
        fs::write(&path, &artifact.contents)?;
        info!(path = %path.display(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}
