//! Generation orchestrator.
//!
//! Runs the three passes over a package. Each pass walks the package's
//! structs in order, assembles one complete file per struct (header,
//! import block, body) and hands it to a [`FileSink`]. The first failing
//! write ends the pass; files written before it stay in place.
//!
//! # Examples
//!
//! ```
//! use pdatagen_codegen::{Generator, Registry};
//! use pdatagen_core::GeneratorConfig;
//! use pdatagen_files::MemoryFiles;
//!
//! let generator = Generator::new(&GeneratorConfig::default())?;
//! let registry = Registry::all_packages()?;
//! let mut files = MemoryFiles::new();
//!
//! for package in registry.packages() {
//!     generator.generate_files(package, &mut files)?;
//!     generator.generate_test_files(package, &mut files)?;
//!     generator.generate_internal_files(package, &mut files)?;
//! }
//!
//! assert!(files.exists("ptrace/generated_spanslice.go"));
//! assert!(files.exists("internal/generated_wrapper_resource.go"));
//! # Ok::<(), pdatagen_core::Error>(())
//! ```

use crate::header::{generate_header, generate_imports};
use crate::model::{GenerationScope, Package, StructDescriptor};
use crate::registry::Registry;
use crate::template_engine::TemplateEngine;
use pdatagen_core::traits::FileSink;
use pdatagen_core::{GeneratorConfig, INTERNAL_PACKAGE, Result};
use std::path::{Path, PathBuf};

/// Generator for pdata Go sources.
///
/// Holds the template engine and the internal wrapper directory. Output
/// paths are relative; the sink decides where they land.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct Generator<'a> {
    engine: TemplateEngine<'a>,
    internal_dir: PathBuf,
}

impl Generator<'_> {
    /// Creates a generator using the internal directory from `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if a built-in template fails to parse.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            internal_dir: config.internal_dir().to_path_buf(),
        })
    }

    /// Writes `<path>/generated_<name>.go` for every struct of `package`.
    ///
    /// # Errors
    ///
    /// Returns the first write or template error; remaining structs are
    /// skipped.
    pub fn generate_files(&self, package: &Package, sink: &mut dyn FileSink) -> Result<()> {
        tracing::info!("Generating implementation files for package {}", package.name());
        let scope = GenerationScope::with_policy(package.name(), package.used_by_other_data_types());

        for descriptor in package.structs() {
            let mut buf = String::new();
            generate_header(&mut buf, package.name().as_str());
            generate_imports(&mut buf, package.imports());
            buf.push_str("\n\n");
            descriptor.generate_struct(&self.engine, &scope, &mut buf)?;
            buf.push('\n');

            let path = struct_file_path(package, descriptor, "");
            write(sink, &path, &buf)?;
        }

        Ok(())
    }

    /// Writes `<path>/generated_<name>_test.go` for every struct of
    /// `package`.
    ///
    /// Test-value helpers are appended unless the package is shared, in
    /// which case the internal pass emits them instead.
    ///
    /// # Errors
    ///
    /// Returns the first write or template error; remaining structs are
    /// skipped.
    pub fn generate_test_files(&self, package: &Package, sink: &mut dyn FileSink) -> Result<()> {
        tracing::info!("Generating test files for package {}", package.name());
        let scope = GenerationScope::with_policy(package.name(), package.used_by_other_data_types());

        for descriptor in package.structs() {
            let mut buf = String::new();
            generate_header(&mut buf, package.name().as_str());
            generate_imports(&mut buf, package.test_imports());
            buf.push_str("\n\n");
            descriptor.generate_tests(&self.engine, &scope, &mut buf)?;
            if !package.used_by_other_data_types() {
                buf.push_str("\n\n");
                descriptor.generate_test_value_helpers(&self.engine, &scope, &mut buf)?;
            }

            let path = struct_file_path(package, descriptor, "_test");
            write(sink, &path, &buf)?;
        }

        Ok(())
    }

    /// Writes `<internal_dir>/generated_wrapper_<name>.go` for every struct
    /// of a shared package. Does nothing for other packages.
    ///
    /// # Errors
    ///
    /// Returns the first write or template error; remaining structs are
    /// skipped.
    pub fn generate_internal_files(&self, package: &Package, sink: &mut dyn FileSink) -> Result<()> {
        if !package.used_by_other_data_types() {
            tracing::debug!("Package {} is not shared, no internal files", package.name());
            return Ok(());
        }

        tracing::info!("Generating internal files for package {}", package.name());
        let scope = GenerationScope::with_policy(package.name(), true);

        for descriptor in package.structs() {
            let mut buf = String::new();
            generate_header(&mut buf, INTERNAL_PACKAGE);
            generate_imports(&mut buf, package.imports());
            descriptor.generate_internal(&self.engine, &mut buf)?;
            buf.push('\n');

            buf.push_str("\n\n");
            descriptor.generate_test_value_helpers(&self.engine, &scope, &mut buf)?;
            buf.push('\n');

            let path = self
                .internal_dir
                .join(format!("generated_wrapper_{}.go", descriptor.name().file_stem()));
            write(sink, &path, &buf)?;
        }

        Ok(())
    }

    /// Runs all three passes over `package`.
    ///
    /// # Errors
    ///
    /// Returns the first error of any pass.
    pub fn generate_package(&self, package: &Package, sink: &mut dyn FileSink) -> Result<()> {
        self.generate_files(package, sink)?;
        self.generate_test_files(package, sink)?;
        self.generate_internal_files(package, sink)
    }

    /// Runs all three passes over every registry package, in order.
    ///
    /// # Errors
    ///
    /// Returns the first error; later packages are not generated.
    pub fn generate_registry(&self, registry: &Registry, sink: &mut dyn FileSink) -> Result<()> {
        for package in registry.packages() {
            self.generate_package(package, sink)?;
        }
        Ok(())
    }
}

fn struct_file_path(package: &Package, descriptor: &StructDescriptor, suffix: &str) -> PathBuf {
    Path::new(package.path()).join(format!(
        "generated_{}{suffix}.go",
        descriptor.name().file_stem()
    ))
}

fn write(sink: &mut dyn FileSink, path: &Path, contents: &str) -> Result<()> {
    sink.write_file(path, contents)?;
    tracing::debug!("Generated {}", path.display());
    Ok(())
}
