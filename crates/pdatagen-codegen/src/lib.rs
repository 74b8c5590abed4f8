//! Go source generation for the pdata data model.
//!
//! Turns declarative package and struct descriptors into three families
//! of Go files per struct: the public implementation, its unit tests, and,
//! for the shared package, an internal wrapper that exposes the wire
//! representation to sibling packages.
//!
//! # Architecture
//!
//! - [`model`]: packages, the four struct shapes and their fields
//! - [`template_engine`]: Handlebars with the built-in Go templates
//! - [`header`]: license banner, package clause and import block
//! - [`generator`]: the three file passes over a package
//! - [`registry`]: the validated, compiled-in package list
//!
//! # Examples
//!
//! ```
//! use pdatagen_codegen::{Generator, Registry};
//! use pdatagen_core::GeneratorConfig;
//! use pdatagen_files::MemoryFiles;
//!
//! let generator = Generator::new(&GeneratorConfig::default())?;
//! let mut files = MemoryFiles::new();
//! generator.generate_registry(&Registry::all_packages()?, &mut files)?;
//!
//! let span = files.read_file("ptrace/generated_span.go")?;
//! assert!(span.contains("package ptrace"));
//! # Ok::<(), pdatagen_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod header;
pub mod model;
pub mod registry;
pub mod template_engine;

pub use generator::Generator;
pub use model::{
    Field, GenerationScope, ImportLine, MessageStruct, NestedField, Package, PackageBuilder,
    PrimitiveField, SliceStruct, StructDescriptor, StructVariant, TypeRef,
};
pub use registry::Registry;
