//! Core types, traits, and errors for the pdata source generator.
//!
//! This crate provides the foundational types shared by the other
//! crates in the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong identifier types (`PackageName`, `StructName`)
//! - The generator error type with contextual information
//! - The `FileSink` trait that receives generated files
//! - Run configuration (`GeneratorConfig`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod traits;

pub use config::{DEFAULT_FILE_MODE, DEFAULT_INTERNAL_DIR, DEFAULT_OUTPUT_ROOT, GeneratorConfig};
pub use error::{Error, Result};
pub use types::{INTERNAL_PACKAGE, PackageName, SHARED_PACKAGE, StructName};
