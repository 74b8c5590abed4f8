//! Core traits for the generator.
//!
//! # Module Structure
//!
//! - `sink` - Destination for generated files
//!
//! # Examples
//!
//! ```
//! use pdatagen_core::traits::FileSink;
//! use pdatagen_core::Result;
//! use std::collections::BTreeMap;
//! use std::path::{Path, PathBuf};
//!
//! struct Recorder {
//!     files: BTreeMap<PathBuf, String>,
//! }
//!
//! impl FileSink for Recorder {
//!     fn write_file(&mut self, path: &Path, contents: &str) -> Result<()> {
//!         self.files.insert(path.to_path_buf(), contents.to_string());
//!         Ok(())
//!     }
//! }
//!
//! let mut sink = Recorder { files: BTreeMap::new() };
//! sink.write_file(Path::new("demo/generated_widget.go"), "package demo\n").unwrap();
//! assert_eq!(sink.files.len(), 1);
//! ```

mod sink;

pub use sink::FileSink;
