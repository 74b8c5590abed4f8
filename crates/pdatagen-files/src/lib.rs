//! File sinks for generated pdata sources.
//!
//! Provides the two destinations a generation run can write into:
//!
//! - **`MemoryFiles`**: an in-memory store used by tests and dry runs
//! - **`DiskFiles`**: writes under an explicit output root with atomic
//!   replace and fixed permissions
//!
//! Both implement [`pdatagen_core::traits::FileSink`] and accept only
//! validated relative paths ([`FilePath`]).
//!
//! # Examples
//!
//! ```
//! use pdatagen_core::traits::FileSink;
//! use pdatagen_files::MemoryFiles;
//! use std::path::Path;
//!
//! let mut files = MemoryFiles::new();
//! files.write_file(Path::new("internal/generated_wrapper_resource.go"), "package internal\n")?;
//!
//! assert!(files.exists("internal/generated_wrapper_resource.go"));
//! assert_eq!(files.write_order()[0].as_str(), "internal/generated_wrapper_resource.go");
//! # Ok::<(), pdatagen_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod disk;
pub mod memory;
pub mod types;

pub use disk::DiskFiles;
pub use memory::MemoryFiles;
pub use types::{FileEntry, FilePath};
