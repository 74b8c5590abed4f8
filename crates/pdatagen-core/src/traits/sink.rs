//! File sink trait.
//!
//! This module defines the `FileSink` trait, the single seam between the
//! generation passes and the storage that receives their output.

use crate::Result;
use std::path::Path;

/// Receives whole generated files.
///
/// Paths are relative to the sink's own root; the generator never sees
/// absolute locations. Each call replaces any previous content at the
/// path, there are no partial or append writes.
///
/// # Examples
///
/// ```
/// use pdatagen_core::traits::FileSink;
/// use pdatagen_core::{Error, Result};
/// use std::path::Path;
///
/// struct ReadOnly;
///
/// impl FileSink for ReadOnly {
///     fn write_file(&mut self, path: &Path, _contents: &str) -> Result<()> {
///         Err(Error::WriteFailed {
///             path: path.display().to_string(),
///             source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
///         })
///     }
/// }
///
/// let err = ReadOnly.write_file(Path::new("a.go"), "").unwrap_err();
/// assert!(err.is_write_error());
/// ```
pub trait FileSink {
    /// Writes `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `Error::WriteFailed` if the underlying storage rejects the
    /// write, or `Error::InvalidPath` if `path` is absolute or escapes the
    /// sink root.
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<()>;
}

impl<S: FileSink + ?Sized> FileSink for &mut S {
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        (**self).write_file(path, contents)
    }
}
