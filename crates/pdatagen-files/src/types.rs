//! Core types for generated file storage.
//!
//! Generated files are addressed by paths relative to an output root.
//! `FilePath` validates that shape once so sinks never join an absolute
//! or escaping path onto their root.
//!
//! # Examples
//!
//! ```
//! use pdatagen_files::{FileEntry, FilePath};
//!
//! let path = FilePath::new("ptrace/generated_span.go").unwrap();
//! let file = FileEntry::new("package ptrace\n");
//!
//! assert_eq!(path.as_str(), "ptrace/generated_span.go");
//! assert_eq!(file.content(), "package ptrace\n");
//! ```

use pdatagen_core::{Error, Result};
use std::fmt;
use std::path::{Component, Path};

/// A validated path relative to an output root.
///
/// `FilePath` uses forward slashes on all platforms:
/// - Must be relative (no leading '/', no drive prefix)
/// - Free of parent directory references ('..')
/// - Free of empty and '.' components
///
/// # Examples
///
/// ```
/// use pdatagen_files::FilePath;
///
/// let path = FilePath::new("internal/generated_wrapper_resource.go").unwrap();
/// assert_eq!(path.file_name(), "generated_wrapper_resource.go");
/// ```
///
/// ```
/// use pdatagen_files::FilePath;
///
/// // Invalid paths are rejected
/// assert!(FilePath::new("/absolute/path.go").is_err());
/// assert!(FilePath::new("ptrace/../escape.go").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilePath(String);

impl FilePath {
    /// Creates a new `FilePath` from a path-like type.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPath` if the path is empty, not valid UTF-8,
    /// absolute, or contains '..' or '.' components.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_files::FilePath;
    ///
    /// let path = FilePath::new("pmetric/generated_exemplarslice_test.go")?;
    /// assert_eq!(path.as_str(), "pmetric/generated_exemplarslice_test.go");
    /// # Ok::<(), pdatagen_core::Error>(())
    /// ```
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = || Error::InvalidPath {
            path: path.display().to_string(),
        };

        if path.as_os_str().is_empty() {
            return Err(invalid());
        }

        let mut parts = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_str().ok_or_else(invalid)?),
                Component::CurDir
                | Component::ParentDir
                | Component::RootDir
                | Component::Prefix(_) => return Err(invalid()),
            }
        }

        Ok(Self(parts.join("/")))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path as a `Path` reference.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Returns the last component of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_files::FilePath;
    ///
    /// let path = FilePath::new("plog/generated_logrecord.go")?;
    /// assert_eq!(path.file_name(), "generated_logrecord.go");
    /// # Ok::<(), pdatagen_core::Error>(())
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// A generated file held in memory.
///
/// # Examples
///
/// ```
/// use pdatagen_files::FileEntry;
///
/// let file = FileEntry::new("package plog");
/// assert_eq!(file.size(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    content: String,
}

impl FileEntry {
    /// Creates a new entry with the given content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the file content as a string slice.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the size of the file content in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path_new_valid() {
        let path = FilePath::new("ptrace/generated_span.go").unwrap();
        assert_eq!(path.as_str(), "ptrace/generated_span.go");
    }

    #[test]
    fn test_file_path_absolute_fails() {
        let result = FilePath::new("/ptrace/generated_span.go");
        assert!(result.unwrap_err().is_invalid_path());
    }

    #[test]
    fn test_file_path_parent_dir_fails() {
        let result = FilePath::new("ptrace/../../escape.go");
        assert!(result.unwrap_err().is_invalid_path());
    }

    #[test]
    fn test_file_path_cur_dir_fails() {
        assert!(FilePath::new("./ptrace/generated_span.go").is_err());
    }

    #[test]
    fn test_file_path_empty_fails() {
        assert!(FilePath::new("").is_err());
    }

    #[test]
    fn test_file_path_dots_in_name_allowed() {
        let path = FilePath::new("pcommon/generated_v1..go").unwrap();
        assert_eq!(path.file_name(), "generated_v1..go");
    }

    #[test]
    fn test_file_path_display() {
        let path = FilePath::new("internal/generated_wrapper_resource.go").unwrap();
        assert_eq!(
            format!("{path}"),
            "internal/generated_wrapper_resource.go"
        );
    }

    #[test]
    fn test_file_entry() {
        let file = FileEntry::new("content");
        assert_eq!(file.content(), "content");
        assert_eq!(file.size(), 7);
        assert_eq!(FileEntry::new("").size(), 0);
    }
}
