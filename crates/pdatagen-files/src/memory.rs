//! In-memory file store.
//!
//! Receives generated files without touching disk. Used by the test
//! suites and by dry runs of the generator.
//!
//! # Examples
//!
//! ```
//! use pdatagen_core::traits::FileSink;
//! use pdatagen_files::MemoryFiles;
//! use std::path::Path;
//!
//! let mut files = MemoryFiles::new();
//! files.write_file(Path::new("plog/generated_logrecord.go"), "package plog\n").unwrap();
//!
//! assert_eq!(files.read_file("plog/generated_logrecord.go").unwrap(), "package plog\n");
//! ```

use crate::types::{FileEntry, FilePath};
use pdatagen_core::traits::FileSink;
use pdatagen_core::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// An in-memory store of generated files keyed by relative path.
///
/// Writing to an existing path replaces its content, matching the
/// whole-file semantics of the disk sink.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`.
///
/// # Examples
///
/// ```
/// use pdatagen_files::MemoryFiles;
///
/// let mut files = MemoryFiles::new();
/// files.add_file("demo/generated_widget.go", "package demo").unwrap();
///
/// assert!(files.exists("demo/generated_widget.go"));
/// assert_eq!(files.file_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFiles {
    files: HashMap<FilePath, FileEntry>,
    order: Vec<FilePath>,
}

impl MemoryFiles {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Adds a file, replacing any existing content at the path.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPath` if the path is absolute or contains
    /// '..' components.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Result<()> {
        let file_path = FilePath::new(path)?;
        if self
            .files
            .insert(file_path.clone(), FileEntry::new(content))
            .is_none()
        {
            self.order.push(file_path);
        }
        Ok(())
    }

    /// Reads the content of a file.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPath` if the path is invalid and
    /// `Error::FileNotFound` if no file has been written at it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_files::MemoryFiles;
    ///
    /// let files = MemoryFiles::new();
    /// assert!(files.read_file("missing.go").is_err());
    /// ```
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<&str> {
        let file_path = FilePath::new(path)?;
        self.files
            .get(&file_path)
            .map(FileEntry::content)
            .ok_or_else(|| Error::FileNotFound {
                path: file_path.as_str().to_string(),
            })
    }

    /// Checks if a file exists at the given path.
    ///
    /// Returns `false` if the path is invalid.
    #[must_use]
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        FilePath::new(path)
            .ok()
            .is_some_and(|p| self.files.contains_key(&p))
    }

    /// Returns the total number of files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns all file paths in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_files::MemoryFiles;
    ///
    /// let mut files = MemoryFiles::new();
    /// files.add_file("b.go", "").unwrap();
    /// files.add_file("a.go", "").unwrap();
    ///
    /// let paths = files.all_paths();
    /// assert_eq!(paths[0].as_str(), "a.go");
    /// ```
    #[must_use]
    pub fn all_paths(&self) -> Vec<&FilePath> {
        let mut paths: Vec<_> = self.files.keys().collect();
        paths.sort();
        paths
    }

    /// Returns all file paths in the order they were first written.
    ///
    /// Rewriting a path keeps its original position.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_files::MemoryFiles;
    ///
    /// let mut files = MemoryFiles::new();
    /// files.add_file("pcommon/generated_resource.go", "").unwrap();
    /// files.add_file("internal/generated_wrapper_resource.go", "").unwrap();
    ///
    /// let paths = files.write_order();
    /// assert_eq!(paths[0].as_str(), "pcommon/generated_resource.go");
    /// ```
    #[must_use]
    pub fn write_order(&self) -> &[FilePath] {
        &self.order
    }
}

impl FileSink for MemoryFiles {
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.add_file(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_files_new() {
        let files = MemoryFiles::new();
        assert_eq!(files.file_count(), 0);
    }

    #[test]
    fn test_memory_files_default() {
        let files = MemoryFiles::default();
        assert_eq!(files.file_count(), 0);
    }

    #[test]
    fn test_add_and_read_file() {
        let mut files = MemoryFiles::new();
        files.add_file("pcommon/generated_resource.go", "package pcommon").unwrap();
        assert_eq!(
            files.read_file("pcommon/generated_resource.go").unwrap(),
            "package pcommon"
        );
    }

    #[test]
    fn test_add_file_invalid_path() {
        let mut files = MemoryFiles::new();
        let result = files.add_file("/abs/generated_resource.go", "content");
        assert!(result.unwrap_err().is_invalid_path());
        assert_eq!(files.file_count(), 0);
    }

    #[test]
    fn test_read_file_not_found() {
        let files = MemoryFiles::new();
        let err = files.read_file("missing.go").unwrap_err();
        assert!(err.is_not_found());
        assert!(!err.is_invalid_path());
    }

    #[test]
    fn test_read_file_invalid_path() {
        let files = MemoryFiles::new();
        assert!(files.read_file("../missing.go").unwrap_err().is_invalid_path());
    }

    #[test]
    fn test_write_file_replaces_content() {
        let mut files = MemoryFiles::new();
        files.write_file(Path::new("a.go"), "original").unwrap();
        files.write_file(Path::new("a.go"), "updated").unwrap();

        assert_eq!(files.read_file("a.go").unwrap(), "updated");
        assert_eq!(files.file_count(), 1);
    }

    #[test]
    fn test_exists() {
        let mut files = MemoryFiles::new();
        files.add_file("exists.go", "").unwrap();

        assert!(files.exists("exists.go"));
        assert!(!files.exists("missing.go"));
        assert!(!files.exists("../exists.go"));
    }

    #[test]
    fn test_all_paths_sorted() {
        let mut files = MemoryFiles::new();
        files.add_file("ptrace/generated_span.go", "").unwrap();
        files.add_file("internal/generated_wrapper_resource.go", "").unwrap();

        let paths = files.all_paths();
        assert_eq!(paths[0].as_str(), "internal/generated_wrapper_resource.go");
        assert_eq!(paths[1].as_str(), "ptrace/generated_span.go");
    }

    #[test]
    fn test_write_order_follows_writes() {
        let mut files = MemoryFiles::new();
        files.add_file("pcommon/generated_resource.go", "").unwrap();
        files.add_file("pcommon/generated_resource_test.go", "").unwrap();
        files.add_file("internal/generated_wrapper_resource.go", "").unwrap();
        files.add_file("pcommon/generated_resource.go", "rewritten").unwrap();

        let order: Vec<_> = files.write_order().iter().map(FilePath::as_str).collect();
        assert_eq!(
            order,
            vec![
                "pcommon/generated_resource.go",
                "pcommon/generated_resource_test.go",
                "internal/generated_wrapper_resource.go",
            ]
        );
    }

    #[test]
    fn test_memory_files_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<MemoryFiles>();
        assert_sync::<MemoryFiles>();
    }
}
