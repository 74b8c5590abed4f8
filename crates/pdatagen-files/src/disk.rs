//! On-disk file sink.
//!
//! Writes generated files under an explicit output root. Each file is
//! written to a temporary sibling and renamed into place, so a reader
//! never observes a half-written file.

use crate::types::FilePath;
use pdatagen_core::traits::FileSink;
use pdatagen_core::{Error, GeneratorConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes generated files below a root directory.
///
/// Parent directories are created on demand. Permissions are set to the
/// configured mode after every write (Unix only).
///
/// # Examples
///
/// ```no_run
/// use pdatagen_core::GeneratorConfig;
/// use pdatagen_core::traits::FileSink;
/// use pdatagen_files::DiskFiles;
/// use std::path::Path;
///
/// let mut sink = DiskFiles::new(&GeneratorConfig::with_output_root("/tmp/pdata"));
/// sink.write_file(Path::new("ptrace/generated_span.go"), "package ptrace\n")?;
/// # Ok::<(), pdatagen_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DiskFiles {
    root: PathBuf,
    file_mode: u32,
}

impl DiskFiles {
    /// Creates a sink rooted at the configured output root.
    #[must_use]
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            root: config.output_root.clone(),
            file_mode: config.file_mode,
        }
    }

    /// Returns the output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSink for DiskFiles {
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        let relative = FilePath::new(path)?;
        let disk_path = self.root.join(relative.as_path());
        write_file_atomic(&disk_path, contents, self.file_mode)
    }
}

/// Writes file content to disk atomically using temp file + rename.
///
/// # Errors
///
/// Returns `Error::WriteFailed` naming the path that failed.
fn write_file_atomic(disk_path: &Path, contents: &str, file_mode: u32) -> Result<()> {
    let write_failed = |path: &Path, source: std::io::Error| Error::WriteFailed {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = disk_path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_failed(parent, e))?;
    }

    let mut temp_name = disk_path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, contents).map_err(|e| write_failed(&temp_path, e))?;

    let replaced = set_file_mode(&temp_path, file_mode)
        .map_err(|e| write_failed(&temp_path, e))
        .and_then(|()| fs::rename(&temp_path, disk_path).map_err(|e| write_failed(disk_path, e)));

    if replaced.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    replaced
}

#[cfg(unix)]
fn set_file_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
const fn set_file_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sink_in(temp_dir: &TempDir) -> DiskFiles {
        DiskFiles::new(&GeneratorConfig::with_output_root(temp_dir.path()))
    }

    #[test]
    fn test_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = sink_in(&temp_dir);

        sink.write_file(Path::new("generated_span.go"), "package ptrace\n")
            .unwrap();

        let content = fs::read_to_string(temp_dir.path().join("generated_span.go")).unwrap();
        assert_eq!(content, "package ptrace\n");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = sink_in(&temp_dir);

        sink.write_file(
            Path::new("ptrace/ptraceotlp/generated_exportpartialsuccess.go"),
            "package ptraceotlp\n",
        )
        .unwrap();

        assert!(temp_dir.path().join("ptrace/ptraceotlp").is_dir());
        assert!(
            temp_dir
                .path()
                .join("ptrace/ptraceotlp/generated_exportpartialsuccess.go")
                .exists()
        );
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = sink_in(&temp_dir);
        let path = Path::new("generated_resource.go");

        sink.write_file(path, "original content").unwrap();
        sink.write_file(path, "updated").unwrap();

        let content = fs::read_to_string(temp_dir.path().join(path)).unwrap();
        assert_eq!(content, "updated");
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = sink_in(&temp_dir);

        sink.write_file(Path::new("generated_span_test.go"), "package ptrace")
            .unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_rejects_escaping_path() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = sink_in(&temp_dir);

        let result = sink.write_file(Path::new("../etc/passwd"), "malicious");
        assert!(result.unwrap_err().is_invalid_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_applies_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let mut sink = sink_in(&temp_dir);

        sink.write_file(Path::new("generated_exemplar.go"), "package pmetric")
            .unwrap();

        let metadata = fs::metadata(temp_dir.path().join("generated_exemplar.go")).unwrap();
        assert_eq!(metadata.permissions().mode() & 0o777, 0o644);
    }

    #[test]
    fn test_write_failure_names_path() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where a directory is expected makes create_dir_all fail.
        fs::write(temp_dir.path().join("plog"), "not a directory").unwrap();
        let mut sink = sink_in(&temp_dir);

        let err = sink
            .write_file(Path::new("plog/generated_logrecord.go"), "package plog")
            .unwrap_err();

        assert!(err.is_write_error());
        assert!(format!("{err}").contains("plog"));
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the rename fail.
        fs::create_dir_all(temp_dir.path().join("generated_span.go/blocker")).unwrap();
        let mut sink = sink_in(&temp_dir);

        let err = sink
            .write_file(Path::new("generated_span.go"), "package ptrace")
            .unwrap_err();

        assert!(err.is_write_error());
        assert!(!temp_dir.path().join("generated_span.go.tmp").exists());
    }

    #[test]
    fn test_root() {
        let temp_dir = TempDir::new().unwrap();
        let sink = sink_in(&temp_dir);
        assert_eq!(sink.root(), temp_dir.path());
    }
}
