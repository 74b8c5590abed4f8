//! Configuration for a generation run.
//!
//! The output root is an explicit value rather than the process working
//! directory, so a run can target a temporary directory or an in-memory
//! store.
//!
//! # Examples
//!
//! ```
//! use pdatagen_core::GeneratorConfig;
//! use std::path::PathBuf;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.output_root, PathBuf::from("pdata"));
//! assert_eq!(config.file_mode, 0o644);
//!
//! let custom = GeneratorConfig {
//!     output_root: PathBuf::from("/tmp/pdata"),
//!     ..Default::default()
//! };
//! assert_eq!(custom.internal_dir, PathBuf::from("internal"));
//! ```

use std::path::{Path, PathBuf};

/// Default output root, relative to the repository checkout.
pub const DEFAULT_OUTPUT_ROOT: &str = "pdata";

/// Default directory for internal wrapper files, relative to the output root.
pub const DEFAULT_INTERNAL_DIR: &str = "internal";

/// Permissions applied to every generated file on Unix.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Settings that control where and how generated files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root directory all generated paths are joined onto.
    ///
    /// Default: `pdata`
    pub output_root: PathBuf,

    /// Directory for internal wrapper files, relative to `output_root`.
    ///
    /// Default: `internal`
    pub internal_dir: PathBuf,

    /// Unix permission bits for generated files.
    ///
    /// Default: `0o644`
    pub file_mode: u32,
}

impl GeneratorConfig {
    /// Creates a configuration writing under `output_root` with default
    /// settings otherwise.
    #[must_use]
    pub fn with_output_root(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            ..Self::default()
        }
    }

    /// Returns the internal wrapper directory relative to the output root.
    #[must_use]
    pub fn internal_dir(&self) -> &Path {
        &self.internal_dir
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            internal_dir: PathBuf::from(DEFAULT_INTERNAL_DIR),
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}
