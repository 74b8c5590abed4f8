//! Error types for the pdata source generator.
//!
//! A generation run has one runtime failure mode, a rejected file write.
//! The remaining variants cover paths that would leave the output root,
//! registries that fail validation, and built-in templates that fail to
//! register or render.
//!
//! # Examples
//!
//! ```
//! use pdatagen_core::{Error, Result};
//!
//! fn check_package_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ValidationError {
//!             field: "package.name".to_string(),
//!             reason: "must not be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_package_name("").unwrap_err();
//! assert!(err.is_validation_error());
//! ```

use thiserror::Error;

/// Main error type for the generator.
///
/// All library crates in the workspace return this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing a generated file failed.
    ///
    /// The underlying storage rejected the write (permissions, disk full,
    /// missing parent that could not be created). Files written earlier in
    /// the same pass are left in place.
    #[error("Failed to write generated file '{path}'")]
    WriteFailed {
        /// Path of the file that could not be written
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Output path is malformed.
    ///
    /// Generated paths are always relative to the output root and never
    /// contain parent directory components.
    #[error("Invalid output path: {path}")]
    InvalidPath {
        /// The rejected path
        path: String,
    },

    /// No generated file exists at a well-formed path.
    #[error("Generated file not found: {path}")]
    FileNotFound {
        /// The path that was looked up
        path: String,
    },

    /// Registry or package declaration failed validation.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The declaration that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// A built-in template failed to register or render.
    #[error("Template '{template}' failed: {message}")]
    TemplateError {
        /// Name of the template
        template: String,
        /// Description of the failure
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is a file write error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_core::Error;
    ///
    /// let err = Error::WriteFailed {
    ///     path: "ptrace/generated_span.go".to_string(),
    ///     source: std::io::Error::other("disk full"),
    /// };
    /// assert!(err.is_write_error());
    /// ```
    #[must_use]
    pub const fn is_write_error(&self) -> bool {
        matches!(self, Self::WriteFailed { .. })
    }

    /// Returns `true` if this is an invalid path error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_core::Error;
    ///
    /// let err = Error::InvalidPath {
    ///     path: "../escape.go".to_string(),
    /// };
    /// assert!(err.is_invalid_path());
    /// ```
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Returns `true` if no file exists at the requested path.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "registry".to_string(),
    ///     reason: "duplicate package name 'ptrace'".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a template error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_core::Error;
    ///
    /// let err = Error::TemplateError {
    ///     template: "slice/struct".to_string(),
    ///     message: "missing variable".to_string(),
    /// };
    /// assert!(err.is_template_error());
    /// ```
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }
}

/// Result type alias for generator operations.
///
/// # Examples
///
/// ```
/// use pdatagen_core::{Error, Result};
///
/// fn struct_count(count: usize) -> Result<usize> {
///     if count == 0 {
///         return Err(Error::ValidationError {
///             field: "package.structs".to_string(),
///             reason: "package declares no structs".to_string(),
///         });
///     }
///     Ok(count)
/// }
///
/// assert!(struct_count(3).is_ok());
/// assert!(struct_count(0).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_write_error_detection() {
        let err = Error::WriteFailed {
            path: "pdata/ptrace/generated_span.go".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_write_error());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = Error::WriteFailed {
            path: "out.go".to_string(),
            source: std::io::Error::other("disk full"),
        };
        let source = err.source().unwrap();
        assert!(source.to_string().contains("disk full"));
    }

    #[test]
    fn test_write_error_display_names_path() {
        let err = Error::WriteFailed {
            path: "pdata/internal/generated_wrapper_resource.go".to_string(),
            source: std::io::Error::other("boom"),
        };
        let display = format!("{err}");
        assert!(display.contains("pdata/internal/generated_wrapper_resource.go"));
    }

    #[test]
    fn test_invalid_path_detection() {
        let err = Error::InvalidPath {
            path: "/etc/passwd".to_string(),
        };
        assert!(err.is_invalid_path());
        assert!(!err.is_write_error());
    }

    #[test]
    fn test_not_found_detection() {
        let err = Error::FileNotFound {
            path: "plog/generated_logrecord.go".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_invalid_path());
        assert!(format!("{err}").contains("plog/generated_logrecord.go"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = Error::ValidationError {
            field: "registry".to_string(),
            reason: "duplicate package name 'pcommon'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("Validation error in registry"));
        assert!(display.contains("pcommon"));
    }

    #[test]
    fn test_template_error_detection() {
        let err = Error::TemplateError {
            template: "message/struct".to_string(),
            message: "Variable not found".to_string(),
        };
        assert!(err.is_template_error());
        assert!(!err.is_invalid_path());
    }
}
