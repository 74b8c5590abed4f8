//! Strong identifier types for the generator.
//!
//! Package and struct names end up in emitted source (package clauses,
//! type names) and in output file names, so they are kept apart from
//! ordinary strings.
//!
//! # Examples
//!
//! ```
//! use pdatagen_core::{PackageName, StructName};
//!
//! let package = PackageName::new("ptrace");
//! let name = StructName::new("ResourceSpansSlice");
//!
//! assert!(!package.is_used_by_other_data_types());
//! assert_eq!(name.file_stem(), "resourcespansslice");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the one package whose types are consumed by every other
/// generated package through the internal wrapper.
pub const SHARED_PACKAGE: &str = "pcommon";

/// Literal package clause stamped on internal wrapper files.
pub const INTERNAL_PACKAGE: &str = "internal";

/// Generated package name (newtype over String).
///
/// Used as the emitted package clause and as the key for the
/// "used by other data types" policy.
///
/// # Examples
///
/// ```
/// use pdatagen_core::PackageName;
///
/// let name = PackageName::new("pmetric");
/// assert_eq!(name.as_str(), "pmetric");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageName(String);

impl PackageName {
    /// Creates a new package name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the package name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if structs of this package are used by other
    /// generated packages, so their raw fields must be reachable through
    /// the internal wrapper.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_core::PackageName;
    ///
    /// assert!(PackageName::new("pcommon").is_used_by_other_data_types());
    /// assert!(!PackageName::new("plog").is_used_by_other_data_types());
    /// ```
    #[must_use]
    pub fn is_used_by_other_data_types(&self) -> bool {
        self.0 == SHARED_PACKAGE
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PackageName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PackageName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Generated struct name (newtype over String).
///
/// The name is emitted verbatim as the type name and lower-cased to
/// build output file names.
///
/// # Examples
///
/// ```
/// use pdatagen_core::StructName;
///
/// let name = StructName::new("InstrumentationScope");
/// assert_eq!(name.as_str(), "InstrumentationScope");
/// assert_eq!(name.file_stem(), "instrumentationscope");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StructName(String);

impl StructName {
    /// Creates a new struct name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the struct name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lower-cased name used in output file names.
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for StructName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StructName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StructName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_policy() {
        assert!(PackageName::new(SHARED_PACKAGE).is_used_by_other_data_types());
        assert!(!PackageName::new("ptrace").is_used_by_other_data_types());
        assert!(!PackageName::new("PCOMMON").is_used_by_other_data_types());
    }

    #[test]
    fn test_package_name_display() {
        let name = PackageName::from("plogotlp");
        assert_eq!(format!("{name}"), "plogotlp");
    }

    #[test]
    fn test_struct_name_file_stem() {
        assert_eq!(StructName::new("Widget").file_stem(), "widget");
        assert_eq!(
            StructName::new("ExportPartialSuccess").file_stem(),
            "exportpartialsuccess"
        );
    }

    #[test]
    fn test_struct_name_equality() {
        let a = StructName::from("Span");
        let b = StructName::new(String::from("Span"));
        assert_eq!(a, b);
    }
}
