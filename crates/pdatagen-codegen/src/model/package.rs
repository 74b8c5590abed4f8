//! Package descriptors.
//!
//! A package is a named, path-addressed group of struct descriptors with
//! the import lists its generated files open with.

use super::descriptor::StructDescriptor;
use pdatagen_core::PackageName;
use std::fmt;

/// One line of a Go import block.
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::ImportLine;
///
/// let imports = [
///     ImportLine::import("\"sort\""),
///     ImportLine::Separator,
///     ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal\""),
/// ];
/// assert!(imports[1].is_separator());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportLine {
    /// An import spec, emitted tab-indented (quotes and alias included).
    Import(String),
    /// A blank line grouping imports.
    Separator,
}

impl ImportLine {
    /// Creates an import entry.
    #[must_use]
    pub fn import(spec: impl Into<String>) -> Self {
        Self::Import(spec.into())
    }

    /// Returns `true` for a grouping blank line.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

impl fmt::Display for ImportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Import(spec) => f.write_str(spec),
            Self::Separator => Ok(()),
        }
    }
}

/// A package of generated structs.
///
/// Construction performs no validation; [`crate::Registry::new`] checks a
/// whole set of packages. The shared-package flag is computed once from
/// the name when the package is built.
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::{ImportLine, Package, SliceStruct, StructDescriptor};
///
/// let package = Package::builder("demo", "demo")
///     .import(ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal/data/protogen/demo/v1\""))
///     .test_import(ImportLine::import("\"testing\""))
///     .structure(StructDescriptor::SliceOfValues(SliceStruct::with_element(
///         "Widget",
///         "WidgetPart",
///         "otlpdemo.WidgetPart",
///     )))
///     .build();
///
/// assert_eq!(package.name().as_str(), "demo");
/// assert!(!package.used_by_other_data_types());
/// assert_eq!(package.structs().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: PackageName,
    path: String,
    imports: Vec<ImportLine>,
    test_imports: Vec<ImportLine>,
    structs: Vec<StructDescriptor>,
    used_by_other_data_types: bool,
}

impl Package {
    /// Starts building a package named `name` generated into `path`.
    #[must_use]
    pub fn builder(name: impl Into<PackageName>, path: impl Into<String>) -> PackageBuilder {
        PackageBuilder {
            name: name.into(),
            path: path.into(),
            imports: Vec::new(),
            test_imports: Vec::new(),
            structs: Vec::new(),
        }
    }

    /// Returns the package name.
    #[must_use]
    pub const fn name(&self) -> &PackageName {
        &self.name
    }

    /// Returns the output directory relative to the output root.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the import lines of implementation and internal files.
    #[must_use]
    pub fn imports(&self) -> &[ImportLine] {
        &self.imports
    }

    /// Returns the import lines of test files.
    #[must_use]
    pub fn test_imports(&self) -> &[ImportLine] {
        &self.test_imports
    }

    /// Returns the struct descriptors in emission order.
    #[must_use]
    pub fn structs(&self) -> &[StructDescriptor] {
        &self.structs
    }

    /// Returns `true` if other generated packages consume this package's
    /// structs through the internal wrapper.
    #[must_use]
    pub const fn used_by_other_data_types(&self) -> bool {
        self.used_by_other_data_types
    }
}

/// Builder for [`Package`].
#[derive(Debug, Clone)]
pub struct PackageBuilder {
    name: PackageName,
    path: String,
    imports: Vec<ImportLine>,
    test_imports: Vec<ImportLine>,
    structs: Vec<StructDescriptor>,
}

impl PackageBuilder {
    /// Appends an implementation import line.
    #[must_use]
    pub fn import(mut self, line: ImportLine) -> Self {
        self.imports.push(line);
        self
    }

    /// Appends several implementation import lines.
    #[must_use]
    pub fn imports(mut self, lines: impl IntoIterator<Item = ImportLine>) -> Self {
        self.imports.extend(lines);
        self
    }

    /// Appends a test import line.
    #[must_use]
    pub fn test_import(mut self, line: ImportLine) -> Self {
        self.test_imports.push(line);
        self
    }

    /// Appends several test import lines.
    #[must_use]
    pub fn test_imports(mut self, lines: impl IntoIterator<Item = ImportLine>) -> Self {
        self.test_imports.extend(lines);
        self
    }

    /// Appends a struct descriptor.
    #[must_use]
    pub fn structure(mut self, descriptor: StructDescriptor) -> Self {
        self.structs.push(descriptor);
        self
    }

    /// Appends several struct descriptors.
    #[must_use]
    pub fn structures(mut self, descriptors: impl IntoIterator<Item = StructDescriptor>) -> Self {
        self.structs.extend(descriptors);
        self
    }

    /// Builds the package, fixing its shared-package flag.
    #[must_use]
    pub fn build(self) -> Package {
        Package {
            used_by_other_data_types: self.name.is_used_by_other_data_types(),
            name: self.name,
            path: self.path,
            imports: self.imports,
            test_imports: self.test_imports,
            structs: self.structs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::descriptor::MessageStruct;

    #[test]
    fn test_policy_flag_fixed_at_build() {
        let pcommon = Package::builder("pcommon", "pcommon").build();
        let plog = Package::builder("plog", "plog").build();

        assert!(pcommon.used_by_other_data_types());
        assert!(!plog.used_by_other_data_types());
    }

    #[test]
    fn test_policy_follows_name_not_path() {
        let package = Package::builder("pcommon", "demo").build();
        assert!(package.used_by_other_data_types());
        assert_eq!(package.path(), "demo");
    }

    #[test]
    fn test_builder_preserves_order() {
        let package = Package::builder("ptrace", "ptrace")
            .imports([
                ImportLine::import("\"sort\""),
                ImportLine::Separator,
                ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal\""),
            ])
            .test_import(ImportLine::import("\"testing\""))
            .structure(StructDescriptor::MessagePtr(MessageStruct::new("Span", "otlptrace.Span")))
            .structure(StructDescriptor::MessagePtr(MessageStruct::new("Status", "otlptrace.Status")))
            .build();

        assert_eq!(package.imports().len(), 3);
        assert!(package.imports()[1].is_separator());
        assert_eq!(package.test_imports().len(), 1);
        let names: Vec<_> = package.structs().iter().map(|s| s.name().as_str()).collect();
        assert_eq!(names, vec!["Span", "Status"]);
    }

    #[test]
    fn test_import_line_display() {
        assert_eq!(ImportLine::import("\"testing\"").to_string(), "\"testing\"");
        assert_eq!(ImportLine::Separator.to_string(), "");
    }
}
