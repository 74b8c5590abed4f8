//! The registry of packages to generate.
//!
//! [`Registry::all_packages`] returns the compiled-in pdata packages in
//! generation order. [`Registry::new`] validates any set of packages and
//! rejects declarations that would overwrite each other's files or
//! reference structs the generated code cannot reach.
//!
//! # Examples
//!
//! ```
//! use pdatagen_codegen::Registry;
//!
//! let registry = Registry::all_packages()?;
//! let names: Vec<_> = registry.packages().iter().map(|p| p.name().as_str()).collect();
//! assert_eq!(
//!     names,
//!     vec!["pcommon", "plog", "plogotlp", "pmetric", "pmetricotlp", "ptrace", "ptraceotlp"]
//! );
//! # Ok::<(), pdatagen_core::Error>(())
//! ```

mod otlp;
mod pcommon;
mod plog;
mod pmetric;
mod ptrace;

use crate::model::{Field, ImportLine, Package, PrimitiveField, StructVariant, TypeRef};
use pdatagen_core::{Error, PackageName, Result, StructName};
use std::collections::{HashMap, HashSet};

/// Import path prefix of the generated protobuf wire types.
const PROTOGEN: &str = "go.opentelemetry.io/collector/pdata/internal/data/protogen";

/// A validated, ordered set of packages.
#[derive(Debug, Clone)]
pub struct Registry {
    packages: Vec<Package>,
}

impl Registry {
    /// Validates `packages` and keeps them in the given order.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationError` if:
    /// - two packages share a name or a path
    /// - a package declares two structs whose lower-cased names collide
    /// - two shared packages declare structs with the same wrapper file name
    /// - a field references an undeclared struct, a struct of the wrong
    ///   kind, or a struct in another package that is not shared
    /// - a slice element is not a message declared in the slice's package
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_codegen::{Package, Registry};
    ///
    /// let result = Registry::new(vec![
    ///     Package::builder("plog", "plog").build(),
    ///     Package::builder("plog", "other").build(),
    /// ]);
    /// assert!(result.unwrap_err().is_validation_error());
    /// ```
    pub fn new(packages: Vec<Package>) -> Result<Self> {
        validate(&packages)?;
        Ok(Self { packages })
    }

    /// Returns the compiled-in pdata packages.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationError` if the built-in declarations are
    /// inconsistent.
    pub fn all_packages() -> Result<Self> {
        Self::new(vec![
            pcommon::package(),
            plog::package(),
            otlp::plogotlp(),
            pmetric::package(),
            otlp::pmetricotlp(),
            ptrace::package(),
            otlp::ptraceotlp(),
        ])
    }

    /// Returns the packages in generation order.
    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Looks up a package by name.
    #[must_use]
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name().as_str() == name)
    }

    /// Returns the number of packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` if the registry holds no packages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Error {
    Error::ValidationError {
        field: field.into(),
        reason: reason.into(),
    }
}

fn validate(packages: &[Package]) -> Result<()> {
    let mut names = HashSet::new();
    let mut paths = HashSet::new();
    for package in packages {
        if !names.insert(package.name()) {
            return Err(invalid(
                format!("package {}", package.name()),
                "duplicate package name",
            ));
        }
        if !paths.insert(package.path()) {
            return Err(invalid(
                format!("package {}", package.name()),
                format!("path '{}' is already used by another package", package.path()),
            ));
        }
    }

    let mut declared: HashMap<(&PackageName, &StructName), StructVariant> = HashMap::new();
    let mut wrapper_stems = HashSet::new();
    for package in packages {
        let mut stems = HashSet::new();
        for descriptor in package.structs() {
            let stem = descriptor.name().file_stem();
            let owner = format!("{}.{}", package.name(), descriptor.name());
            if !stems.insert(stem.clone()) {
                return Err(invalid(owner, format!("file name 'generated_{stem}' is declared twice")));
            }
            if package.used_by_other_data_types() && !wrapper_stems.insert(stem.clone()) {
                return Err(invalid(
                    owner,
                    format!("internal wrapper 'generated_wrapper_{stem}' is declared twice"),
                ));
            }
            declared.insert((package.name(), descriptor.name()), descriptor.variant());
        }
    }

    for package in packages {
        for descriptor in package.structs() {
            let owner = format!("{}.{}", package.name(), descriptor.name());

            if let Some(element) = descriptor.element_name() {
                match declared.get(&(package.name(), element)) {
                    Some(variant) if !variant.is_slice() => {}
                    Some(_) => {
                        return Err(invalid(owner, format!("element {element} is a slice")));
                    }
                    None => {
                        return Err(invalid(
                            owner,
                            format!("element {element} is not declared in package {}", package.name()),
                        ));
                    }
                }
            }

            for field in descriptor.fields() {
                if let Some(target) = field.target() {
                    let field_owner = format!("{owner}.{}", field.name());
                    check_reference(&declared, package, field, target, &field_owner)?;
                }
            }
        }
    }

    Ok(())
}

fn check_reference(
    declared: &HashMap<(&PackageName, &StructName), StructVariant>,
    owner: &Package,
    field: &Field,
    target: &TypeRef,
    field_owner: &str,
) -> Result<()> {
    let Some(variant) = declared.get(&(target.package(), target.name())) else {
        return Err(invalid(
            field_owner,
            format!("references undeclared struct {}.{}", target.package(), target.name()),
        ));
    };

    let expects_slice = matches!(field, Field::Slice(_));
    if variant.is_slice() != expects_slice {
        let expected = if expects_slice { "a slice" } else { "a message" };
        return Err(invalid(
            field_owner,
            format!("{}.{} is not {expected}", target.package(), target.name()),
        ));
    }

    if target.package() != owner.name() && !target.package().is_used_by_other_data_types() {
        return Err(invalid(
            field_owner,
            format!(
                "package {} is not shared and cannot be referenced from {}",
                target.package(),
                owner.name()
            ),
        ));
    }

    Ok(())
}

fn testing_imports(rest: impl IntoIterator<Item = ImportLine>) -> Vec<ImportLine> {
    let mut imports = vec![
        ImportLine::import("\"testing\""),
        ImportLine::Separator,
        ImportLine::import("\"github.com/stretchr/testify/assert\""),
        ImportLine::Separator,
    ];
    imports.extend(rest);
    imports
}

fn sort_imports(rest: impl IntoIterator<Item = ImportLine>) -> Vec<ImportLine> {
    let mut imports = vec![ImportLine::import("\"sort\""), ImportLine::Separator];
    imports.extend(rest);
    imports
}

fn resource() -> Field {
    Field::message("Resource", TypeRef::new("pcommon", "Resource"))
}

fn instrumentation_scope() -> Field {
    Field::message("Scope", TypeRef::new("pcommon", "InstrumentationScope"))
}

fn schema_url() -> PrimitiveField {
    PrimitiveField::new("SchemaUrl", "string")
        .values("\"\"", "\"https://opentelemetry.io/schemas/1.5.0\"")
}

fn dropped_attributes_count() -> PrimitiveField {
    PrimitiveField::new("DroppedAttributesCount", "uint32").values("0", "17")
}

fn timestamp(name: &str, orig_field: &str) -> PrimitiveField {
    PrimitiveField::new(name, "pcommon.Timestamp")
        .orig_field(orig_field)
        .raw_type("uint64")
        .values("0", "1234567890")
}
