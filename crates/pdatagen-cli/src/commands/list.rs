//! List command implementation.
//!
//! Prints the built-in package registry: every package, its output path,
//! whether it is shared, and its structs in emission order.

use crate::formatters::format_output;
use crate::{ExitCode, OutputFormat};
use anyhow::{Context, Result};
use pdatagen_codegen::Registry;
use serde::Serialize;

/// One package of the registry listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    /// Go package name
    pub name: String,
    /// Output directory relative to the output root
    pub path: String,
    /// Whether internal wrapper files are generated for this package
    pub shared: bool,
    /// Structs in emission order
    pub structs: Vec<StructInfo>,
}

/// One struct of a package listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructInfo {
    /// Go type name
    pub name: String,
    /// Struct kind, e.g. `sliceOfPtrs`
    pub variant: String,
}

/// Builds the listing for `registry`.
///
/// # Examples
///
/// ```
/// use pdatagen_cli::commands::list;
/// use pdatagen_codegen::Registry;
///
/// let registry = Registry::all_packages()?;
/// let packages = list::collect(&registry);
/// assert_eq!(packages[0].name, "pcommon");
/// assert!(packages[0].shared);
/// # Ok::<(), pdatagen_core::Error>(())
/// ```
#[must_use]
pub fn collect(registry: &Registry) -> Vec<PackageInfo> {
    registry
        .packages()
        .iter()
        .map(|package| PackageInfo {
            name: package.name().to_string(),
            path: package.path().to_string(),
            shared: package.used_by_other_data_types(),
            structs: package
                .structs()
                .iter()
                .map(|s| StructInfo {
                    name: s.name().to_string(),
                    variant: s.variant().to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Runs the list command.
///
/// # Errors
///
/// Returns an error if the built-in registry fails validation or the
/// output cannot be formatted.
pub fn run(output_format: OutputFormat) -> Result<ExitCode> {
    let registry = Registry::all_packages().context("built-in package registry is invalid")?;
    let packages = collect(&registry);

    println!("{}", format_output(&packages, output_format)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_preserves_registry_order() {
        let registry = Registry::all_packages().unwrap();
        let names: Vec<_> = collect(&registry).into_iter().map(|p| p.name).collect();

        assert_eq!(
            names,
            vec!["pcommon", "plog", "plogotlp", "pmetric", "pmetricotlp", "ptrace", "ptraceotlp"]
        );
    }

    #[test]
    fn test_collect_reports_variants() {
        let registry = Registry::all_packages().unwrap();
        let packages = collect(&registry);
        let ptrace = packages.iter().find(|p| p.name == "ptrace").unwrap();

        assert_eq!(ptrace.path, "ptrace");
        assert!(!ptrace.shared);
        assert_eq!(
            ptrace.structs[0],
            StructInfo {
                name: "ResourceSpansSlice".to_string(),
                variant: "sliceOfPtrs".to_string(),
            }
        );
        assert!(
            ptrace
                .structs
                .iter()
                .any(|s| s.name == "Status" && s.variant == "messageValueStruct")
        );
    }

    #[test]
    fn test_listing_serializes() {
        let registry = Registry::all_packages().unwrap();
        let json = serde_json::to_string(&collect(&registry)).unwrap();
        assert!(json.contains("\"name\":\"pmetricotlp\""));
        assert!(json.contains("\"path\":\"pmetric/pmetricotlp\""));
    }
}
