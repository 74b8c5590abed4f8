//! Generate command implementation.
//!
//! Renders the selected registry packages and writes them under the
//! output root. Each package is rendered completely in memory before any
//! of its files touch the disk, so a template failure never leaves a
//! half-written package behind. Files are then written in the order the
//! passes produced them: implementation files, test files, then internal
//! wrappers. A failing write stops the run and keeps what came before it.

use crate::formatters::format_output;
use crate::{ExitCode, OutputFormat};
use anyhow::{Context, Result, bail};
use pdatagen_codegen::{Generator, Package, Registry};
use pdatagen_core::GeneratorConfig;
use pdatagen_core::traits::FileSink;
use pdatagen_files::{DiskFiles, MemoryFiles};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Options of one generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output root; the configuration default when `None`
    pub output_root: Option<PathBuf>,
    /// Package names to generate; every package when empty
    pub packages: Vec<String>,
    /// Render without writing
    pub dry_run: bool,
}

/// Result of a generate run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Root the file paths are relative to
    pub output_root: String,
    /// Whether files were only rendered
    pub dry_run: bool,
    /// Per-package results in registry order
    pub packages: Vec<PackageReport>,
    /// Total number of generated files
    pub file_count: usize,
}

/// Files generated for one package.
#[derive(Debug, Clone, Serialize)]
pub struct PackageReport {
    /// Go package name
    pub name: String,
    /// Generated file paths relative to the output root, in write order
    pub files: Vec<String>,
}

/// Picks the packages named in `names`, in registry order.
///
/// An empty `names` selects every package. Duplicates are ignored.
///
/// # Errors
///
/// Returns an error naming the first unknown package.
///
/// # Examples
///
/// ```
/// use pdatagen_cli::commands::generate::select_packages;
/// use pdatagen_codegen::Registry;
///
/// let registry = Registry::all_packages()?;
/// let selected = select_packages(&registry, &["ptrace".to_string(), "pcommon".to_string()])?;
/// assert_eq!(selected[0].name().as_str(), "pcommon");
/// assert_eq!(selected[1].name().as_str(), "ptrace");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn select_packages<'r>(registry: &'r Registry, names: &[String]) -> Result<Vec<&'r Package>> {
    if let Some(unknown) = names.iter().find(|n| registry.package(n.as_str()).is_none()) {
        let available: Vec<_> = registry.packages().iter().map(|p| p.name().as_str()).collect();
        bail!(
            "unknown package '{unknown}' (available: {})",
            available.join(", ")
        );
    }

    Ok(registry
        .packages()
        .iter()
        .filter(|p| names.is_empty() || names.iter().any(|n| n == p.name().as_str()))
        .collect())
}

/// Generates the selected packages and returns what was written.
///
/// # Errors
///
/// Returns an error if a package name is unknown, rendering fails, or a
/// file cannot be written. Packages finished before the failure stay on
/// disk.
pub fn generate(options: &GenerateOptions) -> Result<GenerationReport> {
    let config = options
        .output_root
        .clone()
        .map_or_else(GeneratorConfig::default, GeneratorConfig::with_output_root);
    let registry = Registry::all_packages().context("built-in package registry is invalid")?;
    let selected = select_packages(&registry, &options.packages)?;
    let generator = Generator::new(&config).context("failed to load templates")?;
    let mut disk = DiskFiles::new(&config);

    info!(
        "Generating {} package(s) into {}",
        selected.len(),
        config.output_root.display()
    );

    let mut packages = Vec::with_capacity(selected.len());
    let mut file_count = 0;

    for package in selected {
        let mut rendered = MemoryFiles::new();
        generator
            .generate_package(package, &mut rendered)
            .with_context(|| format!("failed to generate package {}", package.name()))?;

        let mut files = Vec::with_capacity(rendered.file_count());
        for path in rendered.write_order() {
            if !options.dry_run {
                let contents = rendered.read_file(path)?;
                disk.write_file(path.as_path(), contents)
                    .with_context(|| format!("failed to write package {}", package.name()))?;
            }
            files.push(path.to_string());
        }

        debug!("Package {} produced {} file(s)", package.name(), files.len());
        file_count += files.len();
        packages.push(PackageReport {
            name: package.name().to_string(),
            files,
        });
    }

    Ok(GenerationReport {
        output_root: config.output_root.display().to_string(),
        dry_run: options.dry_run,
        packages,
        file_count,
    })
}

/// Runs the generate command.
///
/// A successful run prints nothing unless a report format was requested.
///
/// # Errors
///
/// Returns an error if generation fails or the report cannot be
/// formatted.
pub fn run(options: &GenerateOptions, report_format: Option<OutputFormat>) -> Result<ExitCode> {
    let report = generate(options)?;
    if let Some(output_format) = report_format {
        println!("{}", format_output(&report, output_format)?);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_select_all_when_empty() {
        let registry = Registry::all_packages().unwrap();
        let selected = select_packages(&registry, &[]).unwrap();
        assert_eq!(selected.len(), registry.len());
    }

    #[test]
    fn test_select_ignores_duplicates() {
        let registry = Registry::all_packages().unwrap();
        let names = vec!["plog".to_string(), "plog".to_string()];
        let selected = select_packages(&registry, &names).unwrap();
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_select_unknown_package() {
        let registry = Registry::all_packages().unwrap();
        let err = select_packages(&registry, &["pprofile".to_string()]).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("unknown package 'pprofile'"));
        assert!(message.contains("pcommon, plog"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("pdata");
        let options = GenerateOptions {
            output_root: Some(root.clone()),
            packages: vec!["pcommon".to_string()],
            dry_run: true,
        };

        let report = generate(&options).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.file_count, 6);
        assert!(!root.exists());
    }

    #[test]
    fn test_generate_writes_package_files() {
        let temp_dir = TempDir::new().unwrap();
        let options = GenerateOptions {
            output_root: Some(temp_dir.path().to_path_buf()),
            packages: vec!["plogotlp".to_string()],
            dry_run: false,
        };

        let report = generate(&options).unwrap();

        assert_eq!(report.packages.len(), 1);
        assert_eq!(
            report.packages[0].files,
            vec![
                "plog/plogotlp/generated_exportpartialsuccess.go",
                "plog/plogotlp/generated_exportpartialsuccess_test.go",
            ]
        );
        assert!(
            temp_dir
                .path()
                .join("plog/plogotlp/generated_exportpartialsuccess.go")
                .exists()
        );
    }

    #[test]
    fn test_report_lists_files_in_write_order() {
        let options = GenerateOptions {
            packages: vec!["pcommon".to_string()],
            dry_run: true,
            ..GenerateOptions::default()
        };

        let report = generate(&options).unwrap();
        let files = &report.packages[0].files;

        assert_eq!(files.len(), 6);
        assert!(files[..2].iter().all(|f| f.starts_with("pcommon/") && !f.ends_with("_test.go")));
        assert!(files[2..4].iter().all(|f| f.ends_with("_test.go")));
        assert!(files[4..].iter().all(|f| f.starts_with("internal/generated_wrapper_")));
    }

    #[test]
    fn test_run_without_format_succeeds() {
        let options = GenerateOptions {
            packages: vec!["plogotlp".to_string()],
            dry_run: true,
            ..GenerateOptions::default()
        };

        let code = run(&options, None).unwrap();
        assert!(code.is_success());
    }
}
