//! Whole-registry generation.
//!
//! Runs every pass over the compiled-in packages and checks the
//! properties that must hold across all generated files.

use pdatagen_codegen::header::HEADER;
use pdatagen_codegen::{Generator, Registry};
use pdatagen_core::GeneratorConfig;
use pdatagen_files::{DiskFiles, FilePath, MemoryFiles};
use std::fs;
use tempfile::TempDir;

fn generate_into_memory() -> MemoryFiles {
    let generator = Generator::new(&GeneratorConfig::default()).unwrap();
    let registry = Registry::all_packages().unwrap();
    let mut files = MemoryFiles::new();
    generator.generate_registry(&registry, &mut files).unwrap();
    files
}

fn internal_paths(files: &MemoryFiles) -> Vec<&FilePath> {
    files
        .all_paths()
        .into_iter()
        .filter(|p| p.as_str().starts_with("internal/"))
        .collect()
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate_into_memory();
    let second = generate_into_memory();

    assert_eq!(first.all_paths(), second.all_paths());
    for path in first.all_paths() {
        assert_eq!(first.read_file(path).unwrap(), second.read_file(path).unwrap());
    }
}

#[test]
fn test_every_path_is_unique() {
    let registry = Registry::all_packages().unwrap();
    let files = generate_into_memory();

    let struct_count: usize = registry.packages().iter().map(|p| p.structs().len()).sum();
    let shared_count: usize = registry
        .packages()
        .iter()
        .filter(|p| p.used_by_other_data_types())
        .map(|p| p.structs().len())
        .sum();

    assert_eq!(files.file_count(), struct_count * 2 + shared_count);
}

#[test]
fn test_header_invariant() {
    let registry = Registry::all_packages().unwrap();
    let files = generate_into_memory();

    for package in registry.packages() {
        for descriptor in package.structs() {
            let stem = descriptor.name().file_stem();
            for path in [
                format!("{}/generated_{stem}.go", package.path()),
                format!("{}/generated_{stem}_test.go", package.path()),
            ] {
                let content = files.read_file(&path).unwrap();
                let expected = format!("{HEADER}\n\npackage {}\n\n", package.name());
                assert!(content.starts_with(&expected), "bad header in {path}");
            }
        }
    }

    for path in internal_paths(&files) {
        let content = files.read_file(path).unwrap();
        assert!(content.starts_with(&format!("{HEADER}\n\npackage internal\n\n")));
    }
}

#[test]
fn test_internal_files_only_for_pcommon() {
    let files = generate_into_memory();

    let wrappers: Vec<_> = internal_paths(&files)
        .into_iter()
        .map(FilePath::file_name)
        .collect();
    assert_eq!(
        wrappers,
        vec![
            "generated_wrapper_instrumentationscope.go",
            "generated_wrapper_resource.go",
        ]
    );
}

#[test]
fn test_helper_suppression_follows_policy() {
    let registry = Registry::all_packages().unwrap();
    let files = generate_into_memory();

    for package in registry.packages() {
        for descriptor in package.structs() {
            let path = format!(
                "{}/generated_{}_test.go",
                package.path(),
                descriptor.name().file_stem()
            );
            let content = files.read_file(&path).unwrap();
            let helper = format!("func generateTest{}()", descriptor.name());
            assert_eq!(
                content.contains(&helper),
                !package.used_by_other_data_types(),
                "helper presence wrong in {path}"
            );
        }
    }
}

#[test]
fn test_cross_package_access_goes_through_internal() {
    let files = generate_into_memory();

    let resource_logs = files.read_file("plog/generated_resourcelogs.go").unwrap();
    assert!(resource_logs.contains("func (ms ResourceLogs) Resource() pcommon.Resource"));
    assert!(resource_logs.contains("pcommon.Resource(internal.NewResource(&ms.orig.Resource))"));

    let wrapper = files.read_file("internal/generated_wrapper_resource.go").unwrap();
    assert!(wrapper.contains("func FillTestResource(tv Resource)"));
    assert!(wrapper.contains("tv.orig.DroppedAttributesCount = 17"));
}

#[test]
fn test_otlp_partial_success() {
    let files = generate_into_memory();

    let content = files
        .read_file("ptrace/ptraceotlp/generated_exportpartialsuccess.go")
        .unwrap();
    assert!(content.contains("package ptraceotlp"));
    assert!(content.contains("orig *otlpcollectortrace.ExportTracePartialSuccess"));
    assert!(content.contains("func (ms ExportPartialSuccess) RejectedSpans() int64"));
    assert!(content.contains("func (ms ExportPartialSuccess) SetErrorMessage(v string)"));
}

#[test]
fn test_pointer_slices_import_sort() {
    let files = generate_into_memory();

    let spans = files.read_file("ptrace/generated_spanslice.go").unwrap();
    assert!(spans.contains("import (\n\t\"sort\"\n\n"));
    assert!(spans.contains("sort.SliceStable(*es.orig"));

    let exemplars = files.read_file("pmetric/generated_exemplarslice.go").unwrap();
    assert!(!exemplars.contains("sort.SliceStable"));
}

#[test]
fn test_disk_output_matches_memory() {
    let temp_dir = TempDir::new().unwrap();
    let config = GeneratorConfig::with_output_root(temp_dir.path());
    let generator = Generator::new(&config).unwrap();
    let registry = Registry::all_packages().unwrap();

    let mut disk = DiskFiles::new(&config);
    generator.generate_registry(&registry, &mut disk).unwrap();
    // Second run overwrites every file with identical bytes.
    generator.generate_registry(&registry, &mut disk).unwrap();

    let memory = generate_into_memory();
    for path in memory.all_paths() {
        let on_disk = fs::read_to_string(temp_dir.path().join(path.as_path())).unwrap();
        assert_eq!(on_disk, memory.read_file(path).unwrap(), "mismatch in {path}");
    }
}
