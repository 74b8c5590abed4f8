//! Performance benchmarks for pdatagen-codegen.
//!
//! Run with: cargo bench --package pdatagen-codegen

use criterion::{Criterion, criterion_group, criterion_main};
use pdatagen_codegen::{Generator, GenerationScope, Registry};
use pdatagen_core::GeneratorConfig;
use pdatagen_files::MemoryFiles;
use std::hint::black_box;

fn bench_full_registry(c: &mut Criterion) {
    let generator = Generator::new(&GeneratorConfig::default()).unwrap();
    let registry = Registry::all_packages().unwrap();

    c.bench_function("generate_registry_into_memory", |b| {
        b.iter(|| {
            let mut files = MemoryFiles::new();
            generator
                .generate_registry(black_box(&registry), &mut files)
                .unwrap();
            black_box(files.file_count())
        });
    });
}

fn bench_single_package(c: &mut Criterion) {
    let generator = Generator::new(&GeneratorConfig::default()).unwrap();
    let registry = Registry::all_packages().unwrap();
    let ptrace = registry.package("ptrace").unwrap();

    c.bench_function("generate_ptrace_package", |b| {
        b.iter(|| {
            let mut files = MemoryFiles::new();
            generator
                .generate_package(black_box(ptrace), &mut files)
                .unwrap();
            black_box(files.file_count())
        });
    });
}

fn bench_registry_validation(c: &mut Criterion) {
    c.bench_function("registry_all_packages", |b| {
        b.iter(|| black_box(Registry::all_packages().unwrap()));
    });
}

fn bench_struct_body(c: &mut Criterion) {
    let engine = pdatagen_codegen::template_engine::TemplateEngine::new().unwrap();
    let registry = Registry::all_packages().unwrap();
    let ptrace = registry.package("ptrace").unwrap();
    let scope = GenerationScope::new(ptrace.name());
    let span = ptrace
        .structs()
        .iter()
        .find(|s| s.name().as_str() == "Span")
        .unwrap();

    c.bench_function("render_span_struct", |b| {
        b.iter(|| {
            let mut buf = String::new();
            span.generate_struct(&engine, &scope, &mut buf).unwrap();
            black_box(buf)
        });
    });
}

criterion_group!(
    benches,
    bench_full_registry,
    bench_single_package,
    bench_registry_validation,
    bench_struct_body
);
criterion_main!(benches);
