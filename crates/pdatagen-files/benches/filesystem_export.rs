//! Benchmarks for the file sinks.
//!
//! Measures writing a batch of generated files into memory and onto disk.
//!
//! # Run Benchmarks
//!
//! ```bash
//! cargo bench --bench filesystem_export
//! ```

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pdatagen_core::GeneratorConfig;
use pdatagen_core::traits::FileSink;
use pdatagen_files::{DiskFiles, MemoryFiles};
use std::hint::black_box;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_files(count: usize) -> Vec<(PathBuf, String)> {
    (0..count)
        .map(|i| {
            let path = PathBuf::from(format!("pbench/generated_struct{i}.go"));
            let content = format!(
                "package pbench\n\ntype Struct{i} struct {{\n\torig *otlpbench.Struct{i}\n}}\n"
            );
            (path, content)
        })
        .collect()
}

fn bench_memory_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_write");

    for count in [1, 10, 50] {
        let files = sample_files(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &files, |b, files| {
            b.iter(|| {
                let mut sink = MemoryFiles::new();
                for (path, content) in files {
                    sink.write_file(path, content).unwrap();
                }
                black_box(sink.file_count())
            });
        });
    }

    group.finish();
}

fn bench_disk_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("disk_write");

    for count in [1, 10, 50] {
        let files = sample_files(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &files, |b, files| {
            b.iter_with_setup(
                || TempDir::new().unwrap(),
                |temp_dir| {
                    let mut sink =
                        DiskFiles::new(&GeneratorConfig::with_output_root(temp_dir.path()));
                    for (path, content) in files {
                        sink.write_file(path, content).unwrap();
                    }
                    black_box(temp_dir)
                },
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_memory_write, bench_disk_write);
criterion_main!(benches);
