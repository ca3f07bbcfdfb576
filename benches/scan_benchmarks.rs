use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dupelens::duplicates::{Engine, EngineConfig};
use dupelens::scanner::{Fingerprinter, Walker};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Helper to create a test tree with duplicates sprinkled in
fn setup_test_dir(depth: usize, files_per_dir: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    create_dir_recursive(temp_dir.path().to_path_buf(), depth, files_per_dir);
    temp_dir
}

fn create_dir_recursive(path: PathBuf, depth: usize, files_per_dir: usize) {
    if depth == 0 {
        return;
    }

    if !path.exists() {
        fs::create_dir_all(&path).expect("Failed to create dir");
    }

    for i in 0..files_per_dir {
        let file_path = path.join(format!("file_{}.txt", i));
        // Reuse a handful of contents so every level contributes duplicates
        fs::write(file_path, format!("shared content {}", i % 3)).expect("Failed to write file");
    }

    if depth > 1 {
        for i in 0..2 {
            let sub_dir = path.join(format!("dir_{}", i));
            create_dir_recursive(sub_dir, depth - 1, files_per_dir);
        }
    }
}

fn bench_walker(c: &mut Criterion) {
    let temp_dir = setup_test_dir(4, 10);

    c.bench_function("walker_150_files", |b| {
        b.iter(|| {
            let walker = Walker::new(temp_dir.path());
            let records: Vec<_> = walker.walk().collect();
            black_box(records);
        })
    });
}

fn bench_fingerprinter(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprinter");
    let fingerprinter = Fingerprinter::new();

    for size_kb in [1, 64, 1024] {
        let data = vec![b'a'; size_kb * 1024];
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bench_file.dat");
        fs::write(&file_path, &data).expect("Failed to write bench file");

        group.bench_with_input(format!("blake3_{}KB", size_kb), &file_path, |b, path| {
            b.iter(|| {
                let digest = fingerprinter.fingerprint(path).unwrap();
                black_box(digest);
            });
        });
    }
    group.finish();
}

fn bench_full_scan(c: &mut Criterion) {
    let temp_dir = setup_test_dir(4, 10);

    let mut group = c.benchmark_group("scan");
    for threads in [1, 4] {
        group.bench_function(format!("scan_150_files_{}_threads", threads), |b| {
            let engine = Engine::new(EngineConfig::default().with_io_threads(threads));
            b.iter(|| {
                let result = engine.scan(temp_dir.path()).unwrap();
                black_box(result);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walker, bench_fingerprinter, bench_full_scan);
criterion_main!(benches);
