//! Performance benchmarks for twig

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use termcolor::Buffer;
use twig::test_utils::TestDir;
use twig::tree::should_exclude;
use twig::{OutputConfig, StreamingFormatter, StreamingWalker, WalkerConfig, human_size};

fn create_tree(dirs: usize, files_per_dir: usize) -> TestDir {
    let dir = TestDir::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            dir.add_sized_file(&format!("dir_{}/sub/file_{}.txt", d, f), f * 37);
        }
    }
    dir.add_file("node_modules/pkg/index.js", "");
    dir
}

fn bench_human_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("human_size");

    group.bench_function("bytes", |b| b.iter(|| human_size(black_box(512))));
    group.bench_function("gigabytes", |b| {
        b.iter(|| human_size(black_box(7 * 1024 * 1024 * 1024)))
    });
    group.bench_function("petabytes", |b| b.iter(|| human_size(black_box(u64::MAX))));

    group.finish();
}

fn bench_should_exclude(c: &mut Criterion) {
    let excludes: Vec<String> = ["target", "dist", ".git"].iter().map(|s| s.to_string()).collect();
    let root_excludes: Vec<String> = (0..50).map(|i| format!("generated_{}", i)).collect();

    let mut group = c.benchmark_group("should_exclude");

    group.bench_function("first_pattern_hit", |b| {
        b.iter(|| should_exclude(black_box("target"), &excludes, &root_excludes))
    });
    group.bench_function("miss", |b| {
        b.iter(|| should_exclude(black_box("src"), &excludes, &root_excludes))
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let small = create_tree(5, 2);
    let large = create_tree(50, 10);

    let mut group = c.benchmark_group("walk_streaming");

    for (name, tree) in [("small_tree_10_files", &small), ("large_tree_500_files", &large)] {
        let walker = StreamingWalker::new(WalkerConfig::new(
            vec!["node_modules".to_string()],
            Vec::new(),
        ));
        group.bench_function(name, |b| {
            b.iter(|| {
                let config = OutputConfig {
                    use_color: false,
                    ..Default::default()
                };
                let mut formatter = StreamingFormatter::with_writer(config, Buffer::no_color());
                walker
                    .walk_streaming(black_box(tree.path()), &mut formatter)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_human_size, bench_should_exclude, bench_walk);
criterion_main!(benches);
