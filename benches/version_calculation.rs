use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gitsemver::{get_version, Config, NullLogger, Version};

fn benchmark_version_calculation(c: &mut Criterion) {
    c.bench_function("get_version_this_repo", |b| {
        b.iter(|| {
            let config = Config::default();
            let _ = black_box(get_version(".", &config, &NullLogger));
        })
    });

    c.bench_function("version_grammar_parse_and_height", |b| {
        b.iter(|| {
            let v: Version = black_box("1.2.3-alpha.1").parse().unwrap();
            let bumped = v.with_height(
                black_box(12),
                gitsemver::AutoIncrement::Patch,
                &["alpha".into(), "0".into()],
            );
            black_box(bumped);
        })
    });
}

criterion_group!(benches, benchmark_version_calculation);
criterion_main!(benches);
