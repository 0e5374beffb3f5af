use criterion::{black_box, criterion_group, criterion_main, Criterion};
use verparse::prelude::*;

fn version_inputs() -> Vec<&'static str> {
    vec![
        "1",
        "1.2.3",
        "v2.0.0-rc1",
        "10.4.1.2 beta 3",
        "4.0 SP2",
        "1.0-release",
        "garbage",
    ]
}

fn parse_permissive(inputs: &[&str]) {
    for input in inputs {
        let version = Version::parse(input);
        black_box(version);
    }
}

fn parse_strict(inputs: &[&str]) {
    for input in inputs {
        let res = Version::parse_strict(input);
        black_box(res.ok());
    }
}

fn sort_versions(versions: &[Version]) {
    let mut versions = versions.to_vec();
    versions.sort_by_cached_key(|version| version.canonical_integer().unwrap_or(u64::MAX));
    black_box(versions);
}

fn next_all_levels(inputs: &[&str]) {
    for input in inputs {
        let version = Version::parse(input);
        for level in Level::ALL {
            assert!(version.next(&level).is_ok());
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let versions: Vec<Version> = version_inputs().into_iter().map(Version::parse).collect();

    c.bench_function("parse_permissive", |b| b.iter(|| parse_permissive(black_box(&version_inputs()))));
    c.bench_function("parse_strict", |b| b.iter(|| parse_strict(black_box(&version_inputs()))));
    c.bench_function("sort_versions", |b| b.iter(|| sort_versions(black_box(&versions))));
    c.bench_function("next_all_levels", |b| b.iter(|| next_all_levels(black_box(&version_inputs()))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
