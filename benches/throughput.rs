//! Throughput Benchmark for mdb
//!
//! This benchmark measures the tokenizer, the storage engine and the full
//! interpret pipeline under a few simple workloads.

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mdb::compute::tokenize;
use mdb::storage::{Engine, StorageEngine};
use mdb::Database;
use std::sync::Arc;

/// Benchmark the FSM tokenizer
fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_compact", |b| {
        b.iter(|| tokenize(black_box("SET user/42 some-value")));
    });

    group.bench_function("set_padded", |b| {
        b.iter(|| tokenize(black_box("   SET    user/42     some-value   ")));
    });

    group.bench_function("invalid", |b| {
        b.iter(|| tokenize(black_box("SET user:42 value")));
    });

    group.finish();
}

/// Benchmark exact engine operations
fn bench_engine(c: &mut Criterion) {
    let engine = Arc::new(StorageEngine::new());

    // Pre-populate with data
    for i in 0..100_000 {
        engine.set(format!("key:{}", i), Bytes::from(format!("value:{}", i)));
    }

    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(1));

    group.bench_function("set", |b| {
        let mut i = 0u64;
        b.iter(|| {
            engine.set(format!("new:{}", i), Bytes::from_static(b"small_value"));
            i += 1;
        });
    });

    group.bench_function("get_existing", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("key:{}", i % 100_000);
            black_box(engine.get(&key).ok());
            i += 1;
        });
    });

    group.bench_function("get_missing", |b| {
        b.iter(|| black_box(engine.get("missing").is_err()));
    });

    group.finish();
}

/// Benchmark pattern scans
fn bench_patterns(c: &mut Criterion) {
    let engine = StorageEngine::new();
    for i in 0..10_000 {
        engine.set(format!("user/{}/name", i), Bytes::from("x"));
    }

    let mut group = c.benchmark_group("pattern");

    group.bench_function("get_by_pattern_narrow", |b| {
        b.iter(|| black_box(engine.get_by_pattern("user/999*/name").ok()));
    });

    group.bench_function("get_by_pattern_all", |b| {
        b.iter(|| black_box(engine.get_by_pattern("*").ok()));
    });

    group.finish();
}

/// Benchmark the full parse + execute path
fn bench_interpret(c: &mut Criterion) {
    let db = Database::new();
    db.interpret("SET counter 0").unwrap();

    let mut group = c.benchmark_group("interpret");
    group.throughput(Throughput::Elements(1));

    group.bench_function("set", |b| {
        b.iter(|| db.interpret(black_box("SET counter 1")));
    });

    group.bench_function("get", |b| {
        b.iter(|| db.interpret(black_box("GET counter")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_engine,
    bench_patterns,
    bench_interpret
);
criterion_main!(benches);
