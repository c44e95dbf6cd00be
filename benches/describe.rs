//! Benchmarks for annotation decoding.
//!
//! Tests rendering performance for the description paths the inspector exercises:
//! - Scalar mode bytes (recognized and unrecognized)
//! - Sequence annotations
//! - A full dump pass over the probe fixture

extern crate nullscope;

use criterion::{criterion_group, criterion_main, Criterion};
use nullscope::{
    inspector::property_lines,
    metadata::{
        fixtures::probe,
        nullability::{describe_attribute, describe_mode, NullableAttribute},
    },
};
use std::hint::black_box;

/// Benchmark decoding the three recognized mode bytes.
fn bench_describe_mode_recognized(c: &mut Criterion) {
    c.bench_function("describe_mode_recognized", |b| {
        b.iter(|| {
            for value in [0u8, 1, 2] {
                black_box(describe_mode(black_box(value)));
            }
        });
    });
}

/// Benchmark the unrecognized fallback, which formats the byte value.
fn bench_describe_mode_unrecognized(c: &mut Criterion) {
    c.bench_function("describe_mode_unrecognized", |b| {
        b.iter(|| black_box(describe_mode(black_box(200))));
    });
}

/// Benchmark decoding a sequence annotation (array-of-nullable shape).
fn bench_describe_sequence(c: &mut Criterion) {
    let attribute = NullableAttribute::Modes(vec![1, 2]);

    c.bench_function("describe_sequence", |b| {
        b.iter(|| black_box(describe_attribute(black_box(Some(&attribute)))));
    });
}

/// Benchmark a full line-rendering pass over the probe descriptor.
fn bench_probe_dump(c: &mut Criterion) {
    let descriptor = probe::descriptor().unwrap();

    c.bench_function("probe_dump", |b| {
        b.iter(|| black_box(property_lines(black_box(&descriptor))));
    });
}

criterion_group!(
    benches,
    bench_describe_mode_recognized,
    bench_describe_mode_unrecognized,
    bench_describe_sequence,
    bench_probe_dump
);
criterion_main!(benches);
