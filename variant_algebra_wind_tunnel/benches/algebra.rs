// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use variant_algebra::codec;
use variant_algebra::trace::{RecordingSink, TraceMask};
use variant_algebra::{BinaryOp, Variant};

/// Entry point for `variant_algebra` wind-tunnel benchmarks.
///
/// Scenarios cover the dispatch paths with distinct cost shapes: scalar pairs (allocation
/// dominated), scalar broadcast and sequence pairs (linear in length), relational sums, traced
/// dispatch, and the framed codec.
fn bench_algebra(c: &mut Criterion) {
    bench_scalar_pairs(c);
    bench_broadcast(c);
    bench_sequence_pairs(c);
    bench_relational_sums(c);
    bench_traced_dispatch(c);
    bench_codec(c);
}

const LENS: [usize; 3] = [16, 1_024, 65_536];

fn int_seq(len: usize) -> Variant {
    Variant::from((0..len).map(|i| i64::try_from(i).unwrap_or(i64::MAX)).collect::<Vec<_>>())
}

fn float_seq(len: usize) -> Variant {
    Variant::from((0..len).map(|i| 0.5 * i as f64).collect::<Vec<_>>())
}

/// Scalar with scalar across the promotion table.
fn bench_scalar_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_pairs");
    let cases = [
        ("int_int", Variant::from(7_i64), Variant::from(3_i64)),
        ("int_flt", Variant::from(7_i64), Variant::from(0.25)),
        ("flt_flt", Variant::from(1.5), Variant::from(0.25)),
    ];
    for (name, lhs, rhs) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| (black_box(lhs) * black_box(rhs)).unwrap());
        });
    }
    group.finish();
}

/// Sequence with scalar, promoting integer elements when the scalar is a float.
fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");
    for &len in &LENS {
        let seq = int_seq(len);
        let k = Variant::from(2.5);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| (black_box(&seq) + black_box(&k)).unwrap());
        });
    }
    group.finish();
}

/// Sequence with sequence where the right side is half as long, so half the result is tail
/// pass-through.
fn bench_sequence_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_pairs");
    for &len in &LENS {
        let lhs = float_seq(len);
        let rhs = int_seq(len / 2);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| (black_box(&lhs) - black_box(&rhs)).unwrap());
        });
    }
    group.finish();
}

/// Relational operators reduce both sides to sums before comparing.
fn bench_relational_sums(c: &mut Criterion) {
    let mut group = c.benchmark_group("relational_sums");
    for &len in &LENS {
        let lhs = int_seq(len);
        let rhs = float_seq(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| black_box(&lhs).less(black_box(&rhs)).unwrap());
        });
    }
    group.finish();
}

/// Overhead of a recording sink compared to plain dispatch.
fn bench_traced_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("traced_dispatch");
    let lhs = Variant::from(41_i64);
    let rhs = Variant::from(1_i64);
    group.bench_function("plain", |b| {
        b.iter(|| black_box(&lhs).binary(BinaryOp::Add, black_box(&rhs)).unwrap());
    });
    for (name, mask) in [("errors_only", TraceMask::ERRORS), ("all", TraceMask::ALL)] {
        let mut sink = RecordingSink::new(mask);
        group.bench_function(name, |b| {
            b.iter(|| {
                let out = black_box(&lhs)
                    .binary_traced(BinaryOp::Add, black_box(&rhs), &mut sink)
                    .unwrap();
                sink.take_events();
                out
            });
        });
    }
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    for &len in &LENS {
        let v = int_seq(len);
        let frame = codec::encode_to_vec(&v);
        group.bench_with_input(BenchmarkId::new("encode", len), &len, |b, _| {
            let mut buf = Vec::with_capacity(frame.len());
            b.iter(|| {
                buf.clear();
                codec::encode(black_box(&v), &mut buf);
            });
        });
        group.bench_with_input(BenchmarkId::new("decode", len), &len, |b, _| {
            b.iter(|| codec::decode_exact(black_box(&frame)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algebra);
criterion_main!(benches);
