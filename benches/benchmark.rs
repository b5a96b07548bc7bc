//! Benchmarks for cc_schemes performance testing.
//!
//! Run with: cargo bench

use cc_schemes::{luhn, options, BatchValidator, Card, SchemeRegistry};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test card numbers
const VISA_16: &str = "4111111111111111";
const VISA_16_SPACED: &str = "4111 1111 1111 1111";
const MASTERCARD: &str = "5555555555554444";
const AMEX: &str = "378282246310005";
const MAESTRO: &str = "6759649826438453";
const BAD_CHECKSUM: &str = "4111111111111112";
const UNKNOWN: &str = "9999999999999995";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

fn full_registry() -> SchemeRegistry {
    SchemeRegistry::with_options([
        options::register_diners(),
        options::register_discover(),
        options::register_jcb(),
        options::register_union_pay(),
        options::register_maestro(),
    ])
    .unwrap()
}

/// One card per outcome: valid, bad checksum, no match, code mismatch.
fn mixed_cards(size: usize) -> Vec<Card> {
    (0..size)
        .map(|i| match i % 6 {
            0 => Card::new(VISA_16).with_code(123),
            1 => Card::new(MASTERCARD).with_code(123),
            2 => Card::new(AMEX).with_code(1234),
            3 => Card::new(BAD_CHECKSUM).with_code(123),
            4 => Card::new(UNKNOWN).with_code(123),
            _ => Card::new(AMEX).with_code(123),
        })
        .collect()
}

/// Benchmark single card validation
fn bench_single_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_validation");
    let registry = SchemeRegistry::new();

    let visa = Card::new(VISA_16).with_code(123);
    group.bench_function("visa_first_scheme", |b| {
        b.iter(|| registry.validate(black_box(&visa)))
    });

    let amex = Card::new(AMEX).with_code(1234);
    group.bench_function("amex_last_scheme", |b| {
        b.iter(|| registry.validate(black_box(&amex)))
    });

    let bad = Card::new(BAD_CHECKSUM);
    group.bench_function("checksum_invalid", |b| {
        b.iter(|| registry.validate(black_box(&bad)))
    });

    let unknown = Card::new(UNKNOWN);
    group.bench_function("no_matching_scheme", |b| {
        b.iter(|| registry.validate(black_box(&unknown)))
    });

    group.bench_function("card_new_spaced", |b| {
        b.iter(|| Card::new(black_box(VISA_16_SPACED)))
    });

    group.finish();
}

/// Benchmark scan depth: a number matched by the last of eight schemes
fn bench_registry_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_depth");

    let defaults = SchemeRegistry::new();
    let full = full_registry();
    let maestro = Card::new(MAESTRO).with_code(123);
    let unknown = Card::new(UNKNOWN);

    group.bench_function("maestro_full_table", |b| {
        b.iter(|| full.validate(black_box(&maestro)))
    });

    group.bench_function("unknown_defaults", |b| {
        b.iter(|| defaults.validate(black_box(&unknown)))
    });

    group.bench_function("unknown_full_table", |b| {
        b.iter(|| full.validate(black_box(&unknown)))
    });

    group.finish();
}

/// Benchmark Luhn algorithm specifically
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("check_str_16", |b| {
        b.iter(|| luhn::check(black_box(VISA_16)))
    });

    group.bench_function("validate_digits_16", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("check_digit_15", |b| {
        b.iter(|| luhn::check_digit(black_box("411111111111111")))
    });

    group.finish();
}

/// Benchmark registry construction
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("defaults", |b| b.iter(SchemeRegistry::new));
    group.bench_function("all_networks", |b| b.iter(full_registry));

    group.finish();
}

/// Benchmark mixed workloads with various sizes
fn bench_mixed_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_batch");
    let registry = SchemeRegistry::new();
    let batch = BatchValidator::new(&registry);

    for size in [100, 10_000, 100_000].iter() {
        let cards = mixed_cards(*size);

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("validate_all", size), &cards, |b, cards| {
            b.iter(|| batch.validate_all(black_box(cards)))
        });

        group.bench_with_input(BenchmarkId::new("count_valid", size), &cards, |b, cards| {
            b.iter(|| batch.count_valid(black_box(cards)))
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    let registry = full_registry();
    let batch = BatchValidator::new(&registry);

    for size in [1000, 10_000, 100_000].iter() {
        let cards = mixed_cards(*size);

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("validate_parallel", size),
            &cards,
            |b, cards| b.iter(|| batch.validate_parallel(black_box(cards))),
        );

        group.bench_with_input(
            BenchmarkId::new("count_parallel", size),
            &cards,
            |b, cards| b.iter(|| batch.count_valid_parallel(black_box(cards))),
        );
    }

    group.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_parallel(_c: &mut Criterion) {
    // Parallel benchmarks disabled - enable 'parallel' feature
}

criterion_group!(
    benches,
    bench_single_validation,
    bench_registry_depth,
    bench_luhn,
    bench_construction,
    bench_mixed_batch,
    bench_parallel,
);

criterion_main!(benches);
