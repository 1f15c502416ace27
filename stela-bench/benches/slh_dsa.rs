//! SLH-DSA Benchmarks
//!
//! Benchmarks for SLH-DSA "fast" variants using the Criterion framework.
//! Only the "f" (fast) variants are benchmarked as the "s" (small) variants
//! are significantly slower and would increase benchmark time excessively.
//! Build with `--features parallel` to measure the rayon code paths.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::rng;
use stela_bench::{BENCH_CONTEXT, BENCH_MESSAGE};
use stela_slh_dsa::{keygen, sign_deterministic, sign_randomized, verify, ParamId};

/// Parameter sets covered by every group.
fn fast_sets() -> impl Iterator<Item = ParamId> {
    ParamId::ALL.into_iter().filter(|id| id.is_fast())
}

/// Benchmark key generation for SLH-DSA fast variants.
fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("SLH-DSA KeyGen");

    group.throughput(Throughput::Elements(1));
    // SLH-DSA keygen is slower, increase sample size time
    group.sample_size(10);

    for id in fast_sets() {
        group.bench_function(id.name(), |b| {
            b.iter_batched(rng, |mut rng| black_box(keygen(id, &mut rng).unwrap()), BatchSize::SmallInput)
        });
    }

    group.finish();
}

/// Benchmark signing for SLH-DSA fast variants.
fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("SLH-DSA Sign");

    group.throughput(Throughput::Elements(1));
    // SLH-DSA signing is slower
    group.sample_size(10);

    let mut key_rng = rng();
    for id in fast_sets() {
        let sk = keygen(id, &mut key_rng).unwrap();

        group.bench_function(format!("{}/deterministic", id.name()), |b| {
            b.iter(|| black_box(sign_deterministic(&sk, BENCH_MESSAGE, BENCH_CONTEXT).unwrap()))
        });

        group.bench_function(format!("{}/randomized", id.name()), |b| {
            b.iter_batched(
                rng,
                |mut rng| black_box(sign_randomized(&sk, &mut rng, BENCH_MESSAGE, BENCH_CONTEXT).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Benchmark verification for SLH-DSA fast variants.
fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("SLH-DSA Verify");

    group.throughput(Throughput::Elements(1));
    group.sample_size(10);

    let mut rng = rng();
    for id in fast_sets() {
        let sk = keygen(id, &mut rng).unwrap();
        let sig = sign_deterministic(&sk, BENCH_MESSAGE, BENCH_CONTEXT).unwrap();
        let pk = sk.public_key();

        group.bench_function(id.name(), |b| {
            b.iter(|| black_box(verify(pk, BENCH_MESSAGE, &sig, BENCH_CONTEXT)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_keygen, bench_sign, bench_verify);
criterion_main!(benches);
