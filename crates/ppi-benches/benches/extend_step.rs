// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! Benchmark: one `n -> n + 1` extension step.
//!
//! The input set for `n` is built once per size outside the timed region;
//! every iteration clones it and runs a full extension.
//!
//! Throughput "elements" are the identities produced for `n + 1`.
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use ppi_core::{extend_with, ExtendConfig};
use std::time::Duration;

// Known counts for n + 1, so throughput is set before timing.
const SIZES: &[(usize, u64)] = &[(5, 102), (6, 276), (7, 578)];

fn bench_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("extend_step");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(8))
        .sample_size(20);
    for &(n, produced) in SIZES {
        let input = ppi_core::enumerate(n).unwrap();
        group.throughput(Throughput::Elements(produced));

        for (label, config) in [
            ("erase", ExtendConfig::default()),
            ("no_erase", ExtendConfig::default().with_erase_sources(false)),
        ] {
            group.bench_with_input(BenchmarkId::new(label, n), &n, |b, &n| {
                b.iter_batched(
                    || input.clone(),
                    |set| {
                        let ext = extend_with(set, n, &config, |_| {}).unwrap();
                        criterion::black_box(ext.ppis.len())
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_extend);
criterion_main!(benches);
