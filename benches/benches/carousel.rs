// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::time::Duration;
use understory_carousel::{ActivePosition, VirtualWindow, WindowConfig, build_virtual_window};

fn bench_build_virtual_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/build_virtual_window");

    // Window size is what matters; the source only changes how often it wraps.
    for (per_page, per_move) in [(1usize, 1usize), (3, 1), (6, 3), (12, 12)] {
        let source: Vec<u64> = (0..256).collect();
        let config = WindowConfig::new(per_page, per_move)
            .with_active_index(3)
            .with_active_position(ActivePosition::Center);
        let label = format!("{per_page}x{per_move}");
        group.throughput(Throughput::Elements(config.total_slot_count() as u64));

        group.bench_with_input(BenchmarkId::new("vec", &label), &source, |b, source| {
            b.iter(|| black_box(build_virtual_window(black_box(source), &config)));
        });

        group.bench_with_input(
            BenchmarkId::new("virtual_window", &label),
            &source,
            |b, source| {
                b.iter(|| black_box(VirtualWindow::new(black_box(source), &config)));
            },
        );
    }

    group.finish();
}

fn bench_tiny_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/tiny_source");
    group.measurement_time(Duration::from_secs(2));

    // A two-element source repeats across the whole window.
    let source = [0u64, 1];
    for per_move in [1usize, 8, 64] {
        let config = WindowConfig::new(4, per_move);
        group.throughput(Throughput::Elements(config.total_slot_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(per_move), &config, |b, config| {
            b.iter(|| black_box(build_virtual_window(&source, black_box(config))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_virtual_window, bench_tiny_source);
criterion_main!(benches);
