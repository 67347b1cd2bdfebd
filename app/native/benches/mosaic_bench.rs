//! Benchmarks for mosaic layout performance-critical operations.
//!
//! Run with: `cargo bench -p multiview`
//!
//! Results are saved to `target/criterion/` with HTML reports.
//!
//! ## Benchmark Groups
//!
//! - `layouts`: Grid and focused layouts at various tile counts
//! - `layouts_4k`: Layouts on a 4K surface
//! - `autofit`: Auto-fit focus height solving
//! - `positions`: Position map operations

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use multiview_lib::config::ViewMode;
use multiview_lib::mosaic::{
    LayoutRequest, PositionMap, Size, auto_fit_focus_height, calculate_layout,
};

// ============================================================================
// Test Data
// ============================================================================

/// Identities `s1..sN`.
fn stream_ids(count: usize) -> Vec<String> { (1..=count).map(|i| format!("s{i}")).collect() }

// ============================================================================
// Layout Benchmarks
// ============================================================================

fn bench_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts");

    for count in [1, 2, 4, 5, 9, 16] {
        let grid = LayoutRequest::new(count, 1920.0, 1080.0, ViewMode::Grid, 70.0);
        group.bench_with_input(BenchmarkId::new("grid", count), &grid, |b, request| {
            b.iter(|| calculate_layout(black_box(request)));
        });

        let focused = LayoutRequest::new(count, 1920.0, 1080.0, ViewMode::Focused, 70.0);
        group.bench_with_input(BenchmarkId::new("focused", count), &focused, |b, request| {
            b.iter(|| calculate_layout(black_box(request)));
        });
    }

    group.finish();
}

fn bench_layout_4k(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts_4k");

    for count in [4, 16, 32] {
        let request = LayoutRequest::new(count, 3840.0, 2160.0, ViewMode::Grid, 70.0);
        group.bench_with_input(BenchmarkId::new("grid", count), &request, |b, request| {
            b.iter(|| calculate_layout(black_box(request)));
        });
    }

    group.finish();
}

fn bench_autofit(c: &mut Criterion) {
    let mut group = c.benchmark_group("autofit");
    let size = Size::new(1920.0, 1080.0);

    for count in [3, 6, 12] {
        group.bench_with_input(BenchmarkId::new("solve", count), &count, |b, &count| {
            b.iter(|| auto_fit_focus_height(black_box(count), black_box(size), black_box(70.0)));
        });
    }

    group.finish();
}

fn bench_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("positions");
    let ids = stream_ids(16);

    group.bench_function("set_all_16", |b| {
        b.iter(|| {
            let mut map = PositionMap::new();
            map.set_all(black_box(ids.as_slice())).ok();
            map
        });
    });

    group.bench_function("sync_16", |b| {
        let mut shuffled = ids.clone();
        shuffled.rotate_left(5);
        shuffled.truncate(12);
        b.iter(|| {
            let mut map = PositionMap::from_ordered(ids.as_slice()).unwrap_or_default();
            map.sync(black_box(shuffled.as_slice()));
            map
        });
    });

    group.finish();
}

criterion_group!(benches, bench_layouts, bench_layout_4k, bench_autofit, bench_positions);
criterion_main!(benches);
