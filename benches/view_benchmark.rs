// ============================================================================
// Exchange View Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Aggregation - Fill ratios for one side at growing depths
// 2. Snapshot View - Split, sort and aggregate a mixed snapshot
// 3. Snapshot Cache - Repeated snapshots served from the cache
// 4. Validation - Accepted and rejected order form input
// ============================================================================

use chrono::{Duration, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use exchange_view::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

fn book_side(side: Side, depth: usize) -> Vec<Order> {
    (0..depth)
        .map(|i| {
            Order::new(
                format!("0x{:064x}", i),
                side,
                Decimal::new(2_000 + i as i64, 6),
                Decimal::new(((i * 7919) % 1_000 + 1) as i64, 2),
                OrderStatus::Pending,
                i % 10 == 0,
            )
            .unwrap()
        })
        .collect()
}

// ============================================================================
// Aggregation Benchmarks
// ============================================================================

fn benchmark_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for depth in [10, 100, 1000].iter() {
        let orders = book_side(Side::Sell, *depth);

        group.bench_with_input(BenchmarkId::new("fresh", depth), &orders, |b, orders| {
            b.iter(|| black_box(aggregate(orders, Side::Sell)));
        });
    }

    group.finish();
}

fn benchmark_snapshot_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_view");

    for depth in [10, 100, 1000].iter() {
        let mut snapshot = book_side(Side::Sell, *depth);
        snapshot.extend(book_side(Side::Buy, *depth));

        group.bench_with_input(BenchmarkId::new("from_snapshot", depth), &snapshot, |b, s| {
            b.iter(|| black_box(OrderBookView::from_snapshot(s.clone())));
        });
    }

    group.finish();
}

fn benchmark_snapshot_cache(c: &mut Criterion) {
    let orders = book_side(Side::Buy, 500);
    let cache = SnapshotCache::new();

    c.bench_function("snapshot_cache_hit", |b| {
        b.iter(|| black_box(cache.aggregate(&orders, Side::Buy)));
    });
}

// ============================================================================
// Validation Benchmarks
// ============================================================================

fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let ctx = ValidationContext::new(
        Side::Buy,
        Decimal::ZERO,
        Decimal::from(10),
        ValidationConstraints::weth_pairs(),
    );
    let expiration = Some(Utc::now() + Duration::days(7));

    let accepted = OrderInput::new("0.00213", "1500.5", expiration);
    group.bench_function("accepted", |b| {
        b.iter(|| black_box(validate(&accepted, &ctx)));
    });

    let rejected = OrderInput::new("1e3", "", None);
    group.bench_function("rejected", |b| {
        b.iter(|| black_box(validate(&rejected, &ctx)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_aggregate,
    benchmark_snapshot_view,
    benchmark_snapshot_cache,
    benchmark_validation
);
criterion_main!(benches);
