// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for stack reconciliation and timer handling.
//!
//! Measures the performance of:
//! - Creating toasts (store append + synchronous reconcile)
//! - A full toast lifetime (create, expire, purge)

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use toast_stack::stack::ToastStack;
use toast_stack::test_utils::RecordingRenderer;

/// Benchmark toast creation with a sliding window.
///
/// Every create publishes a snapshot and runs a reconciliation pass, so
/// this measures the cost of window selection plus layout emission.
fn bench_create_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    group.bench_function("create_burst_20", |b| {
        b.iter(|| {
            let renderer = RecordingRenderer::new(48.0);
            let stack = ToastStack::with_renderer(Box::new(renderer));
            for i in 0..20 {
                stack.message(format!("toast-{i}"));
                stack.advance(1);
            }
            black_box(stack.visible_count());
        });
    });

    group.finish();
}

/// Benchmark a full lifetime: mount, run to expiry, removal transition.
fn bench_full_lifetime(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    group.bench_function("full_lifetime", |b| {
        b.iter(|| {
            let renderer = RecordingRenderer::new(48.0);
            let stack = ToastStack::with_renderer(Box::new(renderer));
            stack.message("lifetime");
            stack.advance(0);
            stack.advance(4000);
            stack.advance(400);
            black_box(stack.visible_count());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_create_burst, bench_full_lifetime);
criterion_main!(benches);
