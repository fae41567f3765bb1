//! Report pipeline benchmark suite
//!
//! Benchmarks for the hot path of a metrics run:
//! - Report parsing with field coercion at various result counts
//! - Deriving the two ordered row views

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use triptych_metrics::order::{ordered_by, SortKey};
use triptych_metrics::report::parse_report;

/// Build a report with `count` result rows, sweeping exponents so the
/// sorted views have real work to do.
fn synthetic_report(count: usize) -> String {
    let results: Vec<_> = (0..count)
        .map(|i| {
            let exp = (count - 1 - i) as i64;
            json!({
                "exp": exp,
                "ring_size": 1i64 << (exp % 20),
                "sign_avg_ms": 0.5 + i as f64 * 1.25,
                "verify_avg_ms": 0.4 + i as f64 * 0.75,
                "sig_len_avg_bytes": 32.0 * (1 + exp) as f64,
            })
        })
        .collect();
    json!({
        "config": { "base": 2, "trials": 3 },
        "results": results,
    })
    .to_string()
}

fn bench_parse_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_report");
    for count in [16usize, 128, 1024] {
        let text = synthetic_report(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |bencher, text| {
            bencher.iter(|| parse_report(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_ordered_views(c: &mut Criterion) {
    let text = synthetic_report(1024);
    let (_, rows) = parse_report(&text).unwrap();

    let mut group = c.benchmark_group("ordered_views");
    group.bench_function("by_ring_size", |bencher| {
        bencher.iter(|| ordered_by(black_box(&rows), SortKey::RingSize))
    });
    group.bench_function("by_exp", |bencher| {
        bencher.iter(|| ordered_by(black_box(&rows), SortKey::Exp))
    });
    group.finish();
}

criterion_group!(benches, bench_parse_report, bench_ordered_views);
criterion_main!(benches);
