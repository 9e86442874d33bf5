//! Indicator, chart and report benchmarks over synthetic series.
//!
//! Run with: `cargo bench --package stockdash-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stockdash_bench::{SERIES_LENGTHS, synthetic_series};
use stockdash_lib::{
    ChartOptions, IndicatorKind, IndicatorSet, OutputFormat, Report, compose, write_report,
};
use tempfile::TempDir;

fn indicator_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicators");

    for len in SERIES_LENGTHS {
        let series = synthetic_series("BENCH", len);
        group.throughput(Throughput::Elements(len as u64));

        for &kind in IndicatorKind::all() {
            group.bench_with_input(BenchmarkId::new(kind.as_str(), len), &series, |b, series| {
                b.iter(|| kind.compute(black_box(series)));
            });
        }
    }

    group.finish();
}

fn chart_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");
    group.sample_size(20);

    let all: IndicatorSet = IndicatorKind::all().iter().copied().collect();
    for len in SERIES_LENGTHS {
        let series = synthetic_series("BENCH", len);
        let indicators = all.compute_all(&series).expect("standard periods are valid");
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("compose", len), &len, |b, _| {
            b.iter(|| compose(black_box(&series), &indicators, &ChartOptions::default()));
        });

        let mut report = Report::default();
        report.push(
            series.ticker().clone(),
            compose(&series, &indicators, &ChartOptions::default()),
        );
        let temp_dir = TempDir::new().expect("temp dir");
        for format in OutputFormat::all() {
            let path = temp_dir.path().join(format!("report.{}", format.extension()));
            group.bench_with_input(
                BenchmarkId::new(format!("write_{format}"), len),
                &report,
                |b, report| {
                    b.iter(|| write_report(report, &path, *format));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, indicator_benchmark, chart_benchmark);
criterion_main!(benches);
