use chrono::{NaiveDateTime, TimeDelta};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forecast_dashboard::{ForecastAggregator, ForecastRecord, ForecastSet, TIMESTAMP_FORMAT};

fn five_day_set() -> ForecastSet {
    let start = NaiveDateTime::parse_from_str("2024-07-29 00:00:00", TIMESTAMP_FORMAT).unwrap();
    let labels = ["clear sky", "few clouds", "scattered clouds", "light rain"];
    (0..40)
        .map(|slot| {
            ForecastRecord::new(
                start + TimeDelta::hours(3 * slot),
                18.0 + (slot % 8) as f64,
                labels[slot as usize % labels.len()],
            )
        })
        .collect::<Vec<_>>()
        .into()
}

fn bench_aggregator(c: &mut Criterion) {
    let set = five_day_set();
    let now = NaiveDateTime::parse_from_str("2024-07-30 10:00:00", TIMESTAMP_FORMAT).unwrap();
    let aggregator = ForecastAggregator::new(&set);

    c.bench_function("category_distribution", |b| {
        b.iter(|| black_box(aggregator).derive_category_distribution())
    });
    c.bench_function("next_day_time_series", |b| {
        b.iter(|| black_box(aggregator).derive_next_day_time_series(black_box(now)))
    });
    c.bench_function("monthly_averages", |b| {
        b.iter(|| black_box(aggregator).derive_monthly_averages())
    });
}

criterion_group!(benches, bench_aggregator);
criterion_main!(benches);
