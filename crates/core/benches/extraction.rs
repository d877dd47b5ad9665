use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use idokep_core::{DEFAULT_BASE_URL, Document, extract_current, extract_days, extract_hours, infer_dates};
use url::Url;

fn bench_parse(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/idokep_forecast.html").unwrap();

    c.bench_function("parse_forecast_page", |b| b.iter(|| Document::parse(black_box(&html))));
}

fn bench_extraction(c: &mut Criterion) {
    let current = std::fs::read_to_string("../../tests/fixtures/idokep_current.html").unwrap();
    let forecast = std::fs::read_to_string("../../tests/fixtures/idokep_forecast.html").unwrap();
    let current_doc = Document::parse(&current).unwrap();
    let forecast_doc = Document::parse(&forecast).unwrap();
    let base = Url::parse(DEFAULT_BASE_URL).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 27).unwrap();

    let mut group = c.benchmark_group("extract");

    group.bench_function("current", |b| b.iter(|| extract_current(black_box(&current_doc), &base)));
    group.bench_function("days", |b| b.iter(|| extract_days(black_box(&forecast_doc), &base, today)));
    group.bench_function("hours", |b| b.iter(|| extract_hours(black_box(&forecast_doc), &base)));

    group.finish();
}

fn bench_date_inference(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 12, 2).unwrap();
    let days: Vec<u32> = (1..=31).chain(1..=14).collect();

    c.bench_function("infer_dates_month_rollover", |b| {
        b.iter(|| infer_dates(black_box(today), black_box(&days)))
    });
}

criterion_group!(benches, bench_parse, bench_extraction, bench_date_inference);
criterion_main!(benches);
