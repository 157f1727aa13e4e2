//! Performance benchmarks for the Vacation Points Engine.
//!
//! Covers the pure calculation path (allocation and ranking) and the full
//! HTTP round trip through `/ranking`.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use vacation_points::api::{AppState, create_router};
use vacation_points::calculation::{MonthWeightTable, compute_ranking, score_period};
use vacation_points::config::ConfigLoader;
use vacation_points::models::{Employee, VacationPeriod};
use vacation_points::store::InMemoryRecordStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/standard").expect("Failed to load config");
    AppState::new(config)
}

/// Builds `employee_count` employees with four two-week periods each, spread
/// through the year.
fn create_records(employee_count: u64) -> (Vec<Employee>, Vec<VacationPeriod>) {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let employees = (0..employee_count)
        .map(|id| Employee::new(id, format!("Employee {:05}", id)).unwrap())
        .collect();
    let periods = (0..employee_count)
        .flat_map(|id| {
            (0..4i64).map(move |quarter| {
                let start = base + Duration::days(quarter * 91 + (id as i64 % 60));
                VacationPeriod::new(id, start, start + Duration::days(13)).unwrap()
            })
        })
        .collect();
    (employees, periods)
}

fn create_request_body(employee_count: u64) -> String {
    let (employees, periods) = create_records(employee_count);
    let vacations: Vec<serde_json::Value> = periods
        .iter()
        .map(|p| {
            serde_json::json!({
                "employee_id": p.employee_id,
                "start_date": p.start_date.to_string(),
                "end_date": p.end_date.to_string(),
            })
        })
        .collect();

    serde_json::json!({ "employees": employees, "vacations": vacations }).to_string()
}

/// Benchmark: Scoring one period that spans a month boundary.
fn bench_score_period(c: &mut Criterion) {
    let weights = MonthWeightTable::default();
    let start = NaiveDate::from_ymd_opt(2024, 1, 28).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();

    c.bench_function("score_period", |b| {
        b.iter(|| score_period(black_box(start), black_box(end), &weights))
    });
}

/// Benchmark: Ranking computed directly from a record store.
fn bench_compute_ranking(c: &mut Criterion) {
    let weights = MonthWeightTable::default();
    let mut group = c.benchmark_group("compute_ranking");

    for employee_count in [10u64, 100, 1000] {
        let (employees, periods) = create_records(employee_count);
        let store = InMemoryRecordStore::new(employees, periods, 365).unwrap();

        group.throughput(Throughput::Elements(employee_count));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            &store,
            |b, store| b.iter(|| compute_ranking(black_box(store), &weights)),
        );
    }

    group.finish();
}

/// Benchmark: Full `/ranking` request including JSON handling.
fn bench_ranking_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("ranking_endpoint");

    for employee_count in [10u64, 100] {
        let router = create_router(state.clone());
        let body = create_request_body(employee_count);

        group.throughput(Throughput::Elements(employee_count));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            &employee_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/ranking")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_score_period,
    bench_compute_ranking,
    bench_ranking_endpoint,
);
criterion_main!(benches);
