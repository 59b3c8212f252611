//! Criterion benchmarks for cashplan_core projections
//!
//! Run with: cargo bench -p cashplan_core

use cashplan_core::config::{ExpenseBuilder, IncomeBuilder, LoanBuilder, SnapshotBuilder};
use cashplan_core::loans::{AmortizationSchedule, amortization_state};
use cashplan_core::model::FinancialSnapshot;
use cashplan_core::projection::project;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jiff::civil::date;

fn create_household_snapshot() -> FinancialSnapshot {
    let mut builder = SnapshotBuilder::new()
        .starting_balance(15_000.0)
        .expense_deviation(5.0)
        .bracket(0.0, Some(12_450.0), 19.0)
        .bracket(12_450.0, Some(20_200.0), 24.0)
        .bracket(20_200.0, Some(35_200.0), 30.0)
        .bracket(35_200.0, Some(60_000.0), 37.0)
        .bracket(60_000.0, None, 45.0)
        .loan(
            LoanBuilder::new("Mortgage", 180_000.0)
                .payment(850.0)
                .rate(3.2)
                .term(date(2015, 3, 1), date(2045, 3, 1)),
        )
        .loan(
            LoanBuilder::new("Car", 18_000.0)
                .payment(320.0)
                .rate(6.5)
                .term(date(2023, 9, 1), date(2029, 9, 1)),
        )
        .house_sale(320_000.0, Some(date(2030, 6, 1)), &["Mortgage"]);

    // Tens of items with staggered windows
    for i in 0..12i8 {
        let start = date(2024 + i16::from(i % 4), i % 12 + 1, 1);
        builder = builder
            .income(
                IncomeBuilder::new(&format!("Client {i}"), 1_500.0 + f64::from(i) * 100.0)
                    .iva(21.0)
                    .irpf(15.0)
                    .starting(start),
            )
            .expense(ExpenseBuilder::new(&format!("Expense {i}"), 150.0 + f64::from(i) * 10.0))
            .expense(
                ExpenseBuilder::new(&format!("Tools {i}"), 40.0)
                    .professional()
                    .until(date(2032, 12, 31)),
            )
            .one_off_expense(&format!("Trip {i}"), 900.0, date(2026 + i16::from(i % 5), 8, 10));
    }

    builder.build()
}

fn bench_ten_year_projection(c: &mut Criterion) {
    let snapshot = create_household_snapshot();
    c.bench_function("projection_10yr", |b| {
        b.iter(|| {
            project(
                black_box(&snapshot),
                black_box(date(2025, 1, 15)),
                black_box(date(2034, 12, 31)),
            )
        })
    });
}

fn bench_horizons(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_horizon");
    let snapshot = create_household_snapshot();

    for years in [1i16, 5, 10, 30].iter() {
        let horizon = date(2025 + years, 1, 1);
        group.bench_with_input(BenchmarkId::new("years", years), years, |b, _| {
            b.iter(|| project(black_box(&snapshot), black_box(date(2025, 1, 1)), black_box(horizon)))
        });
    }
    group.finish();
}

fn bench_amortization(c: &mut Criterion) {
    let mut group = c.benchmark_group("amortization_120_months");
    let snapshot = create_household_snapshot();
    let mortgage = &snapshot.loans[0];

    group.bench_function("from_origin", |b| {
        b.iter(|| {
            let mut month = date(2025, 1, 1);
            let mut total = 0.0;
            for _ in 0..120 {
                total += amortization_state(black_box(mortgage), month).balance;
                month = month.saturating_add(jiff::Span::new().months(1));
            }
            total
        })
    });

    group.bench_function("schedule", |b| {
        b.iter(|| {
            AmortizationSchedule::new(black_box(mortgage), date(2025, 1, 1))
                .take(120)
                .fold(0.0, |total, entry| total + entry.balance)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_ten_year_projection,
    bench_horizons,
    bench_amortization,
);
criterion_main!(benches);
