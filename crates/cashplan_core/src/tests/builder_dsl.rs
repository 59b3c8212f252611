//! Tests for the snapshot builder DSL

use jiff::civil::date;

use crate::config::{ExpenseBuilder, IncomeBuilder, LoanBuilder, SnapshotBuilder};
use crate::model::{FinancialSnapshot, ItemId};

#[test]
fn test_default_builder_matches_default_snapshot() {
    let snapshot = SnapshotBuilder::new().build();
    assert_eq!(snapshot, FinancialSnapshot::default());
    assert!(snapshot.is_freelance_mode());
}

#[test]
fn test_ids_assigned_in_insertion_order() {
    let snapshot = SnapshotBuilder::new()
        .income(IncomeBuilder::new("Salary", 2_000.0))
        .income(IncomeBuilder::new("Rental", 600.0))
        .expense(ExpenseBuilder::new("Rent", 900.0))
        .loan(LoanBuilder::new("Car", 9_000.0))
        .bracket(0.0, None, 19.0)
        .one_off_income("Gift", 100.0, date(2025, 1, 1))
        .one_off_expense("Repair", 50.0, date(2025, 1, 1))
        .build();

    assert_eq!(snapshot.recurring_income[0].id.as_str(), "income-1");
    assert_eq!(snapshot.recurring_income[1].id.as_str(), "income-2");
    assert_eq!(snapshot.recurring_expenses[0].id.as_str(), "expense-1");
    assert_eq!(snapshot.loans[0].id.as_str(), "loan-1");
    assert_eq!(snapshot.settings.irpf_brackets[0].id.as_str(), "bracket-1");
    assert_eq!(snapshot.one_off_income[0].id.as_str(), "one-off-income-1");
    assert_eq!(snapshot.one_off_expenses[0].id.as_str(), "one-off-expense-1");
}

#[test]
fn test_item_builders_carry_every_field() {
    let snapshot = SnapshotBuilder::new()
        .income(
            IncomeBuilder::new("Consulting", 3_000.0)
                .iva(21.0)
                .irpf(15.0)
                .starting(date(2025, 2, 1))
                .until(date(2025, 11, 30)),
        )
        .expense(ExpenseBuilder::new("Coworking", 250.0).professional())
        .loan(
            LoanBuilder::new("Mortgage", 150_000.0)
                .payment(700.0)
                .rate(3.1)
                .term(date(2020, 6, 1), date(2045, 6, 1)),
        )
        .build();

    let income = &snapshot.recurring_income[0];
    assert_eq!(income.iva_percent, Some(21.0));
    assert_eq!(income.irpf_percent, Some(15.0));
    assert_eq!(income.start_date, Some(date(2025, 2, 1)));
    assert_eq!(income.end_date, Some(date(2025, 11, 30)));

    assert!(snapshot.recurring_expenses[0].is_professional);

    let loan = &snapshot.loans[0];
    assert_eq!(loan.monthly_payment, 700.0);
    assert_eq!(loan.interest_rate_percent, 3.1);
    assert_eq!(loan.start_date, date(2020, 6, 1));
    assert_eq!(loan.maturity_date, date(2045, 6, 1));
}

#[test]
fn test_settings_knobs() {
    let snapshot = SnapshotBuilder::new()
        .starting_balance(4_321.0)
        .expense_deviation(7.5)
        .freelance(false)
        .build();

    assert_eq!(snapshot.settings.starting_balance, 4_321.0);
    assert_eq!(snapshot.settings.monthly_expenses_deviation_percent, 7.5);
    assert!(!snapshot.is_freelance_mode());
}

#[test]
fn test_house_sale_resolves_titles_added_later() {
    let builder = SnapshotBuilder::new()
        .house_sale(180_000.0, Some(date(2026, 4, 1)), &["Mortgage"])
        .loan(LoanBuilder::new("Car", 9_000.0))
        .loan(LoanBuilder::new("Mortgage", 90_000.0));

    assert_eq!(builder.loan_id("Mortgage"), Some(ItemId::from("loan-2")));
    assert_eq!(builder.loan_id("Boat"), None);

    let snapshot = builder.build();
    let sale = snapshot.selling_house.unwrap();
    assert_eq!(sale.selected_loan_ids, vec![ItemId::from("loan-2")]);
    assert_eq!(sale.selling_date, Some(date(2026, 4, 1)));
    assert_eq!(sale.sale_amount, 180_000.0);
}

#[test]
fn test_snapshot_loan_lookup() {
    let snapshot = SnapshotBuilder::new()
        .loan(LoanBuilder::new("Car", 9_000.0))
        .build();

    assert_eq!(snapshot.loan("loan-1").map(|l| l.title.as_str()), Some("Car"));
    assert!(snapshot.loan("loan-9").is_none());
}
