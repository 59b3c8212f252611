//! Month-by-month balance projection
//!
//! `project` walks calendar months from the month containing `today` through
//! the horizon, threading the running balance. Each month combines recurring
//! income and expenses, loan payments, one-off items and the freelance tax
//! calendar. "Today" is always an argument; nothing here reads the clock.

use jiff::civil::Date;
use rustc_hash::FxHashSet;

use crate::activity::active_in;
use crate::date_math::months_between;
use crate::income::net_amount;
use crate::loans::payment_due;
use crate::model::{
    FinancialSnapshot, ItemId, MonthOverview, MonthlyProjection, ProjectionSummary, YearMonth,
};
use crate::taxes::TaxCalendar;

/// Loans cancelled from the house-sale month onwards
struct LoanCancellation<'a> {
    from: Option<YearMonth>,
    loan_ids: FxHashSet<&'a ItemId>,
}

impl<'a> LoanCancellation<'a> {
    fn new(snapshot: &'a FinancialSnapshot) -> Self {
        match &snapshot.selling_house {
            Some(sale) => Self {
                from: sale.selling_date.map(YearMonth::from_date),
                loan_ids: sale.selected_loan_ids.iter().collect(),
            },
            None => Self {
                from: None,
                loan_ids: FxHashSet::default(),
            },
        }
    }

    fn is_cancelled(&self, loan_id: &ItemId, month: YearMonth) -> bool {
        matches!(self.from, Some(from) if month >= from) && self.loan_ids.contains(loan_id)
    }
}

/// Net recurring income active in the month containing `month_date`
fn recurring_income(snapshot: &FinancialSnapshot, month_date: Date) -> f64 {
    let freelance = snapshot.is_freelance_mode();
    active_in(&snapshot.recurring_income, month_date)
        .fold(0.0, |sum, item| sum + net_amount(item, freelance))
}

/// Recurring expenses active in the month, before the deviation uplift
fn base_expenses(snapshot: &FinancialSnapshot, month_date: Date) -> f64 {
    active_in(&snapshot.recurring_expenses, month_date).fold(0.0, |sum, item| sum + item.amount)
}

/// Project balances from the month containing `today` through `horizon`.
///
/// A horizon before the current month yields an empty vector.
pub fn project(snapshot: &FinancialSnapshot, today: Date, horizon: Date) -> Vec<MonthlyProjection> {
    let freelance = snapshot.is_freelance_mode();
    let expense_multiplier = snapshot.settings.expense_multiplier();
    let cancellation = LoanCancellation::new(snapshot);
    let mut tax_calendar = TaxCalendar::new(snapshot);

    let first = YearMonth::from_date(today);
    let capacity = months_between(first.first_day(), horizon).max(-1) + 1;
    let mut projections = Vec::with_capacity(capacity as usize);

    let mut current_balance = snapshot.settings.starting_balance;
    let mut cursor = Some(first);

    while let Some(month) = cursor {
        let month_start = month.first_day();
        if month_start > horizon {
            break;
        }

        let total_income = recurring_income(snapshot, month_start);
        let total_expenses = base_expenses(snapshot, month_start) * expense_multiplier;

        let loan_payments = snapshot
            .loans
            .iter()
            .filter(|loan| !cancellation.is_cancelled(&loan.id, month))
            .fold(0.0, |sum, loan| sum + payment_due(loan, month_start));

        let one_off_income = snapshot
            .one_off_income
            .iter()
            .filter(|item| month.contains(item.date))
            .fold(0.0, |sum, item| sum + net_amount(item, freelance));
        let one_off_expenses = snapshot
            .one_off_expenses
            .iter()
            .filter(|item| month.contains(item.date))
            .fold(0.0, |sum, item| sum + item.amount);

        let (irpf_quarterly, iva_payment) = tax_calendar
            .quarterly_payment(month)
            .map_or((0.0, 0.0), |p| (p.irpf_advance, p.iva_return));
        let renta_payment = tax_calendar
            .settlement_due(month)
            .map_or(0.0, |s| s.renta);

        let ending_balance = current_balance + total_income + one_off_income
            - total_expenses
            - one_off_expenses
            - loan_payments
            - irpf_quarterly
            - iva_payment
            - renta_payment;

        projections.push(MonthlyProjection {
            month,
            starting_balance: current_balance,
            total_income,
            total_expenses,
            loan_payments,
            one_off_income,
            one_off_expenses,
            irpf_quarterly,
            iva_payment,
            renta_payment,
            ending_balance,
        });

        current_balance = ending_balance;
        cursor = month.next();
    }

    tracing::debug!(
        from = %first,
        months = projections.len(),
        final_balance = current_balance,
        "projection complete"
    );

    projections
}

/// Project and summarize in one call.
pub fn project_with_summary(
    snapshot: &FinancialSnapshot,
    today: Date,
    horizon: Date,
) -> (Vec<MonthlyProjection>, ProjectionSummary) {
    let projections = project(snapshot, today, horizon);
    let summary = ProjectionSummary::from_projections(snapshot.settings.starting_balance, &projections);
    (projections, summary)
}

/// Quick net figure for the current month.
///
/// Net recurring income minus uplifted recurring expenses minus the fixed
/// payment of every loan, regardless of loan term or house sale.
pub fn monthly_result(snapshot: &FinancialSnapshot, today: Date) -> f64 {
    let total_income = recurring_income(snapshot, today);
    let total_expenses = base_expenses(snapshot, today) * snapshot.settings.expense_multiplier();
    let loan_payments = snapshot
        .loans
        .iter()
        .fold(0.0, |sum, loan| sum + loan.monthly_payment);

    total_income - total_expenses - loan_payments
}

/// Dashboard figures for the month containing `date`.
///
/// Uses gross recurring income. Loans selected in the house sale stop
/// counting once `date` reaches the selling date.
pub fn month_overview(snapshot: &FinancialSnapshot, date: Date) -> MonthOverview {
    let total_income = active_in(&snapshot.recurring_income, date)
        .fold(0.0, |sum, item| sum + item.amount);
    let total_expenses = base_expenses(snapshot, date) * snapshot.settings.expense_multiplier();

    let sale = snapshot
        .selling_house
        .as_ref()
        .filter(|sale| sale.selling_date.is_some_and(|d| date >= d));
    let total_loan_payments = snapshot
        .loans
        .iter()
        .filter(|loan| !sale.is_some_and(|s| s.cancels_loan(&loan.id)))
        .fold(0.0, |sum, loan| sum + loan.monthly_payment);

    MonthOverview {
        total_income,
        total_expenses,
        total_loan_payments,
        monthly_result: total_income - total_expenses - total_loan_payments,
    }
}
