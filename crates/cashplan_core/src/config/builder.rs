//! Snapshot Builder
//!
//! Fluent construction of a `FinancialSnapshot` with automatic id
//! assignment. Ids follow `<kind>-<n>` (`income-1`, `loan-2`, ...) in the
//! order items are added, so tests can refer to them predictably; use
//! `loan_id` to look one up by title.

use jiff::civil::Date;

use super::item_builder::{ExpenseBuilder, IncomeBuilder, LoanBuilder};
use crate::model::{
    FinancialSnapshot, IrpfBracket, ItemId, OneOffExpense, OneOffIncome, SellingHouse,
};

/// Builder for creating snapshots with automatic id assignment
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    snapshot: FinancialSnapshot,
    pending_sale: Option<PendingSale>,
}

#[derive(Debug, Clone)]
struct PendingSale {
    sale_amount: f64,
    selling_date: Option<Date>,
    loan_titles: Vec<String>,
}

fn next_id(kind: &str, len: usize) -> ItemId {
    ItemId(format!("{kind}-{}", len + 1))
}

impl SnapshotBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Settings
    // =========================================================================

    #[must_use]
    pub fn starting_balance(mut self, balance: f64) -> Self {
        self.snapshot.settings.starting_balance = balance;
        self
    }

    /// Uplift applied to recurring expenses, in percent
    #[must_use]
    pub fn expense_deviation(mut self, percent: f64) -> Self {
        self.snapshot.settings.monthly_expenses_deviation_percent = percent;
        self
    }

    #[must_use]
    pub fn freelance(mut self, enabled: bool) -> Self {
        self.snapshot.settings.is_freelance_mode = enabled;
        self
    }

    #[must_use]
    pub fn bracket(mut self, from_amount: f64, to_amount: Option<f64>, rate_percent: f64) -> Self {
        let brackets = &mut self.snapshot.settings.irpf_brackets;
        brackets.push(IrpfBracket {
            id: next_id("bracket", brackets.len()),
            from_amount,
            to_amount,
            rate_percent,
        });
        self
    }

    // =========================================================================
    // Items
    // =========================================================================

    #[must_use]
    pub fn income(mut self, income: IncomeBuilder) -> Self {
        let id = next_id("income", self.snapshot.recurring_income.len());
        self.snapshot.recurring_income.push(income.build(id));
        self
    }

    #[must_use]
    pub fn expense(mut self, expense: ExpenseBuilder) -> Self {
        let id = next_id("expense", self.snapshot.recurring_expenses.len());
        self.snapshot.recurring_expenses.push(expense.build(id));
        self
    }

    #[must_use]
    pub fn loan(mut self, loan: LoanBuilder) -> Self {
        let id = next_id("loan", self.snapshot.loans.len());
        self.snapshot.loans.push(loan.build(id));
        self
    }

    #[must_use]
    pub fn one_off_income(mut self, title: &str, amount: f64, date: Date) -> Self {
        let id = next_id("one-off-income", self.snapshot.one_off_income.len());
        self.snapshot.one_off_income.push(OneOffIncome {
            id,
            title: title.to_string(),
            amount,
            date,
            is_from_house_sale: false,
            iva_percent: None,
            irpf_percent: None,
        });
        self
    }

    /// One-off invoice with IVA and IRPF percentages
    #[must_use]
    pub fn one_off_invoice(mut self, title: &str, amount: f64, date: Date, iva: f64, irpf: f64) -> Self {
        let id = next_id("one-off-income", self.snapshot.one_off_income.len());
        self.snapshot.one_off_income.push(OneOffIncome {
            id,
            title: title.to_string(),
            amount,
            date,
            is_from_house_sale: false,
            iva_percent: Some(iva),
            irpf_percent: Some(irpf),
        });
        self
    }

    #[must_use]
    pub fn one_off_expense(mut self, title: &str, amount: f64, date: Date) -> Self {
        let id = next_id("one-off-expense", self.snapshot.one_off_expenses.len());
        self.snapshot.one_off_expenses.push(OneOffExpense {
            id,
            title: title.to_string(),
            amount,
            date,
        });
        self
    }

    /// House sale cancelling the loans with the given titles.
    ///
    /// Titles are resolved to ids at `build` time, so loans may be added later.
    #[must_use]
    pub fn house_sale(mut self, sale_amount: f64, selling_date: Option<Date>, loan_titles: &[&str]) -> Self {
        self.pending_sale = Some(PendingSale {
            sale_amount,
            selling_date,
            loan_titles: loan_titles.iter().map(|t| t.to_string()).collect(),
        });
        self
    }

    /// Id of the loan with `title`, if one was added
    pub fn loan_id(&self, title: &str) -> Option<ItemId> {
        self.snapshot
            .loans
            .iter()
            .find(|l| l.title == title)
            .map(|l| l.id.clone())
    }

    pub fn build(self) -> FinancialSnapshot {
        let mut snapshot = self.snapshot;

        if let Some(sale) = self.pending_sale {
            let selected_loan_ids = snapshot
                .loans
                .iter()
                .filter(|l| sale.loan_titles.contains(&l.title))
                .map(|l| l.id.clone())
                .collect();
            snapshot.selling_house = Some(SellingHouse {
                sale_amount: sale.sale_amount,
                selected_loan_ids,
                selling_date: sale.selling_date,
            });
        }

        snapshot
    }
}
