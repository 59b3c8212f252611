//! Builders for individual snapshot items
//!
//! Ids are assigned by `SnapshotBuilder` when the item is added.

use jiff::civil::Date;

use crate::model::{ItemId, Loan, RecurringExpense, RecurringIncome};

/// Builder for a recurring income
#[derive(Debug, Clone)]
pub struct IncomeBuilder {
    pub(crate) title: String,
    pub(crate) amount: f64,
    pub(crate) start_date: Option<Date>,
    pub(crate) end_date: Option<Date>,
    pub(crate) iva_percent: Option<f64>,
    pub(crate) irpf_percent: Option<f64>,
}

impl IncomeBuilder {
    #[must_use]
    pub fn new(title: &str, amount: f64) -> Self {
        Self {
            title: title.to_string(),
            amount,
            start_date: None,
            end_date: None,
            iva_percent: None,
            irpf_percent: None,
        }
    }

    #[must_use]
    pub fn iva(mut self, percent: f64) -> Self {
        self.iva_percent = Some(percent);
        self
    }

    #[must_use]
    pub fn irpf(mut self, percent: f64) -> Self {
        self.irpf_percent = Some(percent);
        self
    }

    #[must_use]
    pub fn starting(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub fn until(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    pub(crate) fn build(self, id: ItemId) -> RecurringIncome {
        RecurringIncome {
            id,
            title: self.title,
            amount: self.amount,
            start_date: self.start_date,
            end_date: self.end_date,
            iva_percent: self.iva_percent,
            irpf_percent: self.irpf_percent,
        }
    }
}

/// Builder for a recurring expense
#[derive(Debug, Clone)]
pub struct ExpenseBuilder {
    pub(crate) title: String,
    pub(crate) amount: f64,
    pub(crate) start_date: Option<Date>,
    pub(crate) end_date: Option<Date>,
    pub(crate) is_professional: bool,
}

impl ExpenseBuilder {
    #[must_use]
    pub fn new(title: &str, amount: f64) -> Self {
        Self {
            title: title.to_string(),
            amount,
            start_date: None,
            end_date: None,
            is_professional: false,
        }
    }

    /// Mark as deductible against freelance income
    #[must_use]
    pub fn professional(mut self) -> Self {
        self.is_professional = true;
        self
    }

    #[must_use]
    pub fn starting(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub fn until(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    pub(crate) fn build(self, id: ItemId) -> RecurringExpense {
        RecurringExpense {
            id,
            title: self.title,
            amount: self.amount,
            start_date: self.start_date,
            end_date: self.end_date,
            is_professional: self.is_professional,
        }
    }
}

/// Builder for a loan
///
/// Defaults to a zero-rate, zero-payment loan running 2000-01-01 .. 2100-01-01.
#[derive(Debug, Clone)]
pub struct LoanBuilder {
    pub(crate) title: String,
    pub(crate) outstanding_balance: f64,
    pub(crate) monthly_payment: f64,
    pub(crate) interest_rate_percent: f64,
    pub(crate) start_date: Date,
    pub(crate) maturity_date: Date,
}

impl LoanBuilder {
    #[must_use]
    pub fn new(title: &str, outstanding_balance: f64) -> Self {
        Self {
            title: title.to_string(),
            outstanding_balance,
            monthly_payment: 0.0,
            interest_rate_percent: 0.0,
            start_date: jiff::civil::date(2000, 1, 1),
            maturity_date: jiff::civil::date(2100, 1, 1),
        }
    }

    #[must_use]
    pub fn payment(mut self, monthly_payment: f64) -> Self {
        self.monthly_payment = monthly_payment;
        self
    }

    /// Nominal annual rate in percent
    #[must_use]
    pub fn rate(mut self, percent: f64) -> Self {
        self.interest_rate_percent = percent;
        self
    }

    #[must_use]
    pub fn term(mut self, start: Date, maturity: Date) -> Self {
        self.start_date = start;
        self.maturity_date = maturity;
        self
    }

    pub(crate) fn build(self, id: ItemId) -> Loan {
        Loan {
            id,
            title: self.title,
            outstanding_balance: self.outstanding_balance,
            monthly_payment: self.monthly_payment,
            interest_rate_percent: self.interest_rate_percent,
            start_date: self.start_date,
            maturity_date: self.maturity_date,
        }
    }
}
