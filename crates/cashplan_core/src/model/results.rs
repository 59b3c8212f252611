//! Projection output types
//!
//! Produced fresh by every engine call and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::year_month::YearMonth;

/// Cash flow and balance figures for one projected month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProjection {
    pub month: YearMonth,
    pub starting_balance: f64,
    /// Recurring income, net of IVA/IRPF adjustments
    pub total_income: f64,
    /// Recurring expenses after the deviation uplift
    pub total_expenses: f64,
    pub loan_payments: f64,
    /// One-off income, net of IVA/IRPF adjustments
    pub one_off_income: f64,
    pub one_off_expenses: f64,
    pub irpf_quarterly: f64,
    pub iva_payment: f64,
    pub renta_payment: f64,
    pub ending_balance: f64,
}

impl MonthlyProjection {
    /// Every outflow of the month except one-off expenses
    pub fn recurring_outflows(&self) -> f64 {
        self.total_expenses
            + self.loan_payments
            + self.irpf_quarterly
            + self.iva_payment
            + self.renta_payment
    }

    pub fn tax_payments(&self) -> f64 {
        self.irpf_quarterly + self.iva_payment + self.renta_payment
    }

    pub fn net_change(&self) -> f64 {
        self.ending_balance - self.starting_balance
    }
}

/// Aggregate figures over a whole projection run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub starting_balance: f64,
    /// Ending balance of the last month, 0 when nothing was projected
    pub projected_balance: f64,
    pub total_change: f64,
    /// Quarterly IRPF advances plus annual settlements
    pub total_irpf: f64,
    pub total_iva: f64,
    pub total_income: f64,
    pub total_outflows: f64,
}

impl ProjectionSummary {
    pub fn from_projections(starting_balance: f64, projections: &[MonthlyProjection]) -> Self {
        let projected_balance = projections.last().map_or(0.0, |p| p.ending_balance);

        projections.iter().fold(
            Self {
                starting_balance,
                projected_balance,
                total_change: projected_balance - starting_balance,
                ..Default::default()
            },
            |mut acc, p| {
                acc.total_irpf += p.irpf_quarterly + p.renta_payment;
                acc.total_iva += p.iva_payment;
                acc.total_income += p.total_income + p.one_off_income;
                acc.total_outflows += p.recurring_outflows() + p.one_off_expenses;
                acc
            },
        )
    }
}

/// At-a-glance figures for a single month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOverview {
    /// Gross recurring income active in the month
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_loan_payments: f64,
    pub monthly_result: f64,
}
