//! Loan terms and derived loan figures

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::ItemId;

/// An amortizing loan with a fixed monthly payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: ItemId,
    pub title: String,
    /// Principal owed as of `start_date`
    pub outstanding_balance: f64,
    pub monthly_payment: f64,
    /// Nominal annual rate as a percentage (e.g. 3.5 for 3.5%)
    #[serde(rename = "interestRate")]
    pub interest_rate_percent: f64,
    pub start_date: Date,
    pub maturity_date: Date,
}

impl Loan {
    /// Monthly compounding rate as a fraction
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate_percent / 100.0 / 12.0
    }
}

/// Point-in-time figures for a loan
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDetails {
    pub current_balance: f64,
    pub monthly_payment: f64,
    pub months_remaining: i32,
    /// `monthly_payment * months_remaining`, not discounted
    pub total_remaining: f64,
}
