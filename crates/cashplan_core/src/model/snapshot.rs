//! The engine's sole input

use serde::{Deserialize, Serialize};

use super::items::{OneOffExpense, OneOffIncome, RecurringExpense, RecurringIncome};
use super::loans::Loan;
use super::settings::{SellingHouse, Settings};

/// Complete financial configuration at a point in time
///
/// Every engine entry point takes this by reference and never mutates it.
/// The serialized shape is the application's data file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    #[serde(default)]
    pub recurring_income: Vec<RecurringIncome>,
    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub one_off_expenses: Vec<OneOffExpense>,
    #[serde(default)]
    pub one_off_income: Vec<OneOffIncome>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_house: Option<SellingHouse>,
}

impl FinancialSnapshot {
    pub fn is_freelance_mode(&self) -> bool {
        self.settings.is_freelance_mode
    }

    pub fn loan(&self, id: &str) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id.as_str() == id)
    }
}
