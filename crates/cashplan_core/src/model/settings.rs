//! Snapshot-wide settings and the house-sale scenario

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::ItemId;
use super::tax_config::IrpfBracket;

fn default_true() -> bool {
    true
}

/// Engine knobs shared by every projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub starting_balance: f64,
    /// Uniform uplift applied to recurring expenses (e.g. 10.0 for +10%)
    #[serde(rename = "monthlyExpensesDeviation", default)]
    pub monthly_expenses_deviation_percent: f64,
    /// Gates every IVA/IRPF computation
    #[serde(default = "default_true")]
    pub is_freelance_mode: bool,
    #[serde(default)]
    pub irpf_brackets: Vec<IrpfBracket>,
    /// Last horizon chosen for progress tracking (ISO timestamp, opaque to the engine)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_tracking_date: Option<String>,
    /// Last month viewed on the dashboard (ISO timestamp, opaque to the engine)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_date: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_balance: 0.0,
            monthly_expenses_deviation_percent: 0.0,
            is_freelance_mode: true,
            irpf_brackets: Vec::new(),
            progress_tracking_date: None,
            dashboard_date: None,
        }
    }
}

impl Settings {
    /// Multiplier applied to the month's recurring expenses
    pub fn expense_multiplier(&self) -> f64 {
        1.0 + self.monthly_expenses_deviation_percent / 100.0
    }
}

/// Scenario in which the house is sold and selected loans are cancelled
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingHouse {
    pub sale_amount: f64,
    #[serde(default)]
    pub selected_loan_ids: Vec<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_date: Option<Date>,
}

impl SellingHouse {
    pub fn cancels_loan(&self, loan_id: &ItemId) -> bool {
        self.selected_loan_ids.contains(loan_id)
    }
}
