//! IRPF bracket table
//!
//! The calculation logic lives in the `taxes` module.

use serde::{Deserialize, Serialize};

use super::ids::ItemId;

/// A single marginal bracket of the progressive IRPF scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrpfBracket {
    pub id: ItemId,
    /// Inclusive lower bound of the bracket
    pub from_amount: f64,
    /// Upper bound, `None` for the open top bracket
    pub to_amount: Option<f64>,
    /// Marginal rate as a percentage (e.g. 19.0 for 19%)
    #[serde(rename = "rate")]
    pub rate_percent: f64,
}

impl IrpfBracket {
    pub fn upper_bound(&self) -> f64 {
        self.to_amount.unwrap_or(f64::INFINITY)
    }
}
