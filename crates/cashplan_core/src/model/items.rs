//! Recurring and one-off cash items
//!
//! Recurring items are monthly amounts with an optional inclusive activity
//! window. One-off items land in the single month of their `date`.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::ItemId;

/// Monthly income, gross of IVA and IRPF withholding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringIncome {
    pub id: ItemId,
    pub title: String,
    /// Gross amount per month
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    /// IVA added on top of the invoice (e.g. 21.0 for 21%)
    #[serde(rename = "iva", default, skip_serializing_if = "Option::is_none")]
    pub iva_percent: Option<f64>,
    /// IRPF withheld by the payer (e.g. 15.0 for 15%)
    #[serde(rename = "irpf", default, skip_serializing_if = "Option::is_none")]
    pub irpf_percent: Option<f64>,
}

/// Monthly expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub id: ItemId,
    pub title: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    /// Deductible against freelance income
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_professional: bool,
}

/// Single income event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneOffIncome {
    pub id: ItemId,
    pub title: String,
    pub amount: f64,
    pub date: Date,
    /// Entry generated from the house-sale scenario
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_from_house_sale: bool,
    #[serde(rename = "iva", default, skip_serializing_if = "Option::is_none")]
    pub iva_percent: Option<f64>,
    #[serde(rename = "irpf", default, skip_serializing_if = "Option::is_none")]
    pub irpf_percent: Option<f64>,
}

/// Single expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneOffExpense {
    pub id: ItemId,
    pub title: String,
    pub amount: f64,
    pub date: Date,
}
