//! House-sale scenario
//!
//! Net proceeds of selling the house: agency commission plus VAT on it, the
//! outstanding balance of every loan selected for cancellation, and a safety
//! margin. The proceeds enter projections as a single one-off income entry
//! dated on the selling date, kept in sync by `sync_house_sale_income`.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::loans::loan_details;
use crate::model::{FinancialSnapshot, ItemId, OneOffIncome};

/// Agency commission on the sale price
pub const AGENCY_COMMISSION_RATE: f64 = 0.035;
/// VAT charged on the agency commission
pub const AGENCY_VAT_RATE: f64 = 0.21;
/// Share of the remaining proceeds held back as a margin
pub const SAFETY_MARGIN_RATE: f64 = 0.10;

pub const HOUSE_SALE_INCOME_ID: &str = "house-sale-income";
pub const HOUSE_SALE_INCOME_TITLE: &str = "House Sale Proceeds";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseSaleBreakdown {
    pub sale_amount: f64,
    pub agency_commission: f64,
    pub agency_vat: f64,
    pub total_agency_fee: f64,
    pub amount_after_agency: f64,
    /// Outstanding balance of the selected loans
    pub loans_to_pay: f64,
    pub amount_before_margin: f64,
    pub safety_margin: f64,
    pub final_amount: f64,
}

/// Proceeds breakdown with loan balances evaluated on `as_of`.
///
/// Without a house-sale scenario every figure is zero.
pub fn house_sale_breakdown(snapshot: &FinancialSnapshot, as_of: Date) -> HouseSaleBreakdown {
    let Some(sale) = &snapshot.selling_house else {
        return HouseSaleBreakdown::default();
    };

    let sale_amount = sale.sale_amount;
    let agency_commission = sale_amount * AGENCY_COMMISSION_RATE;
    let agency_vat = agency_commission * AGENCY_VAT_RATE;
    let total_agency_fee = agency_commission + agency_vat;
    let amount_after_agency = sale_amount - total_agency_fee;

    let loans_to_pay = snapshot
        .loans
        .iter()
        .filter(|loan| sale.cancels_loan(&loan.id))
        .fold(0.0, |sum, loan| sum + loan_details(loan, as_of).current_balance);

    let amount_before_margin = amount_after_agency - loans_to_pay;
    let safety_margin = amount_before_margin * SAFETY_MARGIN_RATE;

    HouseSaleBreakdown {
        sale_amount,
        agency_commission,
        agency_vat,
        total_agency_fee,
        amount_after_agency,
        loans_to_pay,
        amount_before_margin,
        safety_margin,
        final_amount: amount_before_margin - safety_margin,
    }
}

/// Copy of `snapshot` whose one-off income reflects the house sale.
///
/// With a selling date and a positive sale amount there is exactly one entry
/// marked `is_from_house_sale`, carrying the final amount on the selling
/// date. An existing entry is overwritten where it stands and keeps its id;
/// a new one is appended. Otherwise every such entry is removed.
pub fn sync_house_sale_income(snapshot: &FinancialSnapshot, as_of: Date) -> FinancialSnapshot {
    let mut synced = snapshot.clone();

    let sale = snapshot
        .selling_house
        .as_ref()
        .filter(|sale| sale.sale_amount > 0.0);

    let mut proceeds = None;
    if let Some(sale) = sale
        && let Some(selling_date) = sale.selling_date
    {
        let breakdown = house_sale_breakdown(snapshot, as_of);
        tracing::debug!(
            amount = breakdown.final_amount,
            date = %selling_date,
            "house sale income synced"
        );
        proceeds = Some(OneOffIncome {
            id: ItemId::from(HOUSE_SALE_INCOME_ID),
            title: HOUSE_SALE_INCOME_TITLE.to_string(),
            amount: breakdown.final_amount,
            date: selling_date,
            is_from_house_sale: true,
            iva_percent: None,
            irpf_percent: None,
        });
    }

    // First marked entry takes the proceeds, later duplicates are dropped
    synced.one_off_income.retain_mut(|item| {
        if !item.is_from_house_sale {
            return true;
        }
        match proceeds.take() {
            Some(mut entry) => {
                entry.id = item.id.clone();
                *item = entry;
                true
            }
            None => false,
        }
    });
    synced.one_off_income.extend(proceeds);

    synced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SellingHouse;

    #[test]
    fn test_breakdown_without_loans() {
        let snapshot = FinancialSnapshot {
            selling_house: Some(SellingHouse {
                sale_amount: 200_000.0,
                selected_loan_ids: vec![],
                selling_date: None,
            }),
            ..Default::default()
        };
        let b = house_sale_breakdown(&snapshot, jiff::civil::date(2025, 1, 1));
        assert!((b.agency_commission - 7_000.0).abs() < 1e-9);
        assert!((b.agency_vat - 1_470.0).abs() < 1e-9);
        assert!((b.amount_after_agency - 191_530.0).abs() < 1e-9);
        assert!((b.safety_margin - 19_153.0).abs() < 1e-9);
        assert!((b.final_amount - 172_377.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_without_scenario_is_zero() {
        let b = house_sale_breakdown(&FinancialSnapshot::default(), jiff::civil::date(2025, 1, 1));
        assert_eq!(b, HouseSaleBreakdown::default());
    }
}
