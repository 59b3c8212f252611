//! Net-of-tax income amounts
//!
//! In freelance mode an invoice collects IVA on top of the gross amount and
//! the payer withholds IRPF from it. Outside freelance mode amounts pass
//! through untouched.

use crate::model::{OneOffIncome, RecurringIncome};

/// Income carrying optional IVA and IRPF percentages
pub trait TaxedIncome {
    fn gross_amount(&self) -> f64;
    fn iva_percent(&self) -> Option<f64>;
    fn irpf_percent(&self) -> Option<f64>;

    /// IVA collected on top of the gross amount
    fn iva_amount(&self) -> f64 {
        self.iva_percent()
            .map_or(0.0, |pct| self.gross_amount() * (pct / 100.0))
    }

    /// IRPF withheld from the gross amount
    fn irpf_withheld(&self) -> f64 {
        self.irpf_percent()
            .map_or(0.0, |pct| self.gross_amount() * (pct / 100.0))
    }
}

impl TaxedIncome for RecurringIncome {
    fn gross_amount(&self) -> f64 {
        self.amount
    }

    fn iva_percent(&self) -> Option<f64> {
        self.iva_percent
    }

    fn irpf_percent(&self) -> Option<f64> {
        self.irpf_percent
    }
}

impl TaxedIncome for OneOffIncome {
    fn gross_amount(&self) -> f64 {
        self.amount
    }

    fn iva_percent(&self) -> Option<f64> {
        self.iva_percent
    }

    fn irpf_percent(&self) -> Option<f64> {
        self.irpf_percent
    }
}

/// Amount actually received for `item`.
pub fn net_amount<T: TaxedIncome + ?Sized>(item: &T, freelance_mode: bool) -> f64 {
    let mut net = item.gross_amount();
    if freelance_mode {
        net += item.iva_amount();
        net -= item.irpf_withheld();
    }
    net
}
