//! Spanish freelance tax calculations
//!
//! - Progressive IRPF over a caller-supplied bracket table
//! - Quarterly IRPF advance (flat 20% of net quarter income) and IVA return,
//!   due in January, April, July and October for the preceding quarter
//! - Annual "Renta" settlement, due in July for the previous calendar year
//!
//! Only recurring income and professional recurring expenses enter the tax
//! base; one-off items never do.

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::activity::active_in;
use crate::income::TaxedIncome;
use crate::model::{FinancialSnapshot, IrpfBracket, YearMonth};

/// Flat rate of the quarterly IRPF advance payment
pub const IRPF_ADVANCE_RATE: f64 = 0.20;

/// Month (1-based) in which the annual settlement is paid
pub const RENTA_MONTH: i8 = 7;

// ============================================================================
// Progressive IRPF
// ============================================================================

/// Portion of income falling inside one bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketSlice {
    pub from_amount: f64,
    pub to_amount: Option<f64>,
    pub rate_percent: f64,
    pub taxable_amount: f64,
    pub tax: f64,
}

/// Per-bracket breakdown of the progressive tax on `annual_income`.
///
/// Brackets are applied in ascending `from_amount` order and iteration stops
/// at the first bracket the income does not reach. Gaps and overlaps in the
/// table are not validated.
pub fn tax_breakdown(annual_income: f64, brackets: &[IrpfBracket]) -> Vec<BracketSlice> {
    if annual_income <= 0.0 || brackets.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&IrpfBracket> = brackets.iter().collect();
    sorted.sort_by(|a, b| a.from_amount.total_cmp(&b.from_amount));

    let mut slices = Vec::with_capacity(sorted.len());
    for bracket in sorted {
        if annual_income <= bracket.from_amount {
            break;
        }

        let taxable = annual_income.min(bracket.upper_bound()) - bracket.from_amount;
        if taxable > 0.0 {
            slices.push(BracketSlice {
                from_amount: bracket.from_amount,
                to_amount: bracket.to_amount,
                rate_percent: bracket.rate_percent,
                taxable_amount: taxable,
                tax: taxable * (bracket.rate_percent / 100.0),
            });
        }
    }

    slices
}

/// Total progressive IRPF owed on `annual_income`.
pub fn calculate_progressive_tax(annual_income: f64, brackets: &[IrpfBracket]) -> f64 {
    tax_breakdown(annual_income, brackets)
        .iter()
        .fold(0.0, |total, slice| total + slice.tax)
}

// ============================================================================
// Tax bases
// ============================================================================

/// Calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// First month (1-based) of the quarter
    pub fn first_month(self) -> i8 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 4,
            Quarter::Q3 => 7,
            Quarter::Q4 => 10,
        }
    }

    pub fn months(self) -> [i8; 3] {
        let first = self.first_month();
        [first, first + 1, first + 2]
    }
}

/// A specific quarter of a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuarterRef {
    pub year: i16,
    pub quarter: Quarter,
}

/// Quarter settled by a payment falling in `month`, if `month` is a due month.
///
/// April, July and October settle the previous quarter of the same year;
/// January settles Q4 of the previous year.
pub fn quarter_due_in(month: YearMonth) -> Option<QuarterRef> {
    let (year, quarter) = match month.month {
        1 => (month.year - 1, Quarter::Q4),
        4 => (month.year, Quarter::Q1),
        7 => (month.year, Quarter::Q2),
        10 => (month.year, Quarter::Q3),
        _ => return None,
    };
    Some(QuarterRef { year, quarter })
}

/// First day of `year`-`month`, or `None` outside jiff's civil date range.
fn month_date(year: i16, month: i8) -> Option<Date> {
    Date::new(year, month, 1).ok()
}

/// Sums over one quarter of recurring activity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterTaxBase {
    /// Gross recurring income
    pub income: f64,
    pub iva: f64,
    pub professional_expenses: f64,
}

impl QuarterTaxBase {
    pub fn net_income(&self) -> f64 {
        (self.income - self.professional_expenses).max(0.0)
    }

    pub fn irpf_advance(&self) -> f64 {
        self.net_income() * IRPF_ADVANCE_RATE
    }
}

/// Recurring income, IVA and professional expenses active during `quarter`.
pub fn quarter_tax_base(snapshot: &FinancialSnapshot, quarter: QuarterRef) -> QuarterTaxBase {
    let mut base = QuarterTaxBase::default();

    for d in quarter.quarter.months().into_iter().filter_map(|m| month_date(quarter.year, m)) {
        for item in active_in(&snapshot.recurring_income, d) {
            base.income += item.amount;
            base.iva += item.iva_amount();
        }
        for item in active_in(&snapshot.recurring_expenses, d).filter(|e| e.is_professional) {
            base.professional_expenses += item.amount;
        }
    }

    base
}

/// Sums over one calendar year of recurring activity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearTaxBase {
    /// Gross recurring income
    pub income: f64,
    pub irpf_withheld: f64,
    pub iva_collected: f64,
    pub professional_expenses: f64,
}

impl YearTaxBase {
    pub fn net_taxable_income(&self) -> f64 {
        (self.income - self.professional_expenses).max(0.0)
    }
}

/// Recurring income, withholding, IVA and professional expenses active during `year`.
pub fn year_tax_base(snapshot: &FinancialSnapshot, year: i16) -> YearTaxBase {
    let mut base = YearTaxBase::default();

    for d in (1..=12).filter_map(|m| month_date(year, m)) {
        for item in active_in(&snapshot.recurring_income, d) {
            base.income += item.amount;
            base.irpf_withheld += item.irpf_withheld();
            base.iva_collected += item.iva_amount();
        }
        for item in active_in(&snapshot.recurring_expenses, d).filter(|e| e.is_professional) {
            base.professional_expenses += item.amount;
        }
    }

    base
}

/// 20% advances over the four calendar quarters of `year`, each clamped separately.
pub fn annual_advance_payments(snapshot: &FinancialSnapshot, year: i16) -> f64 {
    Quarter::ALL.iter().fold(0.0, |total, &quarter| {
        total + quarter_tax_base(snapshot, QuarterRef { year, quarter }).irpf_advance()
    })
}

// ============================================================================
// Payments
// ============================================================================

/// Quarterly IRPF advance and IVA return due in a given month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyPayment {
    pub quarter: QuarterRef,
    pub irpf_advance: f64,
    pub iva_return: f64,
}

/// Quarterly payment due in `month`.
///
/// `None` outside the due months or when freelance mode is off.
pub fn quarterly_payment(snapshot: &FinancialSnapshot, month: YearMonth) -> Option<QuarterlyPayment> {
    if !snapshot.is_freelance_mode() {
        return None;
    }
    let quarter = quarter_due_in(month)?;
    let base = quarter_tax_base(snapshot, quarter);

    Some(QuarterlyPayment {
        quarter,
        irpf_advance: base.irpf_advance(),
        // Collected IVA is paid back in full, no input IVA deduction
        iva_return: base.iva,
    })
}

/// Annual IRPF settlement for one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSettlement {
    /// Year being settled
    pub year: i16,
    pub base: YearTaxBase,
    pub net_taxable_income: f64,
    /// IRPF owed on the bracket table
    pub irpf_due: f64,
    pub advance_payments: f64,
    /// Balancing payment, never negative
    pub renta: f64,
}

impl AnnualSettlement {
    /// Income actually received over the year: gross + IVA - withholding
    pub fn net_income(&self) -> f64 {
        self.base.income + self.base.iva_collected - self.base.irpf_withheld
    }
}

fn settle(snapshot: &FinancialSnapshot, year: i16, base: YearTaxBase) -> AnnualSettlement {
    let net_taxable_income = base.net_taxable_income();

    if !snapshot.is_freelance_mode() {
        return AnnualSettlement {
            year,
            base,
            net_taxable_income,
            ..Default::default()
        };
    }

    let irpf_due = calculate_progressive_tax(net_taxable_income, &snapshot.settings.irpf_brackets);
    let advance_payments = annual_advance_payments(snapshot, year);
    let renta = (irpf_due - advance_payments - base.irpf_withheld).max(0.0);

    AnnualSettlement {
        year,
        base,
        net_taxable_income,
        irpf_due,
        advance_payments,
        renta,
    }
}

/// Settlement of `year`, computed independently of any projection.
///
/// Tax figures are zero when freelance mode is off; the income base is
/// always filled in. Returns `None` for a year outside jiff's civil date
/// range (-9999..=9999).
pub fn settle_year(snapshot: &FinancialSnapshot, year: i16) -> Option<AnnualSettlement> {
    if !(Date::MIN.year()..=Date::MAX.year()).contains(&year) {
        return None;
    }
    Some(settle(snapshot, year, year_tax_base(snapshot, year)))
}

// ============================================================================
// Per-run calendar
// ============================================================================

/// Tax payment calendar for a single projection run.
///
/// Memoizes yearly tax bases so each settled year is aggregated once per run.
pub struct TaxCalendar<'a> {
    snapshot: &'a FinancialSnapshot,
    year_bases: FxHashMap<i16, YearTaxBase>,
}

impl<'a> TaxCalendar<'a> {
    pub fn new(snapshot: &'a FinancialSnapshot) -> Self {
        Self {
            snapshot,
            year_bases: FxHashMap::default(),
        }
    }

    fn year_base(&mut self, year: i16) -> YearTaxBase {
        let snapshot = self.snapshot;
        *self
            .year_bases
            .entry(year)
            .or_insert_with(|| year_tax_base(snapshot, year))
    }

    pub fn quarterly_payment(&self, month: YearMonth) -> Option<QuarterlyPayment> {
        quarterly_payment(self.snapshot, month)
    }

    /// Settlement of the previous year when `month` is July, else `None`.
    pub fn settlement_due(&mut self, month: YearMonth) -> Option<AnnualSettlement> {
        if !self.snapshot.is_freelance_mode() || month.month != RENTA_MONTH {
            return None;
        }

        let year = month.year - 1;
        let base = self.year_base(year);
        let settlement = settle(self.snapshot, year, base);

        tracing::debug!(
            payment_month = %month,
            settled_year = year,
            income = base.income,
            professional_expenses = base.professional_expenses,
            net_taxable_income = settlement.net_taxable_income,
            irpf_withheld = base.irpf_withheld,
            irpf_due = settlement.irpf_due,
            advance_payments = settlement.advance_payments,
            renta = settlement.renta,
            "annual settlement"
        );

        Some(settlement)
    }
}
