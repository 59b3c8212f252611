use std::fmt::{self, Write};

use cashplan_core::model::FinancialSnapshot;
use cashplan_core::taxes::{AnnualSettlement, tax_breakdown};

use crate::util::{format_euro, format_percent};

pub(super) fn render(
    out: &mut String,
    snapshot: &FinancialSnapshot,
    settlement: &AnnualSettlement,
    income: Option<f64>,
) -> fmt::Result {
    let year = settlement.year;
    let base = &settlement.base;

    writeln!(out, "Tax year {year}")?;
    writeln!(out, "  Income (gross):          {}", format_euro(base.income))?;
    writeln!(out, "  Professional expenses:   {}", format_euro(base.professional_expenses))?;
    writeln!(out, "  Net taxable income:      {}", format_euro(settlement.net_taxable_income))?;
    writeln!(out, "  IVA collected:           {}", format_euro(base.iva_collected))?;
    writeln!(out, "  IRPF withheld:           {}", format_euro(base.irpf_withheld))?;
    writeln!(out, "  Net income received:     {}", format_euro(settlement.net_income()))?;

    if !snapshot.is_freelance_mode() {
        return writeln!(out, "Freelance mode is off; no IVA or IRPF is due.");
    }

    writeln!(out, "  IRPF (brackets):         {}", format_euro(settlement.irpf_due))?;
    writeln!(out, "  Quarterly advances:      {}", format_euro(settlement.advance_payments))?;
    writeln!(
        out,
        "  Renta due July {}:     {}",
        i32::from(year) + 1,
        format_euro(settlement.renta)
    )?;

    let brackets = &snapshot.settings.irpf_brackets;
    if brackets.is_empty() {
        return writeln!(out, "No IRPF brackets configured.");
    }

    let annual_income = income.unwrap_or(settlement.net_taxable_income);
    writeln!(out)?;
    writeln!(out, "Bracket breakdown for {}", format_euro(annual_income))?;
    for slice in tax_breakdown(annual_income, brackets) {
        let upper = slice.to_amount.map_or_else(|| "∞".to_string(), format_euro);
        writeln!(
            out,
            "  {:>14} - {:>14} at {:>6}: {:>14} taxed, {:>12}",
            format_euro(slice.from_amount),
            upper,
            format_percent(slice.rate_percent),
            format_euro(slice.taxable_amount),
            format_euro(slice.tax)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashplan_core::config::{IncomeBuilder, SnapshotBuilder};
    use cashplan_core::model::FinancialSnapshot;
    use cashplan_core::taxes::settle_year;

    fn freelancer() -> SnapshotBuilder {
        SnapshotBuilder::new()
            .bracket(0.0, Some(15_000.0), 19.0)
            .bracket(15_000.0, None, 24.0)
            .income(IncomeBuilder::new("Consulting", 3_000.0).iva(21.0))
    }

    fn render_2024(snapshot: &FinancialSnapshot, income: Option<f64>) -> String {
        let settlement = settle_year(snapshot, 2024).unwrap();
        let mut out = String::new();
        render(&mut out, snapshot, &settlement, income).unwrap();
        out
    }

    #[test]
    fn test_render_settlement_and_breakdown() {
        let out = render_2024(&freelancer().build(), None);

        assert!(out.contains("Net taxable income:      36.000,00 €"));
        assert!(out.contains("IRPF (brackets):         7.890,00 €"));
        assert!(out.contains("Quarterly advances:      7.200,00 €"));
        assert!(out.contains("690,00 €"));
        assert!(out.contains("Bracket breakdown for 36.000,00 €"));
        assert!(out.contains("∞"));
    }

    #[test]
    fn test_render_custom_income_breakdown() {
        let out = render_2024(&freelancer().build(), Some(10_000.0));
        assert!(out.contains("Bracket breakdown for 10.000,00 €"));
        assert!(out.contains("1.900,00 €"));
        assert!(!out.contains("∞"));
    }

    #[test]
    fn test_render_without_freelance_mode() {
        let out = render_2024(&freelancer().freelance(false).build(), None);
        assert!(out.contains("Freelance mode is off"));
        assert!(!out.contains("Bracket breakdown"));
    }
}
