use std::fmt::{self, Write};

use cashplan_core::model::{FinancialSnapshot, MonthlyProjection, ProjectionSummary};
use cashplan_core::projection::project_with_summary;
use jiff::civil::Date;

use super::parse_stored_date;
use crate::storage::DataConfig;
use crate::util::{format_euro, format_euro_short};

/// Longest horizon accepted from `--months` or config.yaml (100 years)
const MAX_HORIZON_MONTHS: u32 = 1_200;

fn months_after(today: Date, months: u32) -> Date {
    let span = jiff::Span::new().months(i64::from(months.min(MAX_HORIZON_MONTHS)));
    today.saturating_add(span)
}

/// Horizon for `project`: `--until`, then `--months`, then the snapshot's
/// progress tracking date, then today plus the configured default.
pub fn resolve_horizon(
    snapshot: &FinancialSnapshot,
    config: &DataConfig,
    today: Date,
    until: Option<Date>,
    months: Option<u32>,
) -> Date {
    if let Some(until) = until {
        return until;
    }
    if let Some(months) = months {
        return months_after(today, months);
    }

    snapshot
        .settings
        .progress_tracking_date
        .as_deref()
        .and_then(parse_stored_date)
        .unwrap_or_else(|| months_after(today, config.default_horizon_months))
}

fn render_row(out: &mut String, p: &MonthlyProjection) -> fmt::Result {
    writeln!(
        out,
        "{:<8} {:>12} {:>12} {:>12} {:>11} {:>11} {:>10} {:>10} {:>10} {:>13}",
        p.month.to_string(),
        format_euro_short(p.total_income),
        format_euro_short(p.one_off_income),
        format_euro_short(p.total_expenses),
        format_euro_short(p.loan_payments),
        format_euro_short(p.one_off_expenses),
        format_euro_short(p.irpf_quarterly),
        format_euro_short(p.iva_payment),
        format_euro_short(p.renta_payment),
        format_euro_short(p.ending_balance),
    )
}

fn render_summary(out: &mut String, summary: &ProjectionSummary) -> fmt::Result {
    writeln!(out, "Starting balance:   {}", format_euro(summary.starting_balance))?;
    writeln!(out, "Projected balance:  {}", format_euro(summary.projected_balance))?;
    writeln!(out, "Total change:       {}", format_euro(summary.total_change))?;
    writeln!(out, "Total income:       {}", format_euro(summary.total_income))?;
    writeln!(out, "Total outflows:     {}", format_euro(summary.total_outflows))?;
    writeln!(out, "Total IRPF:         {}", format_euro(summary.total_irpf))?;
    writeln!(out, "Total IVA:          {}", format_euro(summary.total_iva))
}

pub(super) fn render(
    out: &mut String,
    snapshot: &FinancialSnapshot,
    today: Date,
    horizon: Date,
) -> fmt::Result {
    let (months, summary) = project_with_summary(snapshot, today, horizon);
    tracing::info!(%horizon, months = months.len(), "projection rendered");

    if months.is_empty() {
        writeln!(out, "Horizon {horizon} is before the current month; nothing to project.")?;
        return render_summary(out, &summary);
    }

    writeln!(
        out,
        "{:<8} {:>12} {:>12} {:>12} {:>11} {:>11} {:>10} {:>10} {:>10} {:>13}",
        "Month", "Income", "One-off in", "Expenses", "Loans", "One-off out", "IRPF", "IVA", "Renta",
        "Balance"
    )?;
    for p in &months {
        render_row(out, p)?;
    }
    writeln!(out)?;
    render_summary(out, &summary)?;

    let taxes = months.iter().map(MonthlyProjection::tax_payments).sum::<f64>();
    writeln!(out, "Tax payments:       {}", format_euro(taxes))?;
    if let Some(worst) = months
        .iter()
        .min_by(|a, b| a.net_change().total_cmp(&b.net_change()))
    {
        writeln!(
            out,
            "Weakest month:      {} ({})",
            worst.month,
            format_euro(worst.net_change())
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashplan_core::config::SnapshotBuilder;
    use jiff::civil::date;

    #[test]
    fn test_explicit_horizons_win() {
        let snapshot = FinancialSnapshot::default();
        let config = DataConfig::default();
        let today = date(2025, 1, 31);

        assert_eq!(
            resolve_horizon(&snapshot, &config, today, Some(date(2030, 1, 1)), None),
            date(2030, 1, 1)
        );
        assert_eq!(
            resolve_horizon(&snapshot, &config, today, None, Some(1)),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_progress_tracking_date_then_config_default() {
        let mut snapshot = FinancialSnapshot::default();
        let config = DataConfig {
            active_snapshot: None,
            default_horizon_months: 24,
        };
        let today = date(2025, 5, 10);

        assert_eq!(resolve_horizon(&snapshot, &config, today, None, None), date(2027, 5, 10));

        snapshot.settings.progress_tracking_date = Some("2026-12-31T00:00:00.000Z".to_string());
        assert_eq!(resolve_horizon(&snapshot, &config, today, None, None), date(2026, 12, 31));
    }

    #[test]
    fn test_render_reports_weakest_month() {
        let snapshot = SnapshotBuilder::new()
            .freelance(false)
            .starting_balance(1_000.0)
            .one_off_expense("Car repair", 700.0, date(2025, 6, 3))
            .build();
        let mut out = String::new();
        render(&mut out, &snapshot, date(2025, 5, 1), date(2025, 7, 1)).unwrap();
        assert!(out.contains("Weakest month:      2025-06 (-700,00 €)"), "{out}");
        assert!(out.contains("Tax payments:       0,00 €"));
    }

    #[test]
    fn test_render_empty_projection() {
        let snapshot = SnapshotBuilder::new().starting_balance(800.0).build();
        let mut out = String::new();
        render(&mut out, &snapshot, date(2025, 5, 1), date(2025, 4, 30)).unwrap();
        assert!(out.contains("nothing to project"));
        assert!(out.contains("Projected balance:  0,00 €"));
    }
}
