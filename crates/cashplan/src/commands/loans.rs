use std::fmt::Write;

use cashplan_core::loans::{AmortizationSchedule, loan_details};
use cashplan_core::model::FinancialSnapshot;
use color_eyre::eyre::eyre;
use jiff::civil::Date;

use crate::util::{format_euro, format_percent};

pub(super) fn render_details(out: &mut String, snapshot: &FinancialSnapshot, date: Date) -> std::fmt::Result {
    if snapshot.loans.is_empty() {
        return writeln!(out, "No loans.");
    }

    writeln!(out, "Loans on {date}")?;
    for loan in &snapshot.loans {
        let details = loan_details(loan, date);
        writeln!(out, "{} [{}] at {}", loan.title, loan.id, format_percent(loan.interest_rate_percent))?;
        writeln!(out, "  Balance:          {}", format_euro(details.current_balance))?;
        writeln!(out, "  Monthly payment:  {}", format_euro(details.monthly_payment))?;
        writeln!(out, "  Months remaining: {}", details.months_remaining)?;
        writeln!(out, "  Total remaining:  {}", format_euro(details.total_remaining))?;
    }
    Ok(())
}

pub(super) fn render_schedule(
    out: &mut String,
    snapshot: &FinancialSnapshot,
    loan_id: &str,
    from: Option<Date>,
) -> color_eyre::Result<()> {
    let loan = snapshot
        .loan(loan_id)
        .ok_or_else(|| eyre!("No loan with id '{loan_id}'"))?;

    let schedule = match from {
        Some(from) => AmortizationSchedule::new(loan, from),
        None => AmortizationSchedule::full_term(loan),
    };

    writeln!(out, "{} ({} to {})", loan.title, loan.start_date, loan.maturity_date)?;
    writeln!(out, "{:<8} {:>16} {:>14}", "Month", "Balance", "Payment")?;
    for entry in schedule {
        writeln!(
            out,
            "{:<8} {:>16} {:>14}",
            entry.month.to_string(),
            format_euro(entry.balance),
            format_euro(entry.payment)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashplan_core::config::{LoanBuilder, SnapshotBuilder};
    use jiff::civil::date;

    fn snapshot() -> FinancialSnapshot {
        SnapshotBuilder::new()
            .loan(
                LoanBuilder::new("Car", 1_000.0)
                    .payment(300.0)
                    .term(date(2025, 1, 1), date(2025, 6, 1)),
            )
            .build()
    }

    #[test]
    fn test_render_details() {
        let mut out = String::new();
        render_details(&mut out, &snapshot(), date(2025, 3, 1)).unwrap();
        assert!(out.contains("Car [loan-1] at 0 %"));
        assert!(out.contains("Balance:          400,00 €"));
        assert!(out.contains("Months remaining: 3"));
        assert!(out.contains("Total remaining:  900,00 €"));
    }

    #[test]
    fn test_render_schedule_stops_at_maturity() {
        let mut out = String::new();
        render_schedule(&mut out, &snapshot(), "loan-1", None).unwrap();
        assert!(out.contains("2025-01 "));
        assert!(out.contains("2025-05 "));
        assert!(!out.contains("2025-06 "));
        assert!(out.contains("0,00 €"));
    }

    #[test]
    fn test_render_schedule_from_date() {
        let mut out = String::new();
        render_schedule(&mut out, &snapshot(), "loan-1", Some(date(2025, 3, 20))).unwrap();
        assert!(!out.contains("2025-02 "));
        assert!(out.contains("2025-03 "));
    }
}
