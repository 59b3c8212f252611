use std::fmt::{self, Write};

use cashplan_core::model::{FinancialSnapshot, YearMonth};
use cashplan_core::projection::{month_overview, monthly_result};
use jiff::civil::Date;

use crate::util::format_euro;

pub(super) fn render(out: &mut String, snapshot: &FinancialSnapshot, date: Date, today: Date) -> fmt::Result {
    let overview = month_overview(snapshot, date);

    writeln!(out, "Month {}", YearMonth::from_date(date))?;
    writeln!(out, "  Income (gross):   {}", format_euro(overview.total_income))?;
    writeln!(out, "  Expenses:         {}", format_euro(overview.total_expenses))?;
    writeln!(out, "  Loan payments:    {}", format_euro(overview.total_loan_payments))?;
    writeln!(out, "  Result:           {}", format_euro(overview.monthly_result))?;
    writeln!(out)?;
    writeln!(
        out,
        "Current month result (net of taxes, all loans): {}",
        format_euro(monthly_result(snapshot, today))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashplan_core::config::{ExpenseBuilder, IncomeBuilder, LoanBuilder, SnapshotBuilder};
    use jiff::civil::date;

    #[test]
    fn test_render_month() {
        let snapshot = SnapshotBuilder::new()
            .income(IncomeBuilder::new("Consulting", 2_000.0).iva(21.0).irpf(15.0))
            .expense(ExpenseBuilder::new("Rent", 1_000.0))
            .loan(LoanBuilder::new("Car", 5_000.0).payment(250.0))
            .build();

        let mut out = String::new();
        render(&mut out, &snapshot, date(2025, 2, 3), date(2025, 2, 3)).unwrap();

        assert!(out.starts_with("Month 2025-02"));
        assert!(out.contains("Income (gross):   2.000,00 €"));
        assert!(out.contains("Result:           750,00 €"));
        // 2_120 net - 1_000 - 250
        assert!(out.contains("all loans): 870,00 €"));
    }
}
