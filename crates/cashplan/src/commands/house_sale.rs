use std::fmt::Write;

use cashplan_core::house_sale::{house_sale_breakdown, sync_house_sale_income};

use super::Context;
use crate::util::format_euro;

pub(super) fn run(out: &mut String, ctx: &Context, apply: bool) -> color_eyre::Result<()> {
    let snapshot = ctx.load_snapshot()?;
    let Some(sale) = &snapshot.selling_house else {
        writeln!(out, "No house sale scenario configured.")?;
        return Ok(());
    };

    let b = house_sale_breakdown(&snapshot, ctx.today);
    match sale.selling_date {
        Some(date) => writeln!(out, "House sale on {date}")?,
        None => writeln!(out, "House sale (no date set)")?,
    }
    writeln!(out, "  Sale amount:          {}", format_euro(b.sale_amount))?;
    writeln!(out, "  Agency commission:    {}", format_euro(b.agency_commission))?;
    writeln!(out, "  VAT on commission:    {}", format_euro(b.agency_vat))?;
    writeln!(out, "  After agency:         {}", format_euro(b.amount_after_agency))?;
    writeln!(out, "  Loans to cancel:      {}", format_euro(b.loans_to_pay))?;
    writeln!(out, "  Before margin:        {}", format_euro(b.amount_before_margin))?;
    writeln!(out, "  Safety margin:        {}", format_euro(b.safety_margin))?;
    writeln!(out, "  Final amount:         {}", format_euro(b.final_amount))?;

    if apply {
        let synced = sync_house_sale_income(&snapshot, ctx.today);
        ctx.save_snapshot(&synced)?;

        if synced.one_off_income.iter().any(|i| i.is_from_house_sale) {
            writeln!(out, "Proceeds saved as one-off income.")?;
        } else {
            writeln!(out, "Proceeds entry removed; set a selling date and amount to add it.")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DataDirectory;
    use cashplan_core::config::SnapshotBuilder;
    use jiff::civil::date;
    use tempfile::TempDir;

    #[test]
    fn test_apply_stores_proceeds() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = Context::open(DataDirectory::new(temp_dir.path().to_path_buf()), date(2025, 1, 1))
            .unwrap();
        let snapshot = SnapshotBuilder::new()
            .house_sale(200_000.0, Some(date(2025, 9, 15)), &[])
            .build();
        ctx.save_snapshot(&snapshot).unwrap();

        let mut out = String::new();
        run(&mut out, &ctx, false).unwrap();
        assert!(out.contains("Final amount:         172.377,00 €"));
        assert!(ctx.load_snapshot().unwrap().one_off_income.is_empty());

        run(&mut out, &ctx, true).unwrap();
        let stored = ctx.load_snapshot().unwrap();
        assert_eq!(stored.one_off_income.len(), 1);
        assert!(stored.one_off_income[0].is_from_house_sale);
    }

    #[test]
    fn test_without_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = Context::open(DataDirectory::new(temp_dir.path().to_path_buf()), date(2025, 1, 1))
            .unwrap();

        let mut out = String::new();
        run(&mut out, &ctx, true).unwrap();
        assert_eq!(out, "No house sale scenario configured.\n");
    }
}
