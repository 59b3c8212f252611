use std::fmt::Write;
use std::path::{Path, PathBuf};

use super::Context;
use crate::storage::default_export_file_name;

pub(super) fn export(out: &mut String, ctx: &Context, path: Option<&Path>) -> color_eyre::Result<()> {
    let dest = path.map_or_else(|| PathBuf::from(default_export_file_name(ctx.today)), Path::to_path_buf);
    let snapshot = ctx.load_snapshot()?;

    ctx.data.export_snapshot(&snapshot, &dest)?;
    tracing::info!(snapshot = ctx.snapshot_name(), dest = %dest.display(), "snapshot exported");
    writeln!(out, "Exported '{}' to {}", ctx.snapshot_name(), dest.display())?;
    Ok(())
}

pub(super) fn import(out: &mut String, ctx: &Context, path: &Path) -> color_eyre::Result<()> {
    let snapshot = ctx.data.import_snapshot(ctx.snapshot_name(), path)?;
    writeln!(
        out,
        "Imported {} into '{}': {} incomes, {} expenses, {} loans",
        path.display(),
        ctx.snapshot_name(),
        snapshot.recurring_income.len(),
        snapshot.recurring_expenses.len(),
        snapshot.loans.len()
    )?;
    Ok(())
}
