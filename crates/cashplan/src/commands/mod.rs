//! Subcommands of the `cashplan` binary
//!
//! Every command renders a plain-text report into a `String`; `main` prints
//! it. Commands read the snapshot named in config.yaml and take "today" from
//! the `Context`, never from the clock.

mod house_sale;
mod loans;
mod month;
mod project;
mod taxes;
mod transfer;

use std::path::PathBuf;

use cashplan_core::model::FinancialSnapshot;
use cashplan_core::taxes::settle_year;
use clap::Subcommand;
use color_eyre::eyre::eyre;
use jiff::civil::Date;

use crate::storage::{DataConfig, DataDirectory, StorageError};

pub use project::resolve_horizon;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Month-by-month balance projection with a summary
    Project {
        /// Last day to project (YYYY-MM-DD)
        #[arg(long, conflicts_with = "months")]
        until: Option<Date>,
        /// Number of months after today to project
        #[arg(long)]
        months: Option<u32>,
    },
    /// Income, expenses and loan payments of a single month
    Month {
        /// Any day of the month to show (YYYY-MM-DD)
        #[arg(long)]
        date: Option<Date>,
    },
    /// Outstanding balances of every loan, or one loan's schedule
    Loans {
        /// Date to evaluate balances on, or to start the schedule from (YYYY-MM-DD)
        #[arg(long)]
        date: Option<Date>,
        /// Print the month-by-month schedule of the loan with this id (whole term unless --date)
        #[arg(long)]
        schedule: Option<String>,
    },
    /// Yearly IRPF/IVA summary and bracket breakdown
    Taxes {
        /// Calendar year to settle
        #[arg(long, value_parser = clap::value_parser!(i16).range(-9999..=9999))]
        year: Option<i16>,
        /// Annual income to break down over the brackets instead of the year's taxable income
        #[arg(long)]
        income: Option<f64>,
    },
    /// Net proceeds of the house-sale scenario
    HouseSale {
        /// Store the proceeds as a one-off income entry
        #[arg(long)]
        apply: bool,
    },
    /// Write the active snapshot to a JSON data file
    Export {
        /// Destination (default: ./financial-data-YYYY-MM-DD.json)
        path: Option<PathBuf>,
    },
    /// Replace the active snapshot with a JSON data file
    Import { path: PathBuf },
}

/// Everything a command needs besides its arguments
pub struct Context {
    pub data: DataDirectory,
    pub config: DataConfig,
    pub today: Date,
}

impl Context {
    pub fn open(data: DataDirectory, today: Date) -> Result<Self, StorageError> {
        data.init()?;
        let config = data.load_config()?;
        Ok(Self {
            data,
            config,
            today,
        })
    }

    pub fn snapshot_name(&self) -> &str {
        self.config.active_snapshot_name()
    }

    pub fn load_snapshot(&self) -> Result<FinancialSnapshot, StorageError> {
        self.data.load_snapshot(self.snapshot_name())
    }

    pub fn save_snapshot(&self, snapshot: &FinancialSnapshot) -> Result<(), StorageError> {
        self.data.save_snapshot(self.snapshot_name(), snapshot)
    }
}

/// Run `command` and return its report.
pub fn run(command: &Command, ctx: &Context) -> color_eyre::Result<String> {
    let mut out = String::new();

    match command {
        Command::Project { until, months } => {
            let snapshot = ctx.load_snapshot()?;
            let horizon = resolve_horizon(&snapshot, &ctx.config, ctx.today, *until, *months);
            project::render(&mut out, &snapshot, ctx.today, horizon)?;
        }
        Command::Month { date } => {
            let snapshot = ctx.load_snapshot()?;
            let date = date
                .or_else(|| snapshot.settings.dashboard_date.as_deref().and_then(parse_stored_date))
                .unwrap_or(ctx.today);
            month::render(&mut out, &snapshot, date, ctx.today)?;
        }
        Command::Loans { date, schedule } => {
            let snapshot = ctx.load_snapshot()?;
            match schedule {
                Some(id) => loans::render_schedule(&mut out, &snapshot, id, *date)?,
                None => loans::render_details(&mut out, &snapshot, date.unwrap_or(ctx.today))?,
            }
        }
        Command::Taxes { year, income } => {
            let snapshot = ctx.load_snapshot()?;
            let year = year.unwrap_or(ctx.today.year());
            let settlement = settle_year(&snapshot, year)
                .ok_or_else(|| eyre!("Tax year {year} is outside -9999..=9999"))?;
            taxes::render(&mut out, &snapshot, &settlement, *income)?;
        }
        Command::HouseSale { apply } => house_sale::run(&mut out, ctx, *apply)?,
        Command::Export { path } => transfer::export(&mut out, ctx, path.as_deref())?,
        Command::Import { path } => transfer::import(&mut out, ctx, path)?,
    }

    Ok(out)
}

/// Day part of a date stored as an ISO timestamp (`2025-06-01T00:00:00.000Z`)
pub(crate) fn parse_stored_date(value: &str) -> Option<Date> {
    value.get(..10)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashplan_core::config::{IncomeBuilder, SnapshotBuilder};
    use jiff::civil::date;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> Context {
        Context::open(DataDirectory::new(temp_dir.path().join("data")), date(2025, 3, 14)).unwrap()
    }

    #[test]
    fn test_parse_stored_date() {
        assert_eq!(parse_stored_date("2025-06-01T00:00:00.000Z"), Some(date(2025, 6, 1)));
        assert_eq!(parse_stored_date("2025-06-01"), Some(date(2025, 6, 1)));
        assert_eq!(parse_stored_date("June"), None);
        assert_eq!(parse_stored_date("2025-13-01T00:00"), None);
    }

    #[test]
    fn test_commands_use_active_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);
        ctx.config.active_snapshot = Some("plan".to_string());

        let snapshot = SnapshotBuilder::new()
            .freelance(false)
            .starting_balance(1_000.0)
            .income(IncomeBuilder::new("Salary", 2_000.0))
            .build();
        ctx.save_snapshot(&snapshot).unwrap();

        let report = run(
            &Command::Project {
                until: Some(date(2025, 4, 30)),
                months: None,
            },
            &ctx,
        )
        .unwrap();
        assert!(report.contains("2025-03"));
        assert!(report.contains("2025-04"));
        assert!(report.contains("5.000 €"), "{report}");
    }

    #[test]
    fn test_month_defaults_to_dashboard_date() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let mut snapshot = SnapshotBuilder::new()
            .freelance(false)
            .income(IncomeBuilder::new("Contract", 1_234.0).starting(date(2025, 9, 1)))
            .build();
        snapshot.settings.dashboard_date = Some("2025-09-01T00:00:00.000Z".to_string());
        ctx.save_snapshot(&snapshot).unwrap();

        let report = run(&Command::Month { date: None }, &ctx).unwrap();
        assert!(report.contains("2025-09"), "{report}");
        assert!(report.contains("1.234,00 €"), "{report}");
    }

    #[derive(clap::Parser, Debug)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_taxes_year_limited_to_calendar_range() {
        use clap::Parser;

        let parsed = Cli::try_parse_from(["cashplan", "taxes", "--year", "9999"]).unwrap();
        assert_eq!(
            parsed.command,
            Command::Taxes {
                year: Some(9999),
                income: None
            }
        );
        assert!(Cli::try_parse_from(["cashplan", "taxes", "--year", "10000"]).is_err());
        assert!(Cli::try_parse_from(["cashplan", "taxes", "--year=-10000"]).is_err());
    }

    #[test]
    fn test_taxes_for_current_year() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        ctx.save_snapshot(&SnapshotBuilder::new().build()).unwrap();

        let report = run(&Command::Taxes { year: None, income: None }, &ctx).unwrap();
        assert!(report.contains("Tax year 2025"), "{report}");
    }

    #[test]
    fn test_unknown_schedule_id_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let result = run(
            &Command::Loans {
                date: None,
                schedule: Some("missing".to_string()),
            },
            &ctx,
        );
        assert!(result.is_err());
    }
}
