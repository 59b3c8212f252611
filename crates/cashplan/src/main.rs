use std::path::PathBuf;

use cashplan::{Command, Context, DataDirectory, init_logging, run};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cashplan")]
#[command(about = "Month-by-month cash-flow projection for Spanish freelancers")]
struct Args {
    /// Path to the data directory (default: ~/.cashplan/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let today = jiff::Zoned::now().date();
    let ctx = Context::open(DataDirectory::new(data_dir), today)?;
    tracing::info!(command = ?args.command, snapshot = ctx.snapshot_name(), %today, "running command");

    let report = run(&args.command, &ctx)?;
    print!("{report}");

    Ok(())
}
