use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use cassandra_tools::config::CommonArgs;
use cassandra_tools::docs::{self, DocTarget, DEFAULT_DATE};
use cassandra_tools::logging::init_logging;

/// Append the dated session blocks to PROJECT_STATE.md and TASKS.md
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Session date stamped into the markers (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_DATE, value_parser = docs::parse_date)]
    date: NaiveDate,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    let config = cli
        .common
        .into_config()
        .context("Failed to resolve project root")?;
    debug!(
        "Using project root: {} (session {})",
        config.root().display(),
        cli.date
    );

    let targets = DocTarget::for_date(cli.date);
    match docs::run(&config, &targets) {
        Ok(updates) => {
            for update in &updates {
                println!("{}", update);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_precondition() => {
            println!("ERROR: {}", e);
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(anyhow::Error::new(e).context("docs update failed")),
    }
}
