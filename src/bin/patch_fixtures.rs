use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use cassandra_tools::config::CommonArgs;
use cassandra_tools::fixtures::{self, PatchOutcome};
use cassandra_tools::logging::init_logging;

/// Apply patch_01 (fixture dedup crash and BuildContext lint) to the predictions page
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    let config = cli
        .common
        .into_config()
        .context("Failed to resolve project root")?;
    debug!("Using project root: {}", config.root().display());

    match fixtures::run(&config) {
        Ok(outcome) => {
            if let PatchOutcome::WouldApply { diff, .. } = &outcome {
                print!("{}", diff);
            }
            println!("{}", outcome);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_precondition() => {
            println!("ERROR: {}", e);
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(anyhow::Error::new(e).context("patch_01 failed")),
    }
}
