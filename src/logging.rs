use std::io::IsTerminal;

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for a maintenance binary.
///
/// Logs always go to stderr: stdout is reserved for the `OK:`/`ERROR:` status
/// lines. `RUST_LOG` wins over `verbose` when it is set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = fmt::Subscriber::builder()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .without_time()
        .try_init();

    if let Err(e) = result {
        // Already initialized, e.g. when called twice from tests
        eprintln!("Warning: logger initialization failed: {}", e);
        return;
    }

    tracing::debug!("cassandra-tools v{} logging initialized", crate::version());
}
