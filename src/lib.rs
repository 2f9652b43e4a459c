// cassandra-tools - maintenance tools for the Cassandra app
// Fixture patcher and docs updater, one binary each over this library

pub mod config;
pub mod diff;
pub mod docs;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod patch;
pub mod utils;

pub use error::{ToolError, ToolResult};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
