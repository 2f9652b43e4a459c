use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ToolError, ToolResult};
use crate::utils::{file_exists, normalize_root};

/// File whose presence identifies the project root
pub const ROOT_MARKER: &str = "pubspec.yaml";

/// Environment variable consulted when `--root` is not given
pub const ROOT_ENV: &str = "CASSANDRA_ROOT";

/// Command-line options shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, env = ROOT_ENV)]
    pub root: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Resolve the arguments into a tool configuration
    pub fn into_config(self) -> ToolResult<ToolConfig> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().map_err(|e| ToolError::io_error(e, "."))?,
        };

        Ok(ToolConfig::new(root).with_dry_run(self.dry_run))
    }
}

/// Runtime configuration of a maintenance run
#[derive(Debug, Clone)]
pub struct ToolConfig {
    root: PathBuf,
    dry_run: bool,
}

impl ToolConfig {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: normalize_root(root),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Join a project-relative path onto the root
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Fail unless the root contains [`ROOT_MARKER`]
    pub fn ensure_project_root(&self) -> ToolResult<()> {
        let marker = self.resolve(ROOT_MARKER);
        debug!("Checking project root marker: {}", marker.display());

        if !file_exists(&marker) {
            return Err(ToolError::MissingRootMarker {
                root: self.root.clone(),
                marker: ROOT_MARKER.to_string(),
            });
        }
        Ok(())
    }
}
