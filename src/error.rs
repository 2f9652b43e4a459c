use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the maintenance tools
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{marker} not found in {}. Run from the project root or pass --root", .root.display())]
    MissingRootMarker { root: PathBuf, marker: String },

    #[error("file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("docs files not found: {}", .candidates.join(" / "))]
    DocsNotFound { candidates: Vec<String> },

    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl ToolError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new missing file error
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    /// Whether this is a "required path missing" failure, reported as `ERROR:` with exit code 1.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ToolError::MissingRootMarker { .. }
                | ToolError::MissingFile { .. }
                | ToolError::DocsNotFound { .. }
        )
    }
}

/// Result type alias using ToolError
pub type ToolResult<T> = Result<T, ToolError>;

/// Contextual error mapping function
pub fn map_io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ToolError + '_ {
    move |err| ToolError::io_error(err, path)
}
