use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{map_io_err, ToolResult};

/// Read a file's contents as string, with `\r\n` and lone `\r` turned into `\n`
pub fn read_file_to_string(path: impl AsRef<Path>) -> ToolResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    let content = fs::read_to_string(path).map_err(map_io_err(path))?;
    Ok(normalize_newlines(content))
}

/// Convert Windows and old Mac line endings to `\n`
pub fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Write string content to a file, replacing whatever was there
pub fn write_file_sync(path: impl AsRef<Path>, content: &str) -> ToolResult<()> {
    let path = path.as_ref();
    debug!("Writing file: {} ({} bytes)", path.display(), content.len());

    fs::write(path, content).map_err(map_io_err(path))
}

/// Check if a file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_file()
}

/// Create a directory and all parent directories
pub fn create_dir_all(path: impl AsRef<Path>) -> ToolResult<()> {
    let path = path.as_ref();
    debug!("Creating directory: {}", path.display());

    fs::create_dir_all(path).map_err(map_io_err(path))
}

/// Copy `source` into `backup_dir/backup_name`, creating the directory if needed.
///
/// An existing backup with the same name is overwritten. Returns the backup path.
pub fn backup_file(
    source: impl AsRef<Path>,
    backup_dir: impl AsRef<Path>,
    backup_name: &str,
) -> ToolResult<PathBuf> {
    let source = source.as_ref();
    let backup_dir = backup_dir.as_ref();

    create_dir_all(backup_dir)?;

    let backup_path = backup_dir.join(backup_name);
    debug!(
        "Backing up {} -> {}",
        source.display(),
        backup_path.display()
    );
    fs::copy(source, &backup_path).map_err(map_io_err(source))?;

    Ok(backup_path)
}
