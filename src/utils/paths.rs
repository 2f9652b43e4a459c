use std::path::{Path, PathBuf};
use tracing::debug;

/// Canonicalize a path when possible, keeping it unchanged otherwise.
///
/// A root that does not exist stays as given so the caller can report it.
pub fn normalize_root(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match path.canonicalize() {
        Ok(canonical) => canonical,
        Err(e) => {
            debug!("Could not canonicalize {}: {}", path.display(), e);
            path.to_path_buf()
        }
    }
}

/// Display name of a path: its file name, or the whole path if it has none
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_existing_root() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a");
        std::fs::create_dir(&nested).unwrap();

        let normalized = normalize_root(nested.join("..").join("a"));
        assert_eq!(normalized, nested.canonicalize().unwrap());
    }

    #[test]
    fn test_normalize_missing_root_is_unchanged() {
        let path = PathBuf::from("/definitely/not/here");
        assert_eq!(normalize_root(&path), path);
    }

    #[test]
    fn test_file_label() {
        assert_eq!(
            file_label(Path::new("lib/features/predictions/predictions_page.dart")),
            "predictions_page.dart"
        );
        assert_eq!(file_label(Path::new("/")), "/");
    }
}
