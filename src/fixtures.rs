//! Patch 01 for the predictions page.
//!
//! Fixes the `NoSuchMethodError` raised by deduplicating fixtures on `.id`
//! (the API fixture type only has `fixtureId`) and the
//! `use_build_context_synchronously` lint by capturing the scope before the
//! first `await`.

use std::fmt;
use std::path::PathBuf;
use tracing::info;

use crate::config::ToolConfig;
use crate::diff::{diff_stats, unified_diff};
use crate::error::{ToolError, ToolResult};
use crate::patch::{apply_edits, Edit, PatchReport};
use crate::utils::{backup_file, file_exists, file_label, read_file_to_string, write_file_sync};

pub const PATCH_NAME: &str = "patch_01";

/// Patched file, relative to the project root
pub const TARGET_PATH: &str = "lib/features/predictions/predictions_page.dart";

/// Backup location, relative to the project root
pub const BACKUP_DIR: &str = "_backup";
pub const BACKUP_NAME: &str = "predictions_page.dart.before_patch_01.bak";

pub const SCOPE_ANCHOR: &str = "      final service = ApiFootballService(client);";
pub const SCOPE_LINE: &str = "      final scope = CassandraScope.of(context);";

/// Edits of patch 01, applied in this order
pub const EDITS: &[Edit] = &[
    Edit::ReplaceAll {
        find: "seen.add((f as dynamic).id)",
        replace: "seen.add(f.fixtureId)",
    },
    Edit::InsertAfter {
        anchor: SCOPE_ANCHOR,
        line: SCOPE_LINE,
    },
    Edit::ReplaceAll {
        find: "CassandraScope.of(context).setCachedPredictionMatches(",
        replace: "scope.setCachedPredictionMatches(",
    },
    Edit::ReplaceAll {
        find: "CassandraScope.of(context).setCachedPredictionOutcomesByMatchId(",
        replace: "scope.setCachedPredictionOutcomesByMatchId(",
    },
];

/// Result of a patch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The target already contained every fix; nothing was written
    AlreadyApplied,
    /// The target was rewritten after a backup was taken
    Applied {
        target: PathBuf,
        backup: PathBuf,
        report: PatchReport,
    },
    /// Dry run with pending changes; `diff` is a unified diff of them
    WouldApply { target: PathBuf, diff: String },
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::AlreadyApplied => {
                write!(f, "OK: {} already applied (no changes).", PATCH_NAME)
            }
            PatchOutcome::Applied { target, .. } => {
                write!(f, "OK: {} applied -> {}", PATCH_NAME, file_label(target))
            }
            PatchOutcome::WouldApply { .. } => {
                write!(f, "OK: {} would be applied (dry run).", PATCH_NAME)
            }
        }
    }
}

/// Run patch 01 against the project at `config.root()`.
///
/// Both the root marker and the target are checked before anything is
/// written. Outside dry runs the backup is always refreshed, even when the
/// patch turns out to be already applied.
pub fn run(config: &ToolConfig) -> ToolResult<PatchOutcome> {
    config.ensure_project_root()?;

    let target = config.resolve(TARGET_PATH);
    if !file_exists(&target) {
        return Err(ToolError::missing_file(target));
    }

    let backup = if config.dry_run() {
        None
    } else {
        Some(backup_file(
            &target,
            config.resolve(BACKUP_DIR),
            BACKUP_NAME,
        )?)
    };

    let original = read_file_to_string(&target)?;
    let (patched, report) = apply_edits(&original, EDITS);

    if patched == original {
        return Ok(PatchOutcome::AlreadyApplied);
    }

    let Some(backup) = backup else {
        return Ok(PatchOutcome::WouldApply {
            diff: unified_diff(&original, &patched, TARGET_PATH),
            target,
        });
    };

    write_file_sync(&target, &patched)?;
    info!(
        "Patched {} ({}), backup at {}",
        target.display(),
        diff_stats(&original, &patched),
        backup.display()
    );

    Ok(PatchOutcome::Applied {
        target,
        backup,
        report,
    })
}
