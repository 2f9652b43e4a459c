//! Dated status blocks for `PROJECT_STATE.md` and `TASKS.md`.

use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::ToolConfig;
use crate::diff::unified_diff;
use crate::error::{ToolError, ToolResult};
use crate::utils::{file_exists, read_file_to_string, write_file_sync};

/// Session date stamped into markers and blocks unless overridden
pub const DEFAULT_DATE: &str = "2026-01-15";

const PROJECT_STATE_CANDIDATES: &[&str] = &["docs/PROJECT_STATE.md", "PROJECT_STATE.md"];
const TASKS_CANDIDATES: &[&str] = &["docs/TASKS.md", "TASKS.md"];

/// Parse a `YYYY-MM-DD` session date
pub fn parse_date(value: &str) -> ToolResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ToolError::InvalidDate {
        value: value.to_string(),
    })
}

/// A logical document with the block it should carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTarget {
    pub label: &'static str,
    pub candidates: &'static [&'static str],
    pub marker: String,
    pub block: String,
}

impl DocTarget {
    pub fn project_state(date: NaiveDate) -> Self {
        let marker = format!("## Sessione {} — Recuperi/Fixtures", date.format("%Y-%m-%d"));
        let block = format!(
            "{marker}
- Fix runtime Pronostici: dedup fixtures su fixtureId (non .id) per evitare crash NoSuchMethodError.
- Fix lint: evitare BuildContext dopo await in _tryLoadRealFixtures catturando CassandraScope prima degli await.
- Recuperi: introdotto domain rules (lockAt/primaryDone/finalDone) + regola 48h (void) + validità matchday >=6 + bonus scaling (correct->/10).
- Predictions: filtro matchday su round + ID coerenti fixtureId.toString() tra matches/outcomes; matchday corrente da cassandraMatchdayCursor.
"
        );

        Self {
            label: "PROJECT_STATE",
            candidates: PROJECT_STATE_CANDIDATES,
            marker,
            block,
        }
    }

    pub fn tasks(date: NaiveDate) -> Self {
        let marker = format!("## Aggiornamento {}", date.format("%Y-%m-%d"));
        let block = format!(
            "{marker}
Done
- Recuperi v1: lib/domain/matchday/matchday_recovery_rules.dart + test.
- Fix Pronostici live: dedup fixtureId + caching scope safe (no use_build_context_synchronously).
- Predictions: filtro matchday per round + ID coerenti; matchday cursor al posto di hardcode.

Next
- Wiring MatchdayProgress: lock UI, bump cursor su primaryDone, leaderboard/calcolo su finalDone (ricalcolo retroattivo).
- Scoring: integrare bonus scaling su partite giocate + regola validità >=6 nel motore punteggio + test.
- Pulizia: rimuovere/ignorare backup temporanei se riappaiono.
"
        );

        Self {
            label: "TASKS",
            candidates: TASKS_CANDIDATES,
            marker,
            block,
        }
    }

    /// Both documents for `date`, in processing order
    pub fn for_date(date: NaiveDate) -> Vec<Self> {
        vec![Self::project_state(date), Self::tasks(date)]
    }
}

/// Per-document result of an update run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    AlreadyPresent,
    WouldAppend,
}

/// One processed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocUpdate {
    pub label: &'static str,
    pub path: PathBuf,
    pub outcome: AppendOutcome,
}

impl fmt::Display for DocUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            AppendOutcome::Appended => write!(f, "OK: updated {}", self.path.display()),
            AppendOutcome::AlreadyPresent => {
                write!(f, "OK: {} already up to date (marker present).", self.label)
            }
            AppendOutcome::WouldAppend => {
                write!(f, "OK: would update {} (dry run).", self.path.display())
            }
        }
    }
}

/// First candidate, relative to `root`, that exists as a file
pub fn pick_path(root: &Path, candidates: &[&str]) -> ToolResult<PathBuf> {
    for candidate in candidates {
        let path = root.join(candidate);
        if file_exists(&path) {
            debug!("Resolved {} -> {}", candidate, path.display());
            return Ok(path);
        }
    }

    Err(ToolError::DocsNotFound {
        candidates: candidates.iter().map(|c| c.to_string()).collect(),
    })
}

/// `existing` followed by one blank line, `block`, and a single final newline
pub fn append_block(existing: &str, block: &str) -> String {
    format!("{}\n\n{}\n", existing.trim_end(), block.trim_end())
}

/// Append `block` to the file at `path` unless `marker` already occurs in it
pub fn ensure_append(
    path: &Path,
    marker: &str,
    block: &str,
    dry_run: bool,
) -> ToolResult<AppendOutcome> {
    let existing = read_file_to_string(path)?;
    if existing.contains(marker) {
        debug!("Marker already present in {}", path.display());
        return Ok(AppendOutcome::AlreadyPresent);
    }

    let updated = append_block(&existing, block);
    if dry_run {
        debug!(
            "Dry run diff:\n{}",
            unified_diff(&existing, &updated, &path.display().to_string())
        );
        return Ok(AppendOutcome::WouldAppend);
    }

    write_file_sync(path, &updated)?;
    info!("Appended block '{}' to {}", marker, path.display());
    Ok(AppendOutcome::Appended)
}

/// Update every document in `targets`.
///
/// All documents are resolved first; if any cannot be found the run fails
/// before a single write.
pub fn run(config: &ToolConfig, targets: &[DocTarget]) -> ToolResult<Vec<DocUpdate>> {
    let resolved = targets
        .iter()
        .map(|target| pick_path(config.root(), target.candidates).map(|path| (target, path)))
        .collect::<ToolResult<Vec<_>>>()?;

    let mut updates = Vec::with_capacity(resolved.len());
    for (target, path) in resolved {
        let outcome = ensure_append(&path, &target.marker, &target.block, config.dry_run())?;
        updates.push(DocUpdate {
            label: target.label,
            path,
            outcome,
        });
    }

    Ok(updates)
}
