//! Literal, ordered text edits.
//!
//! Matching is plain substring search: case-sensitive, no regex, no
//! knowledge of the target language.

use std::fmt;
use tracing::{debug, warn};

/// A single literal edit step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace every occurrence of `find` with `replace`
    ReplaceAll {
        find: &'static str,
        replace: &'static str,
    },
    /// Insert `line` right after the first occurrence of `anchor`, on its own line.
    ///
    /// Skipped when `line` is already present or `anchor` is missing.
    InsertAfter {
        anchor: &'static str,
        line: &'static str,
    },
}

/// What a single edit did to the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Replaced { count: usize },
    Inserted,
    AlreadyPresent,
    AnchorMissing,
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOutcome::Replaced { count } => write!(f, "replaced {} occurrence(s)", count),
            EditOutcome::Inserted => write!(f, "inserted"),
            EditOutcome::AlreadyPresent => write!(f, "already present"),
            EditOutcome::AnchorMissing => write!(f, "anchor missing, skipped"),
        }
    }
}

/// Per-step outcomes of [`apply_edits`], in edit order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub outcomes: Vec<EditOutcome>,
}

impl Edit {
    /// Apply this edit to `text`
    pub fn apply(&self, text: &str) -> (String, EditOutcome) {
        match self {
            Edit::ReplaceAll { find, replace } => {
                let count = text.matches(*find).count();
                if count == 0 {
                    return (text.to_string(), EditOutcome::Replaced { count });
                }
                (text.replace(*find, replace), EditOutcome::Replaced { count })
            }
            Edit::InsertAfter { anchor, line } => {
                if text.contains(*line) {
                    return (text.to_string(), EditOutcome::AlreadyPresent);
                }
                if !text.contains(*anchor) {
                    return (text.to_string(), EditOutcome::AnchorMissing);
                }
                let with_line = format!("{}\n{}", anchor, line);
                (text.replacen(*anchor, &with_line, 1), EditOutcome::Inserted)
            }
        }
    }
}

/// Apply `edits` to `text` in order, each seeing the output of the previous one
pub fn apply_edits(text: &str, edits: &[Edit]) -> (String, PatchReport) {
    let mut current = text.to_string();
    let mut report = PatchReport::default();

    for (step, edit) in edits.iter().enumerate() {
        let (next, outcome) = edit.apply(&current);
        if outcome == EditOutcome::AnchorMissing {
            warn!("Edit step {}: anchor line not found, insertion skipped", step + 1);
        } else {
            debug!("Edit step {}: {}", step + 1, outcome);
        }
        current = next;
        report.outcomes.push(outcome);
    }

    (current, report)
}
