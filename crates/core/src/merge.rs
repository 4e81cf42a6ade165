//! Merge-by-id for imports
//!
//! Existing records always win: an incoming record whose id is already
//! present is dropped whole, never merged field by field.

use std::collections::HashSet;

use serde::Serialize;

use crate::prompt::Prompt;

/// Outcome counts of a merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Incoming records appended
    pub added:   usize,
    /// Incoming records dropped on id collision
    pub skipped: usize,
}

/// Union of `existing` and `incoming`, keyed by id
///
/// Existing records keep their relative order; new incoming records are
/// appended in input order. Duplicate ids inside `incoming` keep the first.
pub fn merge(existing: Vec<Prompt>, incoming: Vec<Prompt>) -> (Vec<Prompt>, MergeReport) {
    let mut seen: HashSet<String> = HashSet::with_capacity(existing.len() + incoming.len());
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());
    let mut report = MergeReport::default();

    for prompt in existing {
        if seen.insert(prompt.id.clone()) {
            merged.push(prompt);
        }
    }

    for prompt in incoming {
        if seen.insert(prompt.id.clone()) {
            merged.push(prompt);
            report.added += 1;
        } else {
            report.skipped += 1;
        }
    }

    (merged, report)
}
