//! Repository status records and porcelain change-listing classification.

use std::path::PathBuf;

use serde::Serialize;

/// Branch sentinel used when HEAD points at no branch.
pub const DETACHED_HEAD: &str = "HEAD detached";

/// Remote sentinel used when no `origin` remote is configured.
pub const NO_REMOTE: &str = "No remote";

/// Immutable status snapshot for one inspected working copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryStatus {
    /// Leaf name of the repository directory.
    pub name: String,
    /// Canonicalized directory path.
    pub path: PathBuf,
    /// Current branch, or [`DETACHED_HEAD`].
    pub branch: String,
    /// Configured origin URL, or [`NO_REMOTE`].
    pub remote_url: String,
    /// Commits present locally but not on the remote tracking branch.
    pub ahead: usize,
    /// Commits present on the remote tracking branch but not locally.
    pub behind: usize,
    /// Commits reachable from HEAD.
    pub total_commits: usize,
    /// Total entries in the porcelain change listing.
    pub changed_files: usize,
    /// Untracked entries (`??`).
    pub untracked_files: usize,
    /// Modified-but-unstaged entries (second status char `M`).
    pub modified_files: usize,
    /// Staged entries (first status char `M`).
    pub staged_files: usize,
    /// Deleted entries (second status char `D`).
    pub deleted_files: usize,
    /// `"Clean"` or a comma-joined list of non-zero category phrases.
    pub status_summary: String,
}

impl RepositoryStatus {
    /// Whether this repository has anything worth showing in standard mode.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        self.changed_files > 0 || self.ahead > 0 || self.behind > 0 || self.untracked_files > 0
    }
}

/// Per-category counts extracted from one porcelain change listing.
///
/// `changed` is the raw line count of the listing. The categories are not a
/// partition of it: a `MM` entry counts as both staged and modified, so the
/// sub-counts may sum to more than `changed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounts {
    /// Every entry in the listing.
    pub changed: usize,
    /// `??` entries.
    pub untracked: usize,
    /// Second status char `M`.
    pub modified: usize,
    /// First status char `M`.
    pub staged: usize,
    /// Second status char `D`.
    pub deleted: usize,
}

/// Classifies a porcelain change listing into per-category counts.
///
/// Each line carries a two-character status code in columns one and two;
/// the leading column may legitimately be a space, so callers must not
/// strip leading whitespace from the listing.
#[must_use]
pub fn parse_change_listing(listing: &str) -> ChangeCounts {
    let mut counts = ChangeCounts::default();
    for line in listing.lines() {
        if line.is_empty() {
            continue;
        }
        counts.changed += 1;
        let bytes = line.as_bytes();
        if bytes.len() < 2 {
            continue;
        }
        if bytes.starts_with(b"??") {
            counts.untracked += 1;
            continue;
        }
        if bytes[0] == b'M' {
            counts.staged += 1;
        }
        if bytes[1] == b'M' {
            counts.modified += 1;
        }
        if bytes[1] == b'D' {
            counts.deleted += 1;
        }
    }
    counts
}

/// Builds the human-readable summary for a set of change counts.
///
/// An empty listing is `"Clean"`; otherwise the non-zero categories are
/// joined in the fixed order staged, modified, deleted, untracked.
#[must_use]
pub fn status_summary(counts: &ChangeCounts) -> String {
    if counts.changed == 0 {
        return "Clean".to_string();
    }
    let categories = [
        (counts.staged, "staged"),
        (counts.modified, "modified"),
        (counts.deleted, "deleted"),
        (counts.untracked, "untracked"),
    ];
    categories
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{count} {label}"))
        .collect::<Vec<_>>()
        .join(", ")
}
