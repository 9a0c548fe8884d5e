//! Per-directory repository inspection and root-directory enumeration.

use std::fs;
use std::path::Path;

use crate::ports::git::{GitClient, QueryResult};
use crate::status::{
    parse_change_listing, status_summary, ChangeCounts, RepositoryStatus, DETACHED_HEAD, NO_REMOTE,
};

/// Inspects one candidate directory.
///
/// Returns `None` when the directory is not a working copy (not an error)
/// or when an unexpected failure such as the directory vanishing mid-scan
/// occurs; the latter is logged as a warning naming the path. Every
/// sub-query that fails or comes back empty degrades to a neutral default
/// rather than failing the record.
#[must_use]
pub fn inspect(git: &dyn GitClient, dir: &Path) -> Option<RepositoryStatus> {
    if !dir.join(".git").exists() && !git.is_inside_work_tree(dir) {
        return None;
    }

    let path = match dir.canonicalize() {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!("skipping {}: {err}", dir.display());
            return None;
        }
    };
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );

    let remote_url = match git.remote_url(dir) {
        QueryResult::Output(url) => url.trim().to_string(),
        QueryResult::Empty | QueryResult::Failed => NO_REMOTE.to_string(),
    };
    let branch = match git.current_branch(dir) {
        QueryResult::Output(branch) => branch.trim().to_string(),
        QueryResult::Empty | QueryResult::Failed => DETACHED_HEAD.to_string(),
    };

    let (behind, ahead) = if branch == DETACHED_HEAD {
        (0, 0)
    } else {
        parse_ahead_behind(&git.ahead_behind(dir, &branch))
    };

    let total_commits = git
        .total_commits(dir)
        .output()
        .and_then(|count| count.trim().parse().ok())
        .unwrap_or(0);

    let counts = match git.change_listing(dir) {
        QueryResult::Output(listing) => parse_change_listing(&listing),
        QueryResult::Empty | QueryResult::Failed => ChangeCounts::default(),
    };

    Some(RepositoryStatus {
        name,
        path,
        branch,
        remote_url,
        ahead,
        behind,
        total_commits,
        changed_files: counts.changed,
        untracked_files: counts.untracked,
        modified_files: counts.modified,
        staged_files: counts.staged,
        deleted_files: counts.deleted,
        status_summary: status_summary(&counts),
    })
}

/// Parses the two-integer `behind ahead` shape of the left-right count
/// query. Anything else (no upstream, malformed output) means no known
/// divergence.
fn parse_ahead_behind(result: &QueryResult) -> (usize, usize) {
    let Some(text) = result.output() else {
        return (0, 0);
    };
    let mut fields = text.split_whitespace();
    match (
        fields.next().and_then(|n| n.parse().ok()),
        fields.next().and_then(|n| n.parse().ok()),
    ) {
        (Some(behind), Some(ahead)) => (behind, ahead),
        _ => (0, 0),
    }
}

/// Scans `root` and its immediate subdirectories for working copies.
///
/// The root itself is a candidate. Hidden subdirectories are skipped, as
/// are entries that cannot be read (with a warning). Results come back
/// sorted by lowercased repository name.
///
/// # Errors
///
/// Returns an error string only when the root directory itself cannot be
/// read.
pub fn scan_root(git: &dyn GitClient, root: &Path) -> Result<Vec<RepositoryStatus>, String> {
    let mut statuses = Vec::new();
    if let Some(status) = inspect(git, root) {
        statuses.push(status);
    }

    let entries = fs::read_dir(root)
        .map_err(|err| format!("cannot read directory {}: {err}", root.display()))?;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable entry under {}: {err}", root.display());
                continue;
            }
        };
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(status) = inspect(git, &path) {
            statuses.push(status);
        }
    }

    statuses.sort_by_key(|status| status.name.to_lowercase());
    Ok(statuses)
}
