//! Git query port for per-directory version-control queries.

use std::path::Path;

/// Outcome of a single query to the external git tool.
///
/// Success-with-output, success-with-nothing, and failure are distinct
/// outcomes: an unset `remote.origin.url` and a missing `git` binary both
/// produce no text, but callers map them through different defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// The command succeeded and printed something. Trailing whitespace is
    /// trimmed; leading whitespace is preserved because porcelain status
    /// codes are position-significant (`" M"` is not `"M "`).
    Output(String),
    /// The command succeeded but printed nothing.
    Empty,
    /// The command could not be spawned or exited non-zero.
    Failed,
}

impl QueryResult {
    /// Returns the captured output, if any.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Output(text) => Some(text),
            Self::Empty | Self::Failed => None,
        }
    }
}

/// Issues read-only queries against git working copies.
///
/// Every repository query takes the target directory explicitly; no
/// implementation may rely on (or mutate) the process working directory.
/// Abstracting the tool allows inspection to be tested without spawning
/// real git processes.
pub trait GitClient: Send + Sync {
    /// Reports whether `dir` is inside a git working tree.
    fn is_inside_work_tree(&self, dir: &Path) -> bool;

    /// Reads the configured `remote.origin.url` for the repository at `dir`.
    fn remote_url(&self, dir: &Path) -> QueryResult;

    /// Reads the current branch name; `Empty` means HEAD is detached.
    fn current_branch(&self, dir: &Path) -> QueryResult;

    /// Counts commits on either side of `origin/<branch>...HEAD`.
    ///
    /// Successful output is two whitespace-separated integers, behind first,
    /// ahead second.
    fn ahead_behind(&self, dir: &Path, branch: &str) -> QueryResult;

    /// Counts commits reachable from HEAD.
    fn total_commits(&self, dir: &Path) -> QueryResult;

    /// Reads the porcelain change listing; `Empty` means a clean tree.
    fn change_listing(&self, dir: &Path) -> QueryResult;

    /// Probes whether the git tool is available at all (`git --version`).
    fn version(&self) -> QueryResult;
}
