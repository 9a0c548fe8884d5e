//! Live git client that shells out to the `git` CLI.

use std::path::Path;
use std::process::Command;

use crate::ports::git::{GitClient, QueryResult};

/// Live git client running one blocking `git` process per query.
///
/// The target directory is passed to every invocation via
/// [`Command::current_dir`]; the process working directory of the scanner
/// itself is never touched.
pub struct LiveGitClient;

impl LiveGitClient {
    fn run(dir: Option<&Path>, args: &[&str]) -> QueryResult {
        let mut command = Command::new("git");
        if let Some(dir) = dir {
            command.current_dir(dir);
        }
        match command.args(args).output() {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                if stdout.trim().is_empty() {
                    QueryResult::Empty
                } else {
                    QueryResult::Output(stdout.trim_end().to_string())
                }
            }
            Ok(_) | Err(_) => QueryResult::Failed,
        }
    }
}

impl GitClient for LiveGitClient {
    fn is_inside_work_tree(&self, dir: &Path) -> bool {
        Self::run(Some(dir), &["rev-parse", "--is-inside-work-tree"])
            == QueryResult::Output("true".to_string())
    }

    fn remote_url(&self, dir: &Path) -> QueryResult {
        Self::run(Some(dir), &["config", "--get", "remote.origin.url"])
    }

    fn current_branch(&self, dir: &Path) -> QueryResult {
        Self::run(Some(dir), &["branch", "--show-current"])
    }

    fn ahead_behind(&self, dir: &Path, branch: &str) -> QueryResult {
        let range = format!("origin/{branch}...HEAD");
        Self::run(Some(dir), &["rev-list", "--left-right", "--count", &range])
    }

    fn total_commits(&self, dir: &Path) -> QueryResult {
        Self::run(Some(dir), &["rev-list", "--count", "HEAD"])
    }

    fn change_listing(&self, dir: &Path) -> QueryResult {
        Self::run(Some(dir), &["status", "--porcelain"])
    }

    fn version(&self) -> QueryResult {
        Self::run(None, &["--version"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_installed() -> bool {
        LiveGitClient.version().output().is_some()
    }

    #[test]
    fn version_reports_git_when_installed() {
        if !git_installed() {
            return;
        }
        let result = LiveGitClient.version();
        assert!(result.output().is_some_and(|v| v.contains("git version")));
    }

    #[test]
    fn non_repo_directory_is_not_a_work_tree() {
        if !git_installed() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        assert!(!LiveGitClient.is_inside_work_tree(dir.path()));
    }

    #[test]
    fn vanished_directory_fails_queries() {
        let missing = Path::new("/definitely/not/a/real/path");
        assert!(!LiveGitClient.is_inside_work_tree(missing));
        assert_eq!(LiveGitClient.total_commits(missing), QueryResult::Failed);
    }
}
