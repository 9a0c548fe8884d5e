//! Tabular report rendering and aggregate summary counts.

use crate::status::RepositoryStatus;

const STANDARD_HEADERS: [&str; 6] =
    ["REPOSITORY", "BRANCH", "AHEAD", "BEHIND", "CHANGED", "UNTRACKED"];
const DETAILED_HEADERS: [&str; 9] = [
    "REPOSITORY",
    "BRANCH",
    "AHEAD",
    "BEHIND",
    "CHANGED",
    "UNTRACKED",
    "COMMITS",
    "STATUS",
    "REMOTE",
];

/// Renders the status collection into (table-or-notice, summary) text.
///
/// Standard mode shows only repositories with activity; detailed mode shows
/// everything plus commit totals, status summary, and remote URL. The
/// summary line is always computed over the full unfiltered input. An empty
/// input yields a notice and an empty summary.
#[must_use]
pub fn render(statuses: &[RepositoryStatus], detailed: bool) -> (String, String) {
    if statuses.is_empty() {
        return ("No Git repositories found.".to_string(), String::new());
    }
    let summary = summary_line(statuses);

    let shown: Vec<&RepositoryStatus> = if detailed {
        statuses.iter().collect()
    } else {
        statuses.iter().filter(|status| status.has_activity()).collect()
    };
    if shown.is_empty() {
        let notice = "No Git repositories with changes found. \
                      Use --detailed to see all repositories."
            .to_string();
        return (notice, summary);
    }

    let headers: &[&str] = if detailed { &DETAILED_HEADERS } else { &STANDARD_HEADERS };
    let rows: Vec<Vec<String>> = shown.iter().map(|status| row(status, detailed)).collect();
    (format_table(headers, &rows), summary)
}

fn row(status: &RepositoryStatus, detailed: bool) -> Vec<String> {
    let mut cells = vec![
        status.name.clone(),
        status.branch.clone(),
        blank_if_zero(status.ahead),
        blank_if_zero(status.behind),
        blank_if_zero(status.changed_files),
        blank_if_zero(status.untracked_files),
    ];
    if detailed {
        cells.push(status.total_commits.to_string());
        cells.push(status.status_summary.clone());
        cells.push(status.remote_url.clone());
    }
    cells
}

/// Zero-valued count cells render blank; the underlying value is still 0.
fn blank_if_zero(count: usize) -> String {
    if count == 0 {
        String::new()
    } else {
        count.to_string()
    }
}

fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    // Column widths come from the header and the displayed rows.
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter().map(|row| row[col].len()).max().unwrap_or(0).max(header.len())
        })
        .collect();

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    let underline: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&widths, &header_cells));
    lines.push(format_row(&widths, &underline));
    for row in rows {
        lines.push(format_row(&widths, row));
    }
    lines.join("\n")
}

fn format_row(widths: &[usize], cells: &[String]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Aggregate counts over the full unfiltered input, regardless of display
/// mode or filtering.
fn summary_line(statuses: &[RepositoryStatus]) -> String {
    let with_changes = statuses.iter().filter(|s| s.changed_files > 0).count();
    let ahead = statuses.iter().filter(|s| s.ahead > 0).count();
    let behind = statuses.iter().filter(|s| s.behind > 0).count();
    let with_untracked = statuses.iter().filter(|s| s.untracked_files > 0).count();
    let noun = if statuses.len() == 1 { "repository" } else { "repositories" };
    format!(
        "Summary: {} {noun}, {with_changes} with changes, {ahead} ahead, \
         {behind} behind, {with_untracked} with untracked files",
        statuses.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn clean(name: &str) -> RepositoryStatus {
        RepositoryStatus {
            name: name.to_string(),
            path: PathBuf::from(format!("/repos/{name}")),
            branch: "main".to_string(),
            remote_url: "git@example.com:me/demo.git".to_string(),
            ahead: 0,
            behind: 0,
            total_commits: 10,
            changed_files: 0,
            untracked_files: 0,
            modified_files: 0,
            staged_files: 0,
            deleted_files: 0,
            status_summary: "Clean".to_string(),
        }
    }

    fn dirty(name: &str) -> RepositoryStatus {
        RepositoryStatus {
            ahead: 2,
            changed_files: 3,
            untracked_files: 1,
            modified_files: 2,
            status_summary: "2 modified, 1 untracked".to_string(),
            ..clean(name)
        }
    }

    #[test]
    fn empty_input_yields_notice_and_no_summary() {
        let (table, summary) = render(&[], false);
        assert_eq!(table, "No Git repositories found.");
        assert!(summary.is_empty());
    }

    #[test]
    fn standard_mode_filters_clean_repositories() {
        let statuses = [clean("tidy"), dirty("messy")];
        let (table, _) = render(&statuses, false);
        assert!(table.contains("messy"));
        assert!(!table.contains("tidy"));
    }

    #[test]
    fn standard_mode_all_clean_yields_clean_notice() {
        let statuses = [clean("one"), clean("two")];
        let (table, summary) = render(&statuses, false);
        assert!(table.contains("No Git repositories with changes found"));
        assert!(table.contains("--detailed"));
        // The summary still covers the full input.
        assert!(summary.starts_with("Summary: 2 repositories"));
    }

    #[test]
    fn detailed_mode_shows_every_repository() {
        let statuses = [clean("tidy"), dirty("messy")];
        let (table, _) = render(&statuses, true);
        assert!(table.contains("tidy"));
        assert!(table.contains("messy"));
        assert!(table.contains("REMOTE"));
        assert!(table.contains("Clean"));
        assert!(table.contains("git@example.com:me/demo.git"));
    }

    #[test]
    fn zero_counts_render_as_blank_cells() {
        let statuses = [clean("tidy")];
        let (table, _) = render(&statuses, true);
        let row = table.lines().nth(2).unwrap();
        // Ahead/behind/changed/untracked collapse to gutters; the commit
        // total still shows.
        assert!(!row.contains(" 0"));
        assert!(row.contains("10"));
    }

    #[test]
    fn nonzero_counts_render_as_numbers() {
        let statuses = [dirty("messy")];
        let (table, _) = render(&statuses, false);
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains('2'));
        assert!(row.contains('3'));
        assert!(row.contains('1'));
    }

    #[test]
    fn summary_counts_come_from_unfiltered_input() {
        let statuses = [clean("a"), dirty("b"), dirty("c")];
        let (_, standard_summary) = render(&statuses, false);
        let (_, detailed_summary) = render(&statuses, true);
        assert_eq!(standard_summary, detailed_summary);
        assert_eq!(
            standard_summary,
            "Summary: 3 repositories, 2 with changes, 2 ahead, 0 behind, \
             2 with untracked files"
        );
    }

    #[test]
    fn summary_uses_singular_noun_for_one_repository() {
        let statuses = [dirty("only")];
        let (_, summary) = render(&statuses, false);
        assert!(summary.starts_with("Summary: 1 repository,"));
    }

    #[test]
    fn header_underline_matches_column_widths() {
        let statuses = [dirty("messy")];
        let (table, _) = render(&statuses, false);
        let mut lines = table.lines();
        let header = lines.next().unwrap();
        let underline = lines.next().unwrap();
        assert!(header.starts_with("REPOSITORY"));
        assert!(underline.starts_with("----------"));
    }
}
