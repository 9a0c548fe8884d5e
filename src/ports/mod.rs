//! Port traits defining external boundaries.
//!
//! The only external system here is the `git` command-line tool; the trait
//! lives in `git` and its live implementation in `src/adapters/`.

pub mod git;

pub use git::{GitClient, QueryResult};
