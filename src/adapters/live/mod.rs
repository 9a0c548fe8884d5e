//! Live adapters for real external interactions.

pub mod git;

pub use git::LiveGitClient;
