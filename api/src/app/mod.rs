//! Application services
//!
//! Business logic sitting between the HTTP handlers and the ports.

mod contact;
mod github_stats;
pub mod leetcode;
mod visitors;

pub use contact::{ContactOutcome, ContactService};
pub use github_stats::GitHubStatsService;
pub use visitors::VisitorCounter;
