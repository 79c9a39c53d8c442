//! Domain entities
//!
//! Plain data types for contact submissions and the stats payloads.

mod contact;
mod stats;

pub use contact::{ContactMessage, EmailEnvelope};
pub use stats::{
    ActivityEvent, ContributionDay, CountryVisitors, Difficulty, GitHubStats, LanguageUsage,
    LeetCodeStats, Submission, SubmissionStatus, VisitorStats,
};
