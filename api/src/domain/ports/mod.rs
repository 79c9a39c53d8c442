//! Port traits
//!
//! Interfaces to the outside world (email delivery, the GitHub API).
//! Adapters implement them for production; tests substitute in-memory mocks.

mod github;
mod mailer;

pub use github::{GitHubClient, GitHubRepo, GitHubUser};
pub use mailer::Mailer;
