//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contact;
pub mod github;
pub mod leetcode;
pub mod resume;
pub mod visitors;

pub use contact::submit_contact;
pub use github::get_github_stats;
pub use leetcode::get_leetcode_stats;
pub use resume::{download_resume, preview_resume};
pub use visitors::{get_visitor_stats, increment_visitors};
