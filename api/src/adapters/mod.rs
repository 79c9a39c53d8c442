//! Adapter implementations
//!
//! Concrete implementations of the domain ports against real services.

mod github;
mod sendgrid;

pub use github::GitHubClientImpl;
pub use sendgrid::SendGridMailer;
