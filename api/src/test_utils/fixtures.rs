//! Test fixtures
//!
//! Factory functions for test data and a fully wired `AppState` backed by
//! mocks.

use std::sync::Arc;

use crate::app::{ContactService, GitHubStatsService, VisitorCounter};
use crate::config::Config;
use crate::domain::entities::ContactMessage;
use crate::domain::ports::{GitHubRepo, GitHubUser};
use crate::test_utils::mocks::{MockGitHubClient, MockMailer};
use crate::AppState;

/// A structurally valid contact submission
pub fn contact_message() -> ContactMessage {
    ContactMessage {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        message: "I would like to discuss an opening.".to_string(),
    }
}

pub fn test_user(login: &str) -> GitHubUser {
    GitHubUser {
        login: login.to_string(),
        public_repos: 12,
        followers: 34,
        following: 5,
    }
}

pub fn test_repo(name: &str, stars: i64, language: Option<&str>) -> GitHubRepo {
    GitHubRepo {
        name: name.to_string(),
        stargazers_count: stars,
        language: language.map(String::from),
        updated_at: "2026-07-15T10:30:00Z".to_string(),
    }
}

/// Config with no credentials and a résumé path that does not exist
pub fn test_config() -> Config {
    Config {
        sendgrid_api_key: None,
        from_email: "site@example.com".to_string(),
        contact_recipient: "owner@example.com".to_string(),
        github_token: None,
        resume_path: "does-not-exist/resume.pdf".to_string(),
    }
}

/// App state wired against the given mocks.
pub fn test_state(mailer: Arc<MockMailer>, github: Arc<MockGitHubClient>) -> AppState {
    test_state_with(mailer, github, test_config())
}

pub fn test_state_with(
    mailer: Arc<MockMailer>,
    github: Arc<MockGitHubClient>,
    config: Config,
) -> AppState {
    AppState {
        contact: Arc::new(ContactService::new(
            mailer,
            config.contact_recipient.clone(),
            config.from_email.clone(),
        )),
        github: Arc::new(GitHubStatsService::new(github)),
        visitors: Arc::new(VisitorCounter::new()),
        config,
    }
}
