//! Mock implementations of port traits
//!
//! In-memory implementations that record calls and return configurable
//! responses.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::EmailEnvelope;
use crate::domain::ports::{GitHubClient, GitHubRepo, GitHubUser, Mailer};
use crate::error::{EmailError, GitHubError};

// ============================================================================
// Mock Mailer
// ============================================================================

#[derive(Clone, Copy, Default)]
enum MailerBehavior {
    #[default]
    Deliver,
    ReportUndelivered,
    TransportError,
}

/// A mock mailer that records every envelope it is asked to send
#[derive(Default)]
pub struct MockMailer {
    pub sent: Arc<RwLock<Vec<EmailEnvelope>>>,
    behavior: MailerBehavior,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report every message as undelivered
    pub fn undelivered() -> Self {
        Self {
            behavior: MailerBehavior::ReportUndelivered,
            ..Self::default()
        }
    }

    /// Fail every send with a transport error
    pub fn failing() -> Self {
        Self {
            behavior: MailerBehavior::TransportError,
            ..Self::default()
        }
    }

    pub fn send_count(&self) -> usize {
        self.sent.read().unwrap().len()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, envelope: &EmailEnvelope) -> Result<bool, EmailError> {
        self.sent.write().unwrap().push(envelope.clone());
        match self.behavior {
            MailerBehavior::Deliver => Ok(true),
            MailerBehavior::ReportUndelivered => Ok(false),
            MailerBehavior::TransportError => {
                Err(EmailError::Transport("mock connection reset".to_string()))
            }
        }
    }
}

// ============================================================================
// Mock GitHub Client
// ============================================================================

/// A mock GitHub client returning configurable fixtures
#[derive(Default)]
pub struct MockGitHubClient {
    user: Arc<RwLock<Option<GitHubUser>>>,
    repos: Arc<RwLock<Vec<GitHubRepo>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let mock = Self::default();
        *mock.should_fail.write().unwrap() = true;
        mock
    }

    pub fn with_user(self, user: GitHubUser) -> Self {
        *self.user.write().unwrap() = Some(user);
        self
    }

    pub fn with_repos(self, repos: Vec<GitHubRepo>) -> Self {
        *self.repos.write().unwrap() = repos;
        self
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn get_user(&self, username: &str) -> Result<GitHubUser, GitHubError> {
        if *self.should_fail.read().unwrap() {
            return Err(GitHubError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        Ok(self.user.read().unwrap().clone().unwrap_or(GitHubUser {
            login: username.to_string(),
            public_repos: 0,
            followers: 0,
            following: 0,
        }))
    }

    async fn list_repos(&self, _username: &str) -> Result<Vec<GitHubRepo>, GitHubError> {
        if *self.should_fail.read().unwrap() {
            return Err(GitHubError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        Ok(self.repos.read().unwrap().clone())
    }
}
