//! GitHub client port
//!
//! Defines the interface for the read-only GitHub API calls the stats
//! aggregation depends on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GitHubError;

/// GitHub user profile, as returned by `/users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub public_repos: i64,
    pub followers: i64,
    pub following: i64,
}

/// A repository entry from `/users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub stargazers_count: i64,
    /// Primary language; null for repos without detected code
    pub language: Option<String>,
    /// RFC 3339 timestamp of the last update
    pub updated_at: String,
}

#[async_trait]
pub trait GitHubClient: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<GitHubUser, GitHubError>;

    /// Repositories for a user, most recently updated first, up to 100.
    async fn list_repos(&self, username: &str) -> Result<Vec<GitHubRepo>, GitHubError>;
}
