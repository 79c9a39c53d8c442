//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::ports::{GitHubClient, GitHubRepo, GitHubUser};
use crate::error::GitHubError;

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Implementation of the GitHub API client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClientImpl {
    pub fn new(token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: GITHUB_API_BASE.to_string(),
            token,
        }
    }

    /// Point the client at a different API host.
    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, GitHubError> {
        let mut request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .header(header::USER_AGENT, "portfolio-api");

        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(GitHubError::Unauthorized)
        } else if status.as_u16() == 403 || status.as_u16() == 429 {
            // GitHub reports rate limiting as 403 for unauthenticated calls
            Err(GitHubError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl GitHubClient for GitHubClientImpl {
    async fn get_user(&self, username: &str) -> Result<GitHubUser, GitHubError> {
        match self.get_json(&format!("/users/{}", encode(username))).await {
            Err(GitHubError::Api { status: 404, .. }) => {
                Err(GitHubError::UserNotFound(username.to_string()))
            }
            other => other,
        }
    }

    async fn list_repos(&self, username: &str) -> Result<Vec<GitHubRepo>, GitHubError> {
        self.get_json(&format!(
            "/users/{}/repos?per_page=100&sort=updated",
            encode(username)
        ))
        .await
    }
}
