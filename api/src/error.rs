//! Unified error types for the portfolio API
//!
//! This module defines error types for each layer:
//! - `GitHubError`: GitHub API client errors
//! - `EmailError`: email delivery transport errors
//! - `AppError`: handler-layer errors (rendered as HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single field-level validation violation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Email delivery errors.
///
/// Only transport-level failures reach the caller; provider rejections are
/// absorbed by the adapter's fallback path.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Transport failure: {0}")]
    Transport(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(errors) => {
                tracing::warn!(
                    fields = ?errors.iter().map(|e| e.field).collect::<Vec<_>>(),
                    "Form validation failed"
                );
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "success": false,
                        "message": "Please fill in all required fields correctly.",
                        "errors": errors,
                    }),
                )
            }
            AppError::GitHub(e) => {
                tracing::error!("GitHub API error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to fetch GitHub data",
                        "message": "GitHub stats temporarily unavailable",
                    }),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "message": "Something went wrong. Please try again later.",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
