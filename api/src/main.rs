//! Portfolio API Server
//!
//! Thin backend for a single-page portfolio site: contact form relay to
//! SendGrid, GitHub/LeetCode stats aggregation, in-process visitor counters,
//! and résumé serving.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{GitHubClientImpl, SendGridMailer};
use app::{ContactService, GitHubStatsService, VisitorCounter};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub contact: Arc<ContactService>,
    pub github: Arc<GitHubStatsService>,
    pub visitors: Arc<VisitorCounter>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Contact form
        .route("/api/contact", post(handlers::submit_contact))
        // Stats
        .route("/api/github/:username", get(handlers::get_github_stats))
        .route("/api/leetcode/:username", get(handlers::get_leetcode_stats))
        .route("/api/visitor-stats", get(handlers::get_visitor_stats))
        .route("/api/visitor-increment", post(handlers::increment_visitors))
        // Résumé
        .route("/api/resume/download", get(handlers::download_resume))
        .route("/api/resume/preview", get(handlers::preview_resume))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio API...");

    // Load configuration
    let config = Config::from_env();

    if config.sendgrid_api_key.is_none() {
        tracing::warn!("No SendGrid API key configured; contact emails will be simulated");
    }

    // Create adapters
    let mailer = Arc::new(SendGridMailer::new(config.sendgrid_api_key.clone()));
    let github_client = Arc::new(GitHubClientImpl::new(config.github_token.clone()));

    // Create application services
    let contact_service = Arc::new(ContactService::new(
        mailer,
        config.contact_recipient.clone(),
        config.from_email.clone(),
    ));
    let github_service = Arc::new(GitHubStatsService::new(github_client));

    // Create app state
    let state = AppState {
        contact: contact_service,
        github: github_service,
        visitors: Arc::new(VisitorCounter::new()),
        config,
    };

    let app = router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
