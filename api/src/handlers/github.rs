//! GitHub stats handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::entities::GitHubStats;
use crate::error::AppError;
use crate::AppState;

/// GET /api/github/:username
pub async fn get_github_stats(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<GitHubStats>, AppError> {
    let stats = state.github.aggregate(&username).await?;
    Ok(Json(stats))
}
