//! Visitor counter handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::VisitorStats;
use crate::AppState;

/// GET /api/visitor-stats
pub async fn get_visitor_stats(State(state): State<AppState>) -> Json<VisitorStats> {
    Json(state.visitors.snapshot())
}

#[derive(Serialize)]
pub struct IncrementResponse {
    pub success: bool,
}

/// POST /api/visitor-increment
pub async fn increment_visitors(State(state): State<AppState>) -> Json<IncrementResponse> {
    state.visitors.record_visit();
    Json(IncrementResponse { success: true })
}
