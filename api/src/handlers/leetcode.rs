//! LeetCode stats handler

use axum::{extract::Path, Json};

use crate::app::leetcode;
use crate::domain::entities::LeetCodeStats;

/// GET /api/leetcode/:username
pub async fn get_leetcode_stats(Path(username): Path<String>) -> Json<LeetCodeStats> {
    Json(leetcode::stats(&username).await)
}
