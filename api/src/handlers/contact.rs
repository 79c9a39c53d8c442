//! Contact form handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::ContactMessage;
use crate::error::AppError;
use crate::AppState;

/// Success envelope for contact submissions
#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/contact
///
/// Delivery outcome is not reflected here: a structurally valid payload
/// always gets a success envelope, and failures stay in the server logs.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactMessage>,
) -> Result<Json<ContactResponse>, AppError> {
    let outcome = state.contact.submit(&body).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: outcome.message().to_string(),
    }))
}
