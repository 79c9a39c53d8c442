//! Résumé file handlers
//!
//! Both routes stream the same configured PDF; they differ only in the
//! Content-Disposition offered to the browser.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::AppState;

const ATTACHMENT_DISPOSITION: &str = "attachment; filename=\"resume.pdf\"";
const INLINE_DISPOSITION: &str = "inline";

/// GET /api/resume/download
pub async fn download_resume(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    serve_resume(&state.config.resume_path, ATTACHMENT_DISPOSITION).await
}

/// GET /api/resume/preview
pub async fn preview_resume(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    serve_resume(&state.config.resume_path, INLINE_DISPOSITION).await
}

async fn serve_resume(
    path: &str,
    disposition: &'static str,
) -> Result<impl IntoResponse, AppError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::error!("Resume file missing at {}", path);
            return Err(AppError::NotFound("Resume not found".to_string()));
        }
        Err(e) => {
            return Err(AppError::Internal(format!(
                "failed to read resume at {}: {}",
                path, e
            )));
        }
    };

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/pdf"),
            ),
            (
                header::CONTENT_DISPOSITION,
                HeaderValue::from_static(disposition),
            ),
        ],
        bytes,
    ))
}
