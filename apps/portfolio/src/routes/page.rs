use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::models::profile::{Profile, PROFILE};
use crate::render::feedback::{feedback_label, FeedbackLabel, MAX_RATING, MIN_RATING};
use crate::render::render_page;
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = render_page(&PROFILE, &state.assets)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("page rendering failed: {e}")))?;
    Ok(Html(page))
}

/// GET /resume.pdf
pub async fn handle_resume(State(state): State<AppState>) -> Result<Response, AppError> {
    let resume = state
        .assets
        .resume
        .as_ref()
        .ok_or_else(|| AppError::NotFound("Resume document is not available".to_string()))?;

    let disposition = format!("attachment; filename=\"{}\"", resume.file_name.replace('"', ""));
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        resume.data.clone(),
    )
        .into_response())
}

/// GET /api/v1/profile
pub async fn handle_profile() -> Json<&'static Profile> {
    Json(&PROFILE)
}

/// GET /api/v1/feedback/:rating
///
/// Anything that is not an integer in 1..=5 is a validation error.
pub async fn handle_feedback(Path(raw): Path<String>) -> Result<Json<FeedbackLabel>, AppError> {
    raw.parse::<u8>()
        .ok()
        .and_then(feedback_label)
        .map(Json)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            ))
        })
}
