use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::contact::flow::{ContactFlow, ContactForm, ContactOutcome};
use crate::contact::session::SessionContext;
use crate::errors::AppError;
use crate::models::submission::Submission;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Absent and `null` fields both deserialize to `None` and are checked as "".
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub submission: Submission,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let session_id = state.sessions.create().await;
    let active = state.sessions.len().await;
    info!(%session_id, active, "Session created");
    (StatusCode::CREATED, Json(SessionCreatedResponse { session_id }))
}

/// POST /api/v1/sessions/:id/contact
///
/// 201 when recorded and emailed, 202 when recorded but the email failed.
pub async fn handle_contact(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let session = find_session(&state, &session_id).await?;
    let Json(req) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let mut session = session.lock().await;

    let form = ContactForm {
        email: req.email.as_deref().unwrap_or(""),
        phone: req.phone.as_deref().unwrap_or(""),
        notes: req.notes.as_deref().unwrap_or(""),
    };

    let outcome = ContactFlow::new(state.notifier.as_ref(), &state.config.mail)
        .submit(&mut session, form)
        .await;

    let message = outcome.message();
    match outcome {
        ContactOutcome::Rejected(field) => Err(AppError::Validation(field.to_string())),
        ContactOutcome::Notified(submission) => Ok((
            StatusCode::CREATED,
            Json(ContactResponse {
                status: "sent",
                message,
                error: None,
                submission,
            }),
        )),
        ContactOutcome::NotifyFailed { submission, error } => Ok((
            StatusCode::ACCEPTED,
            Json(ContactResponse {
                status: "recorded",
                message,
                error: Some(error.to_string()),
                submission,
            }),
        )),
    }
}

/// GET /api/v1/sessions/:id/submissions
pub async fn handle_list_submissions(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<Submission>>, AppError> {
    let session = find_session(&state, &session_id).await?;
    let submissions = session.lock().await.store().list_all().to_vec();
    Ok(Json(submissions))
}

/// A malformed id can never name a session, so it is reported as unknown.
async fn find_session(
    state: &AppState,
    raw_id: &str,
) -> Result<Arc<Mutex<SessionContext>>, AppError> {
    let not_found = || AppError::NotFound(format!("Session {raw_id} not found"));
    let id = Uuid::parse_str(raw_id).map_err(|_| not_found())?;
    state.sessions.get(id).await.ok_or_else(not_found)
}
