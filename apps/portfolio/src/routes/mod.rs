pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(page::handle_index))
        .route("/resume.pdf", get(page::handle_resume))
        .route("/api/v1/profile", get(page::handle_profile))
        .route("/api/v1/feedback/:rating", get(page::handle_feedback))
        // Contact API
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id/contact",
            post(handlers::handle_contact),
        )
        .route(
            "/api/v1/sessions/:id/submissions",
            get(handlers::handle_list_submissions),
        )
        .with_state(state)
}
