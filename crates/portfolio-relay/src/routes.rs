//! HTTP endpoints: `POST /contact` and `GET /health`.
//!
//! State machine per request: Validating → (Rejected | Delivering) →
//! (Delivered | DeliveryFailed). A malformed or absent JSON body is
//! treated the same as one with empty fields.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};

use portfolio_types::{
    ContactResponse, ContactSubmission, HealthResponse, ERR_MISSING_FIELDS, ERR_SEND_FAILED,
};

use crate::mailer::OutgoingMail;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/health", get(health))
        .with_state(state)
}

/// Liveness check; no state, always `{ok: true}`.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn submit_contact(
    State(state): State<AppState>,
    payload: Option<Json<ContactSubmission>>,
) -> (StatusCode, Json<ContactResponse>) {
    let submission = payload
        .map(|Json(raw)| raw.trimmed())
        .unwrap_or_default();

    if !submission.is_complete() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse::rejected(ERR_MISSING_FIELDS)),
        );
    }

    let mail = OutgoingMail::from_submission(&submission, &state.sender, &state.recipient);
    match state.mailer.send(&mail).await {
        Ok(id) => {
            tracing::info!(delivery_id = %id, "contact message delivered");
            (StatusCode::OK, Json(ContactResponse::accepted(id)))
        }
        Err(e) => {
            // Internal detail stays server-side; the client sees only the
            // generic reason string.
            tracing::error!("mail delivery failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::rejected(ERR_SEND_FAILED)),
            )
        }
    }
}
