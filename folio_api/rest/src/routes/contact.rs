use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactSendMessageError, ContactService};
use folio_models::contact::ContactSubmission;
use serde::Serialize;

use super::error;
use crate::models::{contact::ApiContactSubmission, ApiDispatchError};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(send_message))
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct SendMessageResponse {
    success: bool,
    message: &'static str,
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    payload: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    // a body axum cannot parse is still answered with the usual error shape
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(_) => return error(StatusCode::BAD_REQUEST, "Invalid request body"),
    };

    let submission = match ContactSubmission::try_from(submission) {
        Ok(submission) => submission,
        Err(err) => return error(StatusCode::BAD_REQUEST, err.message()),
    };

    match service.send_message(submission).await {
        Ok(()) => Json(SendMessageResponse {
            success: true,
            message: "Email sent successfully! I'll get back to you soon.",
        })
        .into_response(),
        Err(err) => dispatch_error(err),
    }
}

fn dispatch_error(err: ContactSendMessageError) -> Response {
    tracing::error!("failed to dispatch contact message: {err}");

    let details = match err.to_string() {
        details if details.is_empty() => "Unknown error".into(),
        details => details,
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiDispatchError {
            error: "Failed to send email. Please try again later.",
            details,
        }),
    )
        .into_response()
}
