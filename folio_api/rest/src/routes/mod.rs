use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod contact;
pub mod health;

fn error(code: StatusCode, error: &'static str) -> Response {
    (code, Json(ApiError { error })).into_response()
}
