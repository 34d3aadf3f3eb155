use serde::Serialize;

pub mod contact;

/// Body of every 4xx answer: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
}

/// Body of a failed dispatch: `{"error": "...", "details": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiDispatchError {
    pub error: &'static str,
    pub details: String,
}
