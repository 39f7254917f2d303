//! Error responses for the hello server.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelloError {
    /// Request body could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for HelloError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request rejected");
        match self {
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
        }
    }
}

impl From<JsonRejection> for HelloError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
