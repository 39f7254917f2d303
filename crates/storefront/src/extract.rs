//! Request extractors whose rejections use the API error shape.
//!
//! axum's stock `Json` and `Path` reject with plain-text bodies and a mix of
//! 400/415/422 statuses. The API promises `400 {"error": ...}` for any
//! undecodable input, so handlers use these wrappers instead.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::Json;

use crate::error::AppError;

/// JSON body extractor rejecting with [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor rejecting with [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
