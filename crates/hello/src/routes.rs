//! Greeting handlers.

use axum::{
    Json,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::HelloError;

/// Prefix of every greeting ("Good afternoon, ").
pub const GREETING_PREFIX: &str = "Добрый день, ";

fn greeting(name: &str) -> String {
    format!("{GREETING_PREFIX}{name}")
}

#[derive(Debug, Default, Deserialize)]
pub struct GreetQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GreetRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GreetResponse {
    pub response: String,
}

/// `GET /testget?name=...` - plain-text greeting. A missing name greets nobody.
#[instrument]
pub async fn greet_query(query: Result<Query<GreetQuery>, QueryRejection>) -> String {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    greeting(&query.name)
}

/// `POST /testpost` - JSON greeting.
#[instrument(skip(payload))]
pub async fn greet_json(
    payload: Result<Json<GreetRequest>, JsonRejection>,
) -> Result<Json<GreetResponse>, HelloError> {
    let Json(request) = payload?;
    tracing::debug!(?request, "Greeting request");

    Ok(Json(GreetResponse {
        response: greeting(&request.name),
    }))
}
