//! API endpoints for queues.
//!
//! The key is the request path without its leading slash; the value and the
//! wait budget come from the `v` and `timeout` query parameters. Request
//! bodies are ignored.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::core::{get_with_wait, WaitBudget};
use crate::error::{Error, Result};
use crate::web::router::AppState;

/// Query parameters for popping a value.
#[derive(Deserialize)]
pub struct GetQuery {
    pub timeout: Option<String>,
}

/// Query parameters for pushing a value.
#[derive(Deserialize)]
pub struct PutQuery {
    pub v: Option<String>,
}

/// Pop the oldest value under a key, waiting up to `timeout` seconds.
pub async fn get_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<GetQuery>,
) -> Result<Json<String>> {
    pop(&state, &key, query).await
}

/// Push a value under a key.
pub async fn put_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<PutQuery>,
) -> Result<StatusCode> {
    push(&state, &key, query).await
}

/// `GET /` addresses the empty key.
pub async fn get_root(
    State(state): State<AppState>,
    Query(query): Query<GetQuery>,
) -> Result<Json<String>> {
    pop(&state, "", query).await
}

/// `PUT /` addresses the empty key.
pub async fn put_root(
    State(state): State<AppState>,
    Query(query): Query<PutQuery>,
) -> Result<StatusCode> {
    push(&state, "", query).await
}

async fn pop(state: &AppState, key: &str, query: GetQuery) -> Result<Json<String>> {
    let budget = WaitBudget::parse(query.timeout.as_deref())?;

    let value = get_with_wait(state.repo.as_ref(), key, budget, &state.shutdown).await?;

    Ok(Json(value))
}

async fn push(state: &AppState, key: &str, query: PutQuery) -> Result<StatusCode> {
    let value = query
        .v
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingValue)?;

    state.repo.put(key, &value).await?;

    Ok(StatusCode::OK)
}
