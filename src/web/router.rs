//! Route definitions for web server.

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::core::QueueRepository;

use super::api;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn QueueRepository>,

    /// Cancelled on shutdown so waiting requests return early.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(repo: Arc<dyn QueueRepository>, shutdown: CancellationToken) -> Self {
        Self { repo, shutdown }
    }
}

/// Create the full app router. Every path is a queue key.
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::get_root).put(api::put_root))
        .route("/*key", get(api::get_value).put(api::put_value))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
