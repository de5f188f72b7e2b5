//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes, nested under `/{api_prefix}/v{api_version}`.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create a short link
/// - `GET  /stats/{id}`   - Visit count of a short link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{id}", get(stats_handler))
}
