//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}`                         - Short link redirect
//! - `GET  /health`                          - Health check
//! - `POST /{api_prefix}/v{version}/shorten` - Create a short link
//! - `GET  /{api_prefix}/v{version}/stats/{id}` - Visit count
//!
//! Static routes win over `/{alias}`, so the alias `health` (id
//! 6_696_302_071) never redirects. Its record is still stored and counted
//! by the stats endpoint.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/{alias}/` redirects too

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - supplies the API prefix and version for the nested API routes
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest(&config.api_base_path(), api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
