//! # Shortly
//!
//! A small URL shortening service built with Axum and an in-memory store.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - URL records and the store contract
//! - **Application Layer** ([`application`]) - Shortening, resolve and stats workflows
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store implementation
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Short Links
//!
//! Every stored URL receives the next sequential id, starting at 0. The id is
//! encoded with [`utils::alias_encoder`] into a base-62 alias, so the first
//! links get `a`, `b`, `c`, ... and the short link is
//! `REDIRECT_URL + PORT + "/" + alias`.
//!
//! ## Quick Start
//!
//! ```bash
//! export PORT=":8080"
//! export REDIRECT_URL="http://localhost"
//! cargo run
//!
//! curl -X POST localhost:8080/api/v1/shorten -d '{"url":"https://example.com"}' \
//!     -H 'content-type: application/json'
//! # {"Result":"http://localhost:8080/a"}
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{UNASSIGNED_ID, UrlRecord};
    pub use crate::domain::repositories::{StoreError, UrlStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUrlStore;
    pub use crate::state::AppState;
}
