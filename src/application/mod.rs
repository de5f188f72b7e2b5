//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating store calls,
//! validation and alias encoding. Services consume store traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and redirect resolution
//! - [`services::stats_service::StatsService`] - Visit counts

pub mod services;
