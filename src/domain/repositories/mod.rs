//! Store trait definitions for the domain layer.
//!
//! This module defines the storage interface that the application services
//! depend on. Concrete stores live in `crate::infrastructure::persistence`.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Stores
//!
//! - [`UrlStore`] - URL record lookup, insertion, visit counting and id allocation

pub mod url_store;

pub use url_store::{StoreError, UrlStore};

#[cfg(test)]
pub use url_store::MockUrlStore;
