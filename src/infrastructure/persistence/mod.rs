//! Store implementations.
//!
//! Concrete implementations of domain store traits.
//!
//! # Stores
//!
//! - [`InMemoryUrlStore`] - Process-local URL records (no durability)

pub mod memory_url_store;

pub use memory_url_store::InMemoryUrlStore;
