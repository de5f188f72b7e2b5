//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the rules that create and mutate
//! them live in the application services and the store implementations.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A shortened URL with its alias, redirect target and visit count

pub mod url_record;

pub use url_record::{UNASSIGNED_ID, UrlRecord};
