//! Infrastructure layer for storage backends.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - URL store implementations

pub mod persistence;
