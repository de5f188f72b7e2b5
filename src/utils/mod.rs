//! Pure helpers used by the application layer.
//!
//! - [`alias_encoder`] - Id-to-alias base-62 encoding
//! - [`url_validator`] - Absolute URL validation for shorten requests

pub mod alias_encoder;
pub mod url_validator;
