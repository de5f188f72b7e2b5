//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Serialize)]
pub struct ShortenRequest {
    /// The original URL; must be absolute with a scheme and host.
    #[serde(default)]
    pub url: String,
}

/// Response carrying the full short link.
///
/// Serialized as `{"Result": "..."}`; existing clients read the capitalized key.
#[derive(Debug, Deserialize, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "Result")]
    pub result: String,
}
