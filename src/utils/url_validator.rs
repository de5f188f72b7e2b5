//! Validation of URLs submitted for shortening.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute URL with both a scheme and a host.
///
/// The scheme is not restricted to HTTP(S). The input is stored and later
/// sent back as a `Location` header verbatim, so anything the URL parser
/// would silently repair is rejected instead: whitespace, control
/// characters and the authority-less `scheme:host` form.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for an empty string
/// - [`UrlValidationError::InvalidFormat`] when parsing fails (relative URLs included)
///   or the input contains whitespace or control characters
/// - [`UrlValidationError::MissingHost`] for URLs without a `//host` part,
///   such as `mailto:` links or `https:example.com`
///
/// # Examples
///
/// ```
/// use shortly::utils::url_validator::validate_url;
///
/// assert!(validate_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_url("example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    // The parser accepts `https:example.com` and invents the missing `//`
    let has_authority = input
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));
    if !has_authority {
        return Err(UrlValidationError::MissingHost);
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
