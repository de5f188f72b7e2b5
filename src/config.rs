//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Variables may come from the process environment or from an env
//! file loaded beforehand (see `--env-file` in `main.rs`).
//!
//! ## Variables
//!
//! - `PORT` - Listen port in `:<port>` form (default: `:8080`); also appended
//!   to `REDIRECT_URL` when building short links
//! - `LISTEN_HOST` - Bind host (default: `0.0.0.0`)
//! - `REDIRECT_URL` - Base address of short links (default: `http://localhost`)
//! - `API_PREFIX` - First path segment of API routes (default: `api`)
//! - `API_VERSION` - API version number, routes live under `v<n>` (default: `1`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export PORT=":8080"
//! export REDIRECT_URL="http://localhost"
//! export API_PREFIX="api"
//! export API_VERSION="1"
//! ```

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port string in `:<port>` form, used verbatim in redirect targets.
    pub port: String,
    pub listen_host: String,
    pub redirect_url: String,
    pub api_prefix: String,
    pub api_version: u32,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: ":8080".to_string(),
            listen_host: "0.0.0.0".to_string(),
            redirect_url: "http://localhost".to_string(),
            api_prefix: "api".to_string(),
            api_version: 1,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if `API_VERSION` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = env::var("PORT").unwrap_or(defaults.port);
        let listen_host = env::var("LISTEN_HOST").unwrap_or(defaults.listen_host);
        let redirect_url = env::var("REDIRECT_URL").unwrap_or(defaults.redirect_url);
        let api_prefix = env::var("API_PREFIX").unwrap_or(defaults.api_prefix);

        let api_version = match env::var("API_VERSION") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("API_VERSION must be a positive integer, got '{v}'"))?,
            Err(_) => defaults.api_version,
        };

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            port,
            listen_host,
            redirect_url,
            api_prefix,
            api_version,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is not `:<port>` with a valid port number
    /// - `redirect_url` is not an absolute `http`/`https` URL
    /// - `api_prefix` is empty or contains `/`
    /// - `api_version` is 0
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let Some(port_number) = self.port.strip_prefix(':') else {
            anyhow::bail!("PORT must be in format ':<port>', got '{}'", self.port);
        };
        port_number
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{}'", self.port))?;

        if self.listen_host.is_empty() {
            anyhow::bail!("LISTEN_HOST must not be empty");
        }

        let redirect = url::Url::parse(&self.redirect_url)
            .with_context(|| format!("REDIRECT_URL is not a valid URL: '{}'", self.redirect_url))?;
        if !matches!(redirect.scheme(), "http" | "https") {
            anyhow::bail!(
                "REDIRECT_URL must start with 'http://' or 'https://', got '{}'",
                self.redirect_url
            );
        }
        if self.redirect_url.ends_with('/') {
            anyhow::bail!(
                "REDIRECT_URL must not end with '/', got '{}'",
                self.redirect_url
            );
        }

        if self.api_prefix.is_empty() || self.api_prefix.contains('/') {
            anyhow::bail!(
                "API_PREFIX must be a single non-empty path segment, got '{}'",
                self.api_prefix
            );
        }

        if self.api_version == 0 {
            anyhow::bail!("API_VERSION must be at least 1");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub fn listen_addr(&self) -> String {
        format!("{}{}", self.listen_host, self.port)
    }

    /// Path prefix of the versioned API, e.g. `/api/v1`.
    pub fn api_base_path(&self) -> String {
        format!("/{}/v{}", self.api_prefix, self.api_version)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Redirect base: {}{}", self.redirect_url, self.port);
        tracing::info!("  API base path: {}", self.api_base_path());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::from_path()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
