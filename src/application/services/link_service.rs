//! Link shortening and redirect resolution service.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{StoreError, UrlStore};
use crate::error::AppError;
use crate::utils::alias_encoder::try_encode;
use crate::utils::url_validator::validate_url;

/// Service for creating short links and resolving them back.
///
/// The alias of a link is derived from the id the store allocates, and the
/// redirect target is `redirect_base + port + "/" + alias`.
pub struct LinkService<S: UrlStore + ?Sized> {
    store: Arc<S>,
    redirect_base: String,
    port: String,
    /// Serializes id allocation and insertion across concurrent shortens.
    allocation: Mutex<()>,
}

impl<S: UrlStore + ?Sized> LinkService<S> {
    /// Creates a new link service.
    ///
    /// # Arguments
    ///
    /// - `store` - record store shared with the other services
    /// - `redirect_base` - base address of short links, e.g. `http://localhost`
    /// - `port` - port string appended to the base, e.g. `:8080`
    pub fn new(store: Arc<S>, redirect_base: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            store,
            redirect_base: redirect_base.into(),
            port: port.into(),
            allocation: Mutex::new(()),
        }
    }

    /// Shortens `original` and returns its redirect target.
    ///
    /// # Flow
    ///
    /// 1. Validate the URL (non-empty, absolute with a host)
    /// 2. Allocate the next id from the store
    /// 3. Encode the id as an alias
    /// 4. Build the redirect target and insert the record with zero visits
    ///
    /// Nothing is written to the store when validation fails.
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyUrl`] / [`AppError::InvalidUrl`] for bad input
    /// - [`AppError::Store`] if allocation or insertion fails
    /// - [`AppError::Encoding`] if the allocated id cannot be encoded
    pub async fn shorten(&self, original: String) -> Result<String, AppError> {
        validate_url(&original)?;

        let _allocation = self.allocation.lock().await;

        let id = self
            .store
            .allocate_next_id()
            .await
            .map_err(AppError::Store)?;

        let alias = try_encode(id)?;
        let redirect_target = self.redirect_target(&alias);

        let record = UrlRecord::new(id, original, alias, redirect_target);
        let stored = self.store.insert(record).await.map_err(AppError::Store)?;

        info!(id = stored.id, alias = %stored.alias, "Created short link");

        Ok(stored.redirect_target)
    }

    /// Resolves an alias to its original URL and counts the visit.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no record has this alias
    /// - [`AppError::Store`] if the lookup or the visit update fails
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        let mut record = self
            .store
            .get_by_alias(alias)
            .await
            .map_err(|e| match e {
                StoreError::NotFound(_) => AppError::NotFound("Short link not found".to_string()),
                other => AppError::Store(other),
            })?;

        self.store
            .mark_visited(&mut record)
            .await
            .map_err(AppError::Store)?;

        debug!(alias, visits = record.visit_count, "Resolved short link");

        Ok(record.original)
    }

    /// Builds the full short URL for an alias.
    pub fn redirect_target(&self, alias: &str) -> String {
        format!("{}{}/{}", self.redirect_base, self.port, alias)
    }
}
