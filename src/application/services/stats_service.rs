//! Visit statistics service.

use std::sync::Arc;

use crate::domain::repositories::UrlStore;
use crate::error::AppError;

/// Parses a raw link id taken from a request path.
///
/// # Errors
///
/// Returns [`AppError::InvalidId`] if `raw` is not an integer.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::InvalidId(raw.to_string()))
}

/// Service for reading visit counts of short links.
pub struct StatsService<S: UrlStore + ?Sized> {
    store: Arc<S>,
}

impl<S: UrlStore + ?Sized> StatsService<S> {
    /// Creates a new statistics service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns how many times the link with `id` has been resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Store`] if the backend fails.
    pub async fn visits(&self, id: i64) -> Result<u64, AppError> {
        self.store
            .get_by_id(id)
            .await
            .map_err(AppError::Store)?
            .map(|record| record.visit_count)
            .ok_or_else(|| AppError::NotFound("URL not found".to_string()))
    }
}
