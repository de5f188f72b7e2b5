//! Store trait for URL records.

use crate::domain::entities::UrlRecord;
use async_trait::async_trait;

/// Errors raised by [`UrlStore`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record matches the requested alias or id.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The backend cannot serve requests (e.g. a poisoned lock or a lost connection).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// No further ids can be allocated.
    #[error("store id space exhausted")]
    Capacity,
}

/// Keyed record store behind the shortening workflow.
///
/// Each method is atomic with respect to the others; a completed write is
/// visible to every later read.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlStore`] - lock-guarded hash map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url_store.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Finds a record by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if not found; absence is not an error here
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend fails.
    async fn get_by_id(&self, id: i64) -> Result<Option<UrlRecord>, StoreError>;

    /// Finds a record by alias.
    ///
    /// # Errors
    ///
    /// Unlike [`UrlStore::get_by_id`], an unknown alias is an error:
    /// returns [`StoreError::NotFound`].
    async fn get_by_alias(&self, alias: &str) -> Result<UrlRecord, StoreError>;

    /// Stores a record and returns it as stored.
    ///
    /// A record carrying [`crate::domain::entities::UNASSIGNED_ID`] gets the
    /// value of [`UrlStore::allocate_next_id`] as its id. Any other id is kept
    /// as-is; reusing an id replaces the previous record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Capacity`] when
    /// the record cannot be stored.
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, StoreError>;

    /// Increments the stored visit count of `record` by one.
    ///
    /// The new count is written back into `record`, so the caller's copy and
    /// the stored record agree afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has `record.id`; nothing
    /// is changed in that case.
    async fn mark_visited(&self, record: &mut UrlRecord) -> Result<(), StoreError>;

    /// Returns the id the next auto-assigned insert will receive.
    ///
    /// The policy is "number of stored records". Every caller goes through
    /// this method so the policy can be swapped for a monotonic counter.
    async fn allocate_next_id(&self) -> Result<i64, StoreError>;

    /// Reports whether the backend can serve requests.
    async fn health_check(&self) -> bool;
}
