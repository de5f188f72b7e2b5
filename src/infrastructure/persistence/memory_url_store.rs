//! In-memory implementation of the URL store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{StoreError, UrlStore};

/// Records keyed by id, plus an alias index for redirect lookups.
///
/// Both maps live under one lock so they never disagree.
#[derive(Debug, Default)]
struct Tables {
    records: HashMap<i64, UrlRecord>,
    aliases: HashMap<String, i64>,
}

impl Tables {
    fn next_id(&self) -> Result<i64, StoreError> {
        i64::try_from(self.records.len()).map_err(|_| StoreError::Capacity)
    }
}

/// Process-local URL store.
///
/// Every operation takes the lock once, so each one is atomic and a write
/// is visible to all later reads. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryUrlStore {
    tables: RwLock<Tables>,
}

impl InMemoryUrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.records.len())
    }

    /// Returns true if nothing has been stored yet.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.records.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables.read().map_err(|e| {
            error!("URL store lock poisoned: {}", e);
            StoreError::Unavailable("lock poisoned".to_string())
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables.write().map_err(|e| {
            error!("URL store lock poisoned: {}", e);
            StoreError::Unavailable("lock poisoned".to_string())
        })
    }
}

#[async_trait]
impl UrlStore for InMemoryUrlStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<UrlRecord>, StoreError> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    async fn get_by_alias(&self, alias: &str) -> Result<UrlRecord, StoreError> {
        let tables = self.read()?;

        tables
            .aliases
            .get(alias)
            .and_then(|id| tables.records.get(id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("no record with alias {alias}")))
    }

    async fn insert(&self, mut record: UrlRecord) -> Result<UrlRecord, StoreError> {
        let mut tables = self.write()?;

        if record.is_unassigned() {
            record.id = tables.next_id()?;
        }

        if let Some(previous) = tables.records.insert(record.id, record.clone()) {
            debug!(id = record.id, "Replacing existing record");
            if tables.aliases.get(&previous.alias) == Some(&previous.id) {
                tables.aliases.remove(&previous.alias);
            }
        }
        tables.aliases.insert(record.alias.clone(), record.id);

        Ok(record)
    }

    async fn mark_visited(&self, record: &mut UrlRecord) -> Result<(), StoreError> {
        let mut tables = self.write()?;

        let stored = tables
            .records
            .get_mut(&record.id)
            .ok_or_else(|| StoreError::NotFound(format!("no record with id {}", record.id)))?;

        stored.visit_count += 1;
        record.visit_count = stored.visit_count;

        Ok(())
    }

    async fn allocate_next_id(&self) -> Result<i64, StoreError> {
        self.read()?.next_id()
    }

    async fn health_check(&self) -> bool {
        !self.tables.is_poisoned()
    }
}
