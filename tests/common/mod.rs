#![allow(dead_code)]

use std::sync::Arc;

use shortly::config::Config;
use shortly::domain::entities::UrlRecord;
use shortly::domain::repositories::UrlStore;
use shortly::infrastructure::persistence::InMemoryUrlStore;
use shortly::state::AppState;

/// Base address of short links produced by [`create_test_state`].
pub const REDIRECT_BASE: &str = "http://localhost:8080";

pub fn create_test_store() -> Arc<InMemoryUrlStore> {
    Arc::new(InMemoryUrlStore::new())
}

pub fn create_test_state(store: Arc<InMemoryUrlStore>) -> AppState {
    let store: Arc<dyn UrlStore> = store;
    AppState::new(store, &Config::default())
}

pub async fn create_test_link(store: &InMemoryUrlStore, id: i64, alias: &str, url: &str) {
    store
        .insert(UrlRecord::new(
            id,
            url.to_string(),
            alias.to_string(),
            format!("{REDIRECT_BASE}/{alias}"),
        ))
        .await
        .unwrap();
}

pub async fn create_visited_link(
    store: &InMemoryUrlStore,
    id: i64,
    alias: &str,
    url: &str,
    visits: u64,
) {
    let mut record = UrlRecord::new(
        id,
        url.to_string(),
        alias.to_string(),
        format!("{REDIRECT_BASE}/{alias}"),
    );
    record.visit_count = visits;
    store.insert(record).await.unwrap();
}
