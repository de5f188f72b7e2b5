//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::domain::repositories::UrlStore;

/// Handler state: services plus the store they share.
///
/// The store is passed in explicitly so tests and alternative backends can
/// supply their own.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn UrlStore>>,
    pub stats_service: Arc<StatsService<dyn UrlStore>>,
    pub store: Arc<dyn UrlStore>,
}

impl AppState {
    /// Wires the services around `store` using the redirect settings from `config`.
    pub fn new(store: Arc<dyn UrlStore>, config: &Config) -> Self {
        let link_service = Arc::new(LinkService::new(
            store.clone(),
            config.redirect_url.clone(),
            config.port.clone(),
        ));
        let stats_service = Arc::new(StatsService::new(store.clone()));

        Self {
            link_service,
            stats_service,
            store,
        }
    }
}
