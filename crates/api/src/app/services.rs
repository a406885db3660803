use std::sync::Arc;

use anyhow::Context;

use messhall_infra::{ItemStore, SqliteItemStore};
use messhall_inventory::default_catalog;

use crate::app::stats::{FixedStats, StatsProvider};
use crate::config::ApiConfig;

/// Handle shared by every request handler.
pub type SharedServices = Arc<AppServices>;

/// Process-wide collaborators, created once at startup and passed to handlers
/// through router state.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ItemStore>,
    stats: Arc<dyn StatsProvider>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ItemStore>, stats: Arc<dyn StatsProvider>) -> Self {
        Self { store, stats }
    }

    pub fn store(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }

    pub fn stats(&self) -> &dyn StatsProvider {
        self.stats.as_ref()
    }
}

/// Open the configured store and seed it if it is empty.
pub async fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let store = SqliteItemStore::connect(&config.store)
        .await
        .with_context(|| format!("failed to open item store at {}", config.store.database_url))?;

    if config.seed_defaults {
        let defaults = default_catalog().context("default stock catalog is invalid")?;
        let inserted = store
            .seed_if_empty(&defaults)
            .await
            .context("failed to seed default stock")?;
        tracing::info!(inserted, "startup seeding finished");
    }

    Ok(AppServices::new(Arc::new(store), Arc::new(FixedStats)))
}
