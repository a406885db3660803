//! Store configuration.

use messhall_inventory::QuantityPolicy;

/// Default on-disk database, created next to the process on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://mess_stock.db";

/// Connection and behaviour settings for [`crate::SqliteItemStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub quantity_policy: QuantityPolicy,
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    /// Private in-memory database; lives as long as the store.
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    pub fn with_policy(mut self, policy: QuantityPolicy) -> Self {
        self.quantity_policy = policy;
        self
    }

    /// In-memory SQLite databases are per-connection, so the pool must stay at one.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }

    pub fn effective_max_connections(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.max_connections.max(1)
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            quantity_policy: QuantityPolicy::default(),
        }
    }
}
