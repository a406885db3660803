//! Infrastructure layer: the durable item store and its configuration.

pub mod config;
pub mod store;


pub use config::StoreConfig;
pub use store::{InMemoryItemStore, ItemStore, SqliteItemStore, StoreError, StoreResult};
