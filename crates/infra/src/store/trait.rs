use async_trait::async_trait;
use thiserror::Error;

use messhall_core::{DomainError, ItemId};
use messhall_inventory::{Item, NewItem, UseItem};

pub type StoreResult<T> = Result<T, StoreError>;

/// Item store operation error.
///
/// `NotFound` is an expected outcome callers branch on. `Database` and
/// `Unavailable` are infrastructure faults and should surface as internal
/// errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// A domain rule rejected the operation (e.g. insufficient stock).
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Durable set of stock items.
///
/// Every operation is a self-contained read and/or write; the store keeps no
/// per-request state. Callers receive owned snapshots.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All stored items, ordered by id.
    async fn list(&self) -> StoreResult<Vec<Item>>;

    async fn get(&self, id: ItemId) -> StoreResult<Option<Item>>;

    async fn count(&self) -> StoreResult<u64>;

    /// Persist a new item under a fresh id and return it.
    async fn add(&self, item: NewItem) -> StoreResult<Item>;

    /// Consume stock from an item and return its updated state.
    ///
    /// Fails with `NotFound` (and mutates nothing) when the id is unknown.
    async fn use_item(&self, cmd: UseItem) -> StoreResult<Item>;

    /// Remove an item permanently.
    async fn delete(&self, id: ItemId) -> StoreResult<()>;

    /// Insert `defaults` when the store is empty; returns how many were inserted.
    async fn seed_if_empty(&self, defaults: &[NewItem]) -> StoreResult<usize> {
        if self.count().await? > 0 {
            return Ok(0);
        }
        for item in defaults {
            self.add(item.clone()).await?;
        }
        Ok(defaults.len())
    }
}
