use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use messhall_core::ItemId;
use messhall_inventory::{Item, NewItem, QuantityPolicy, UseItem};

use super::r#trait::{ItemStore, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Inner {
    items: BTreeMap<ItemId, Item>,
    last_id: i64,
}

/// In-memory item store.
///
/// Intended for tests/dev. Ids are handed out from a counter and never
/// reused, matching the SQLite backend.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
    policy: QuantityPolicy,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: QuantityPolicy) -> Self {
        Self {
            inner: RwLock::default(),
            policy,
        }
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable("lock poisoned".to_string())
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(inner.items.values().cloned().collect())
    }

    async fn get(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(inner.items.get(&id).cloned())
    }

    async fn count(&self) -> StoreResult<u64> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(inner.items.len() as u64)
    }

    async fn add(&self, item: NewItem) -> StoreResult<Item> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        inner.last_id += 1;
        let item = Item::from_new(ItemId::new(inner.last_id), item);
        inner.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn use_item(&self, cmd: UseItem) -> StoreResult<Item> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        let item = inner
            .items
            .get_mut(&cmd.id)
            .ok_or(StoreError::NotFound(cmd.id))?;
        item.quantity = item.remaining_after(cmd.quantity_used, self.policy)?;
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        inner
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(name: &str, qty: f64) -> NewItem {
        NewItem::new(name, qty, "kg").unwrap()
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryItemStore::new();
        let a = store.add(new_item("Rice", 1.0)).await.unwrap();
        let b = store.add(new_item("Dal", 1.0)).await.unwrap();
        store.delete(b.id).await.unwrap();
        let c = store.add(new_item("Wheat", 1.0)).await.unwrap();

        assert_eq!(a.id, ItemId::new(1));
        assert_eq!(c.id, ItemId::new(3));
    }

    #[tokio::test]
    async fn reject_policy_leaves_item_unchanged() {
        let store = InMemoryItemStore::with_policy(QuantityPolicy::RejectIfInsufficient);
        let item = store.add(new_item("Sugar", 2.0)).await.unwrap();

        let err = store
            .use_item(UseItem::new(item.id, 5.0).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Domain(_)));
        assert_eq!(store.get(item.id).await.unwrap().unwrap().quantity, 2.0);
    }
}
