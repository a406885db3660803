//! SQLite-backed item store.
//!
//! A single `items` table, created on connect when absent. Ids come from
//! `AUTOINCREMENT`, so a deleted item's id is never handed out again.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{Span, instrument};

use messhall_core::{DomainError, ItemId};
use messhall_inventory::{Item, NewItem, QUANTITY_OUT_OF_RANGE, QuantityPolicy, UseItem};

use super::r#trait::{ItemStore, StoreError, StoreResult};
use crate::config::StoreConfig;

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    quantity: f64,
    unit: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId::new(row.id),
            name: row.name,
            quantity: row.quantity,
            unit: row.unit,
        }
    }
}

/// Durable item store over a SQLite connection pool.
///
/// Cheap to clone; all clones share the pool.
#[derive(Debug, Clone)]
pub struct SqliteItemStore {
    pool: SqlitePool,
    policy: QuantityPolicy,
}

impl SqliteItemStore {
    /// Open (or create) the database described by `config` and ensure the schema exists.
    #[instrument(skip(config), fields(database_url = %config.database_url))]
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        let mut pool_options =
            SqlitePoolOptions::new().max_connections(config.effective_max_connections());
        if config.is_in_memory() {
            // Dropping the only connection would drop the database with it.
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        let store = Self::from_pool(pool, config.quantity_policy);
        store.ensure_schema().await?;

        tracing::info!(policy = %config.quantity_policy, "item store ready");
        Ok(store)
    }

    /// Wrap an existing pool. The caller is responsible for calling [`Self::ensure_schema`].
    pub fn from_pool(pool: SqlitePool, policy: QuantityPolicy) -> Self {
        Self { pool, policy }
    }

    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                name      TEXT NOT NULL,
                quantity  REAL NOT NULL,
                unit      TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Close the pool; outstanding clones stop working.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn subtract_unchecked(&self, cmd: UseItem) -> StoreResult<Option<Item>> {
        // SQLite turns an overflowing REAL into infinity; such rows are left alone.
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            UPDATE items
            SET quantity = quantity - ?1
            WHERE id = ?2 AND abs(quantity - ?1) <= ?3
            RETURNING id, name, quantity, unit
            "#,
        )
        .bind(cmd.quantity_used)
        .bind(cmd.id.get())
        .bind(f64::MAX)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Item::from(row))),
            None => match self.get(cmd.id).await? {
                Some(_) => Err(DomainError::validation(QUANTITY_OUT_OF_RANGE).into()),
                None => Ok(None),
            },
        }
    }

    async fn subtract_with_policy(&self, cmd: UseItem) -> StoreResult<Option<Item>> {
        let Some(current) = self.get(cmd.id).await? else {
            return Ok(None);
        };
        let remaining = current.remaining_after(cmd.quantity_used, self.policy)?;

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            UPDATE items
            SET quantity = ?1
            WHERE id = ?2
            RETURNING id, name, quantity, unit
            "#,
        )
        .bind(remaining)
        .bind(cmd.id.get())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Item::from))
    }
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    #[instrument(skip(self), fields(item_count = tracing::field::Empty))]
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, quantity, unit
            FROM items
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Span::current().record("item_count", rows.len());
        Ok(rows.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn get(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, quantity, unit
            FROM items
            WHERE id = ?1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Item::from))
    }

    async fn count(&self) -> StoreResult<u64> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(n.max(0) as u64)
    }

    #[instrument(skip(self, item), fields(name = %item.name()))]
    async fn add(&self, item: NewItem) -> StoreResult<Item> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO items (name, quantity, unit)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(item.name())
        .bind(item.quantity())
        .bind(item.unit())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(item_id = id, "item added");
        Ok(Item::from_new(ItemId::new(id), item))
    }

    #[instrument(skip(self), fields(item_id = %cmd.id, quantity_used = cmd.quantity_used))]
    async fn use_item(&self, cmd: UseItem) -> StoreResult<Item> {
        let updated = match self.policy {
            QuantityPolicy::Unchecked => self.subtract_unchecked(cmd).await?,
            _ => self.subtract_with_policy(cmd).await?,
        };

        match updated {
            Some(item) => {
                tracing::info!(remaining = item.quantity, "stock consumed");
                Ok(item)
            }
            None => Err(StoreError::NotFound(cmd.id)),
        }
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn delete(&self, id: ItemId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        tracing::info!("item deleted");
        Ok(())
    }

    /// Seeds inside one transaction so a failed start never leaves half a catalog.
    #[instrument(skip(self, defaults), fields(defaults = defaults.len()))]
    async fn seed_if_empty(&self, defaults: &[NewItem]) -> StoreResult<usize> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tracing::debug!(existing, "store already populated; skipping seed");
            return Ok(0);
        }

        for item in defaults {
            sqlx::query("INSERT INTO items (name, quantity, unit) VALUES (?1, ?2, ?3)")
                .bind(item.name())
                .bind(item.quantity())
                .bind(item.unit())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::info!(inserted = defaults.len(), "seeded default stock");
        Ok(defaults.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with(policy: QuantityPolicy) -> SqliteItemStore {
        SqliteItemStore::connect(&StoreConfig::in_memory().with_policy(policy))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn clamp_policy_stops_at_zero() {
        let store = store_with(QuantityPolicy::ClampAtZero).await;
        let item = store
            .add(NewItem::new("Milk", 4.0, "liters").unwrap())
            .await
            .unwrap();

        let updated = store
            .use_item(UseItem::new(item.id, 10.0).unwrap())
            .await
            .unwrap();
        assert_eq!(updated.quantity, 0.0);
    }

    #[tokio::test]
    async fn reject_policy_reports_domain_error() {
        let store = store_with(QuantityPolicy::RejectIfInsufficient).await;
        let item = store
            .add(NewItem::new("Milk", 4.0, "liters").unwrap())
            .await
            .unwrap();

        let err = store
            .use_item(UseItem::new(item.id, 10.0).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Domain(_)));
        assert_eq!(store.get(item.id).await.unwrap().unwrap().quantity, 4.0);

        let err = store
            .use_item(UseItem::new(ItemId::new(999), 1.0).unwrap())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_deleting_the_newest() {
        let store = store_with(QuantityPolicy::Unchecked).await;
        let first = store.add(NewItem::new("A", 1.0, "kg").unwrap()).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.add(NewItem::new("B", 1.0, "kg").unwrap()).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn data_survives_reconnect_to_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("stock.db").display());
        let config = StoreConfig::new(url);

        let store = SqliteItemStore::connect(&config).await.unwrap();
        store.add(NewItem::new("Ghee", 5.0, "kg").unwrap()).await.unwrap();
        store.close().await;

        let reopened = SqliteItemStore::connect(&config).await.unwrap();
        let items = reopened.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Ghee");
        assert_eq!(reopened.seed_if_empty(&[]).await.unwrap(), 0);
    }
}
