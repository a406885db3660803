//! Item store boundary.
//!
//! One trait, two backends: SQLite for the running service and an in-memory
//! map for tests/dev.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryItemStore;
pub use r#trait::{ItemStore, StoreError, StoreResult};
pub use sqlite::SqliteItemStore;
