//! Stock room inventory domain.
//!
//! This crate contains the rules for stock items implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod item;
pub mod policy;

pub use catalog::{DEFAULT_CATALOG, default_catalog};
pub use item::{Item, MAX_NAME_LEN, MAX_UNIT_LEN, NewItem, UseItem};
pub use policy::{QUANTITY_OUT_OF_RANGE, QuantityPolicy};
