//! Process configuration loaded from environment variables.
//!
//! Every variable is optional; missing ones fall back to a logged default.
//! Present but unparsable values are a startup error.

use std::{fmt::Display, net::SocketAddr, str::FromStr};

use anyhow::anyhow;
use tracing::info;

use messhall_infra::StoreConfig;
use messhall_infra::config::DEFAULT_DATABASE_URL;
use messhall_inventory::QuantityPolicy;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
    /// Load the default catalog into an empty store at startup.
    pub seed_defaults: bool,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            bind_addr: try_load(&lookup, "MESSHALL_BIND_ADDR", DEFAULT_BIND_ADDR)?,
            store: StoreConfig {
                database_url: try_load(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL)?,
                max_connections: try_load(&lookup, "MESSHALL_DB_MAX_CONNECTIONS", "5")?,
                quantity_policy: try_load(&lookup, "MESSHALL_QUANTITY_POLICY", "unchecked")?,
            },
            seed_defaults: try_load(&lookup, "MESSHALL_SEED_DEFAULTS", "true")?,
        })
    }

    /// Ephemeral in-memory setup used by tests and local experiments.
    pub fn in_memory() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            store: StoreConfig::in_memory(),
            seed_defaults: true,
        }
    }

    pub fn with_policy(mut self, policy: QuantityPolicy) -> Self {
        self.store.quantity_policy = policy;
        self
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = match lookup(key) {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    };

    raw.trim()
        .parse()
        .map_err(|e| anyhow!("invalid {key} value '{raw}': {e}"))
}
