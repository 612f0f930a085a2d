//! Per-group settings, keyed by `(group_id, key)` with JSON values.

use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};

pub mod memory;
pub mod postgres;

pub use memory::InMemorySettingsStore;
pub use postgres::PostgresSettingsStore;

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Cheap reachability check used by `/health`.
    async fn ping(&self) -> anyhow::Result<()>;

    async fn get_all(&self, group_id: &str) -> anyhow::Result<Map<String, JsonValue>>;

    async fn get(&self, group_id: &str, key: &str) -> anyhow::Result<Option<JsonValue>>;

    async fn put(&self, group_id: &str, key: &str, value: JsonValue) -> anyhow::Result<()>;

    /// Returns whether a value was removed.
    async fn delete(&self, group_id: &str, key: &str) -> anyhow::Result<bool>;

    /// Upserts every entry; stores may override to do it atomically.
    async fn put_many(&self, group_id: &str, values: Map<String, JsonValue>) -> anyhow::Result<()> {
        for (key, value) in values {
            self.put(group_id, &key, value).await?;
        }
        Ok(())
    }
}
