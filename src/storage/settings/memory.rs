use super::SettingsStore;
use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

/// Settings kept in process memory. Used when no `DATABASE_URL` is configured and in tests.
#[derive(Default)]
pub struct InMemorySettingsStore {
    groups: RwLock<HashMap<String, BTreeMap<String, JsonValue>>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn get_all(&self, group_id: &str) -> anyhow::Result<Map<String, JsonValue>> {
        let groups = self.groups.read().await;
        Ok(groups
            .get(group_id)
            .map(|g| g.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default())
    }

    async fn get(&self, group_id: &str, key: &str) -> anyhow::Result<Option<JsonValue>> {
        let groups = self.groups.read().await;
        Ok(groups.get(group_id).and_then(|g| g.get(key)).cloned())
    }

    async fn put(&self, group_id: &str, key: &str, value: JsonValue) -> anyhow::Result<()> {
        let mut groups = self.groups.write().await;
        groups
            .entry(group_id.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, group_id: &str, key: &str) -> anyhow::Result<bool> {
        let mut groups = self.groups.write().await;
        Ok(groups
            .get_mut(group_id)
            .map(|g| g.remove(key).is_some())
            .unwrap_or(false))
    }

    async fn put_many(&self, group_id: &str, values: Map<String, JsonValue>) -> anyhow::Result<()> {
        let mut groups = self.groups.write().await;
        groups.entry(group_id.to_string()).or_default().extend(values);
        Ok(())
    }
}
