//! Administrator records for the console.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Owner,
    #[default]
    Admin,
    Moderator,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Admin {
    pub id: u64,
    pub user_id: i64,
    pub username: Option<String>,
    pub role: AdminRole,
    pub permissions: Vec<String>,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub user_id: i64,
    pub username: Option<String>,
    pub role: AdminRole,
    pub permissions: Vec<String>,
}

#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<Admin>>;
    /// Assigns the next id and appends the record.
    async fn add(&self, admin: NewAdmin) -> anyhow::Result<Admin>;
    /// Returns the removed record, or `None` when no record has that id.
    async fn remove(&self, id: u64) -> anyhow::Result<Option<Admin>>;
}

struct Inner {
    next_id: u64,
    admins: Vec<Admin>,
}

/// Process-lifetime store; contents are lost on restart.
pub struct InMemoryAdminStore {
    inner: RwLock<Inner>,
}

impl InMemoryAdminStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                admins: Vec::new(),
            }),
        }
    }

    /// Store pre-filled with the sample owner and moderator shown on a fresh console.
    pub fn with_sample_data() -> Self {
        let now = Utc::now();
        let admins = vec![
            Admin {
                id: 1,
                user_id: 123_456_789,
                username: Some("group_owner".to_string()),
                role: AdminRole::Owner,
                permissions: vec!["all".to_string()],
                added_at: now,
            },
            Admin {
                id: 2,
                user_id: 987_654_321,
                username: Some("helper_mod".to_string()),
                role: AdminRole::Moderator,
                permissions: vec!["delete_messages".to_string(), "ban_users".to_string()],
                added_at: now,
            },
        ];
        Self {
            inner: RwLock::new(Inner { next_id: 3, admins }),
        }
    }
}

impl Default for InMemoryAdminStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminStore for InMemoryAdminStore {
    async fn list(&self) -> anyhow::Result<Vec<Admin>> {
        Ok(self.inner.read().await.admins.clone())
    }

    async fn add(&self, admin: NewAdmin) -> anyhow::Result<Admin> {
        let mut inner = self.inner.write().await;
        let record = Admin {
            id: inner.next_id,
            user_id: admin.user_id,
            username: admin.username,
            role: admin.role,
            permissions: admin.permissions,
            added_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.admins.push(record.clone());
        Ok(record)
    }

    async fn remove(&self, id: u64) -> anyhow::Result<Option<Admin>> {
        let mut inner = self.inner.write().await;
        let pos = inner.admins.iter().position(|a| a.id == id);
        Ok(pos.map(|i| inner.admins.remove(i)))
    }
}
