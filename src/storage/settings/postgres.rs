//! Settings pass-through to the hosted PostgreSQL database.

use super::SettingsStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS group_settings (
    group_id TEXT NOT NULL,
    setting_key TEXT NOT NULL,
    value JSONB NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (group_id, setting_key)
)";

const UPSERT_SQL: &str = "INSERT INTO group_settings (group_id, setting_key, value, updated_at)
     VALUES ($1, $2, $3, NOW())
     ON CONFLICT (group_id, setting_key) DO UPDATE SET value = $3, updated_at = NOW()";

/// Settings store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresSettingsStore {
    pool: PgPool,
}

impl PostgresSettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds a lazily-connecting pool; no connection is attempted until first use.
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(database_url)
            .context("invalid DATABASE_URL")?;
        Ok(Self::new(pool))
    }

    /// Creates `group_settings` if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&self.pool)
            .await
            .context("failed to create group_settings table")?;
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for PostgresSettingsStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn get_all(&self, group_id: &str) -> Result<Map<String, JsonValue>> {
        let rows = sqlx::query(
            "SELECT setting_key, value FROM group_settings WHERE group_id = $1 ORDER BY setting_key",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Map::with_capacity(rows.len());
        for row in rows {
            let key: String = row.try_get("setting_key")?;
            let value: JsonValue = row.try_get("value")?;
            out.insert(key, value);
        }
        Ok(out)
    }

    async fn get(&self, group_id: &str, key: &str) -> Result<Option<JsonValue>> {
        let row = sqlx::query(
            "SELECT value FROM group_settings WHERE group_id = $1 AND setting_key = $2",
        )
        .bind(group_id)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => Ok(Some(r.try_get("value")?)),
            None => Ok(None),
        }
    }

    async fn put(&self, group_id: &str, key: &str, value: JsonValue) -> Result<()> {
        sqlx::query(UPSERT_SQL)
            .bind(group_id)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, group_id: &str, key: &str) -> Result<bool> {
        let res = sqlx::query("DELETE FROM group_settings WHERE group_id = $1 AND setting_key = $2")
            .bind(group_id)
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn put_many(&self, group_id: &str, values: Map<String, JsonValue>) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        for (key, value) in values {
            sqlx::query(UPSERT_SQL)
                .bind(group_id)
                .bind(&key)
                .bind(value)
                .execute(tx.as_mut())
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
