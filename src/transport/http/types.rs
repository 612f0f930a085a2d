use crate::domain::{LedgerProvider, RateProvider, StatsProvider, SyntheticLedger, SyntheticRates, SyntheticStats};
use crate::storage::{AdminRole, AdminStore, InMemoryAdminStore, InMemorySettingsStore, SettingsStore};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn LedgerProvider>,
    pub rates: Arc<dyn RateProvider>,
    pub stats: Arc<dyn StatsProvider>,
    pub admins: Arc<dyn AdminStore>,
    pub settings: Arc<dyn SettingsStore>,
}

impl AppState {
    /// Synthetic providers with the given settings store and a sample-seeded admin list.
    pub fn synthetic(settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            ledger: Arc::new(SyntheticLedger),
            rates: Arc::new(SyntheticRates),
            stats: Arc::new(SyntheticStats),
            admins: Arc::new(InMemoryAdminStore::with_sample_data()),
            settings,
        }
    }

    /// Fully in-memory state; each call is isolated from every other.
    pub fn in_memory() -> Self {
        Self::synthetic(Arc::new(InMemorySettingsStore::new()))
    }
}

/// Common response envelope.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn ok_with_message(data: JsonValue, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CryptoQueryParams {
    /// Wallet address to look up.
    pub address: Option<String>,
    /// One of ERC20, TRC20, BEP20, BEP2, SOL, BTC.
    pub chain: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChatStatsParams {
    pub group_id: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConfigReadParams {
    /// When set, porn-detection reads the stored value for this group.
    pub group_id: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AddAdminRequest {
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<AdminRole>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct PutSettingRequest {
    #[schema(value_type = Object)]
    pub value: Option<JsonValue>,
}
