//! Group configuration panels served by the config router.
//!
//! Each panel is a closed [`ConfigKind`] variant with a typed default payload; the HTTP
//! layer resolves request paths into a [`ConfigRoute`] before dispatching.

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::str::FromStr;
use utoipa::ToSchema;

pub mod defaults;
pub mod route;

pub use defaults::*;
pub use route::{resolve_config_path, ConfigRoute};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKind {
    AutoDelete,
    AutoBan,
    Permissions,
    PornDetection,
    ChannelSettings,
    GroupMembers,
    AccountChangeHistory,
}

impl ConfigKind {
    pub const ALL: [ConfigKind; 7] = [
        ConfigKind::AutoDelete,
        ConfigKind::AutoBan,
        ConfigKind::Permissions,
        ConfigKind::PornDetection,
        ConfigKind::ChannelSettings,
        ConfigKind::GroupMembers,
        ConfigKind::AccountChangeHistory,
    ];

    /// Path segment (and settings key) of the panel.
    pub fn slug(&self) -> &'static str {
        match self {
            ConfigKind::AutoDelete => "auto-delete",
            ConfigKind::AutoBan => "auto-ban",
            ConfigKind::Permissions => "permissions",
            ConfigKind::PornDetection => "porn-detection",
            ConfigKind::ChannelSettings => "channel-settings",
            ConfigKind::GroupMembers => "group-members",
            ConfigKind::AccountChangeHistory => "account-change-history",
        }
    }

    pub fn default_payload(&self) -> JsonValue {
        let value = match self {
            ConfigKind::AutoDelete => serde_json::to_value(AutoDeleteConfig::default()),
            ConfigKind::AutoBan => serde_json::to_value(AutoBanConfig::default()),
            ConfigKind::Permissions => serde_json::to_value(PermissionsConfig::default()),
            ConfigKind::PornDetection => serde_json::to_value(PornDetectionConfig::default()),
            ConfigKind::ChannelSettings => serde_json::to_value(ChannelSettingsConfig::default()),
            ConfigKind::GroupMembers => serde_json::to_value(GroupMembersPage::default()),
            ConfigKind::AccountChangeHistory => {
                serde_json::to_value(AccountChangeHistoryConfig::default())
            }
        };
        // Plain structs of strings, numbers and bools always serialize.
        value.unwrap_or_else(|_| empty_object())
    }
}

impl FromStr for ConfigKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKind::ALL
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or(())
    }
}

/// Shape returned for any `.../logs` config path.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLogsPage {
    #[schema(value_type = Vec<Object>)]
    pub logs: Vec<JsonValue>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl Default for ConfigLogsPage {
    fn default() -> Self {
        Self {
            logs: Vec::new(),
            total: 0,
            page: 1,
            page_size: 20,
        }
    }
}

pub fn empty_object() -> JsonValue {
    JsonValue::Object(serde_json::Map::new())
}
