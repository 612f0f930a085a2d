//! Default payloads for each config panel.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AutoDeleteConfig {
    pub enabled: bool,
    pub delete_after_seconds: u32,
    pub delete_join_messages: bool,
    pub delete_leave_messages: bool,
    pub delete_service_messages: bool,
    pub delete_bot_commands: bool,
    pub keywords: Vec<String>,
}

impl Default for AutoDeleteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delete_after_seconds: 300,
            delete_join_messages: true,
            delete_leave_messages: true,
            delete_service_messages: false,
            delete_bot_commands: false,
            keywords: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AutoBanConfig {
    pub enabled: bool,
    pub max_warnings: u32,
    /// 0 means permanent.
    pub ban_duration_hours: u32,
    pub ban_on_spam_links: bool,
    pub ban_on_forwarded_ads: bool,
    pub ban_new_accounts: bool,
    pub whitelist: Vec<i64>,
}

impl Default for AutoBanConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_warnings: 3,
            ban_duration_hours: 24,
            ban_on_spam_links: true,
            ban_on_forwarded_ads: false,
            ban_new_accounts: false,
            whitelist: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PermissionsConfig {
    pub can_send_messages: bool,
    pub can_send_media: bool,
    pub can_send_polls: bool,
    pub can_add_web_page_previews: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
    pub can_change_info: bool,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            can_send_messages: true,
            can_send_media: true,
            can_send_polls: false,
            can_add_web_page_previews: true,
            can_invite_users: true,
            can_pin_messages: false,
            can_change_info: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Delete,
    Warn,
    Mute,
    Ban,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PornDetectionConfig {
    pub enabled: bool,
    pub sensitivity: Sensitivity,
    pub action: ModerationAction,
    pub notify_admins: bool,
    pub scan_images: bool,
    pub scan_videos: bool,
    pub scan_stickers: bool,
}

impl Default for PornDetectionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            sensitivity: Sensitivity::Medium,
            action: ModerationAction::Delete,
            notify_admins: true,
            scan_images: true,
            scan_videos: false,
            scan_stickers: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ChannelSettingsConfig {
    pub linked_channel: Option<String>,
    pub require_subscription: bool,
    pub forward_channel_posts: bool,
    pub auto_pin_channel_posts: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembersPage {
    #[schema(value_type = Vec<Object>)]
    pub members: Vec<JsonValue>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl Default for GroupMembersPage {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            total: 0,
            page: 1,
            page_size: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountChangeHistoryConfig {
    #[schema(value_type = Vec<Object>)]
    pub records: Vec<JsonValue>,
    pub total: u64,
    pub track_username_changes: bool,
    pub track_name_changes: bool,
    pub notify_on_change: bool,
}

impl Default for AccountChangeHistoryConfig {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            track_username_changes: true,
            track_name_changes: true,
            notify_on_change: false,
        }
    }
}
