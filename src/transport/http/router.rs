use crate::domain::address::Chain;
use crate::domain::config::{
    AccountChangeHistoryConfig, AutoBanConfig, AutoDeleteConfig, ChannelSettingsConfig,
    ConfigLogsPage, GroupMembersPage, ModerationAction, PermissionsConfig, PornDetectionConfig,
    Sensitivity,
};
use crate::domain::ledger::{Direction, LedgerPage, LedgerTransaction};
use crate::domain::rates::{ExchangeQuote, RateSnapshot};
use crate::domain::stats::{ChatStats, DailyActivity, MemberActivity, TopMembersPage};
use crate::storage::{Admin, AdminRole};
use crate::transport::http::error::{method_not_allowed, panic_response};
use crate::transport::http::handlers::{admins, config, crypto, health, settings, stats};
use crate::transport::http::middleware::{cors_layer, options_short_circuit};
use crate::transport::http::types::{AddAdminRequest, ApiResponse, AppState, PutSettingRequest};
use axum::routing::{any, delete, get};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        crypto::crypto_query_handler,
        crypto::exchange_rates_handler,
        config::config_handler,
        admins::list_admins_handler,
        admins::add_admin_handler,
        admins::delete_admin_handler,
        settings::get_group_settings_handler,
        settings::put_group_settings_handler,
        settings::get_setting_handler,
        settings::put_setting_handler,
        settings::delete_setting_handler,
        stats::chat_stats_handler
    ),
    components(schemas(
        ApiResponse,
        Chain,
        Direction,
        LedgerTransaction,
        LedgerPage,
        ExchangeQuote,
        RateSnapshot,
        ConfigLogsPage,
        AutoDeleteConfig,
        AutoBanConfig,
        PermissionsConfig,
        Sensitivity,
        ModerationAction,
        PornDetectionConfig,
        ChannelSettingsConfig,
        GroupMembersPage,
        AccountChangeHistoryConfig,
        Admin,
        AdminRole,
        AddAdminRequest,
        PutSettingRequest,
        DailyActivity,
        MemberActivity,
        TopMembersPage,
        ChatStats
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

/// Builds the API router with CORS, OPTIONS short-circuit, tracing and panic recovery applied.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health::healthcheck_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/crypto-query",
            get(crypto::crypto_query_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/exchange-rates",
            get(crypto::exchange_rates_handler).fallback(method_not_allowed),
        )
        // The wildcard needs a non-empty tail, so the bare prefixes are routed explicitly.
        .route("/api/config", any(config::config_handler))
        .route("/api/config/", any(config::config_handler))
        .route("/api/config/*config_path", any(config::config_handler))
        .route(
            "/api/admins",
            get(admins::list_admins_handler)
                .post(admins::add_admin_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/admins/:id",
            delete(admins::delete_admin_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/settings/:group_id",
            get(settings::get_group_settings_handler)
                .put(settings::put_group_settings_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/settings/:group_id/:key",
            get(settings::get_setting_handler)
                .put(settings::put_setting_handler)
                .delete(settings::delete_setting_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/chat-stats",
            get(stats::chat_stats_handler).fallback(method_not_allowed),
        )
        .with_state(app_state)
        .layer(axum::middleware::from_fn(options_short_circuit))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
