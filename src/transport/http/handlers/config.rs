//! Config panel reads and acknowledgement-only writes.

use crate::domain::config::{empty_object, resolve_config_path, ConfigKind, ConfigLogsPage, ConfigRoute};
use crate::transport::http::error::{ApiError, ApiResult};
use crate::transport::http::handlers::common::{query_error, to_json};
use crate::transport::http::types::{ApiResponse, AppState, ConfigReadParams};
use anyhow::Context;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{OriginalUri, Query, State};
use axum::http::Method;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    get,
    path = "/api/config/{config_type}",
    params(
        ("config_type" = String, Path, description = "Panel name (e.g. auto-delete); any path containing /logs returns the log page"),
        ConfigReadParams
    ),
    responses(
        (status = 200, description = "Panel defaults, stored porn-detection settings, or {} for unknown panels", body = ApiResponse),
        (status = 405, description = "Method not allowed", body = ApiResponse),
        (status = 500, description = "Settings store failure", body = ApiResponse)
    )
)]
pub async fn config_handler(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<ConfigReadParams>, QueryRejection>,
    body: Bytes,
) -> ApiResult<Json<ApiResponse>> {
    let raw_path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    match method {
        Method::GET => {
            let Query(params) = query.map_err(query_error)?;
            let route = resolve_config_path(raw_path);
            let data = read_config(&state, &route, params.group_id.as_deref()).await?;
            Ok(Json(ApiResponse::ok(data)))
        }
        Method::POST | Method::PUT => {
            // Accepted as-is: nothing is validated or persisted.
            let submitted: JsonValue = serde_json::from_slice(&body).unwrap_or_else(|_| empty_object());
            tracing::info!(path = %uri.path(), method = %method, "config update acknowledged");
            Ok(Json(ApiResponse::ok_with_message(
                submitted,
                "Configuration updated",
            )))
        }
        _ => Err(ApiError::MethodNotAllowed),
    }
}

async fn read_config(
    state: &AppState,
    route: &ConfigRoute,
    group_id: Option<&str>,
) -> ApiResult<JsonValue> {
    match route {
        ConfigRoute::Logs => to_json(&ConfigLogsPage::default()),
        ConfigRoute::Unknown(name) => {
            tracing::debug!(config_type = %name, "unknown config type, returning empty object");
            Ok(empty_object())
        }
        ConfigRoute::Known(ConfigKind::PornDetection) => match group_id.filter(|g| !g.is_empty()) {
            Some(group_id) => {
                let kind = ConfigKind::PornDetection;
                let stored = state
                    .settings
                    .get(group_id, kind.slug())
                    .await
                    .context("Failed to load porn-detection config")?;
                Ok(stored.unwrap_or_else(|| kind.default_payload()))
            }
            None => Ok(ConfigKind::PornDetection.default_payload()),
        },
        ConfigRoute::Known(kind) => Ok(kind.default_payload()),
    }
}
