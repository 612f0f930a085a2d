//! Settings CRUD, passed straight through to the configured store.

use crate::transport::http::error::{ApiError, ApiResult};
use crate::transport::http::handlers::common::{json_error, path_error};
use crate::transport::http::middleware::BearerToken;
use crate::transport::http::types::{ApiResponse, AppState, PutSettingRequest};
use anyhow::Context;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value as JsonValue};

#[utoipa::path(
    get,
    path = "/api/settings/{group_id}",
    params(("group_id" = String, Path, description = "Telegram chat id")),
    responses(
        (status = 200, description = "Every stored key for the group", body = ApiResponse),
        (status = 401, description = "Missing bearer token", body = ApiResponse),
        (status = 500, description = "Settings store failure", body = ApiResponse)
    )
)]
pub async fn get_group_settings_handler(
    State(state): State<AppState>,
    _token: BearerToken,
    group_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let Path(group_id) = group_id.map_err(path_error)?;
    let all = state
        .settings
        .get_all(&group_id)
        .await
        .context("Failed to load settings")?;
    Ok(Json(ApiResponse::ok(JsonValue::Object(all))))
}

#[utoipa::path(
    put,
    path = "/api/settings/{group_id}",
    params(("group_id" = String, Path, description = "Telegram chat id")),
    request_body = Object,
    responses(
        (status = 200, description = "Settings after merging the submitted key/value object", body = ApiResponse),
        (status = 401, description = "Missing bearer token", body = ApiResponse),
        (status = 422, description = "Body is not a JSON object", body = ApiResponse),
        (status = 500, description = "Settings store failure", body = ApiResponse)
    )
)]
pub async fn put_group_settings_handler(
    State(state): State<AppState>,
    _token: BearerToken,
    group_id: Result<Path<String>, PathRejection>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let Path(group_id) = group_id.map_err(path_error)?;
    let Json(body) = body.map_err(|e| json_error(e, "{\"<key>\": <value>, ...}"))?;
    let JsonValue::Object(values) = body else {
        return Err(ApiError::InvalidBody(
            "Invalid JSON body: expected an object of settings".to_string(),
        ));
    };

    let count = values.len();
    state
        .settings
        .put_many(&group_id, values)
        .await
        .context("Failed to save settings")?;
    let all = state
        .settings
        .get_all(&group_id)
        .await
        .context("Failed to load settings")?;

    tracing::info!(group_id = %group_id, keys = count, "settings updated");
    Ok(Json(ApiResponse::ok_with_message(
        JsonValue::Object(all),
        "Settings updated",
    )))
}

#[utoipa::path(
    get,
    path = "/api/settings/{group_id}/{key}",
    params(
        ("group_id" = String, Path, description = "Telegram chat id"),
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "`{key, value}`; value is null when unset", body = ApiResponse),
        (status = 401, description = "Missing bearer token", body = ApiResponse),
        (status = 500, description = "Settings store failure", body = ApiResponse)
    )
)]
pub async fn get_setting_handler(
    State(state): State<AppState>,
    _token: BearerToken,
    path: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let Path((group_id, key)) = path.map_err(path_error)?;
    let value = state
        .settings
        .get(&group_id, &key)
        .await
        .context("Failed to load setting")?;
    Ok(Json(ApiResponse::ok(json!({ "key": key, "value": value }))))
}

#[utoipa::path(
    put,
    path = "/api/settings/{group_id}/{key}",
    params(
        ("group_id" = String, Path, description = "Telegram chat id"),
        ("key" = String, Path, description = "Setting key")
    ),
    request_body = PutSettingRequest,
    responses(
        (status = 200, description = "Stored value", body = ApiResponse),
        (status = 400, description = "Missing value", body = ApiResponse),
        (status = 401, description = "Missing bearer token", body = ApiResponse),
        (status = 500, description = "Settings store failure", body = ApiResponse)
    )
)]
pub async fn put_setting_handler(
    State(state): State<AppState>,
    _token: BearerToken,
    path: Result<Path<(String, String)>, PathRejection>,
    body: Result<Json<PutSettingRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let Path((group_id, key)) = path.map_err(path_error)?;
    let Json(body) = body.map_err(|e| json_error(e, "{\"value\": <any>}"))?;
    let value = body.value.ok_or(ApiError::MissingParameter("value"))?;

    state
        .settings
        .put(&group_id, &key, value.clone())
        .await
        .context("Failed to save setting")?;

    tracing::info!(group_id = %group_id, key = %key, "setting saved");
    Ok(Json(ApiResponse::ok_with_message(
        json!({ "key": key, "value": value }),
        "Setting saved",
    )))
}

#[utoipa::path(
    delete,
    path = "/api/settings/{group_id}/{key}",
    params(
        ("group_id" = String, Path, description = "Telegram chat id"),
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "`{deleted}` tells whether a value existed", body = ApiResponse),
        (status = 401, description = "Missing bearer token", body = ApiResponse),
        (status = 500, description = "Settings store failure", body = ApiResponse)
    )
)]
pub async fn delete_setting_handler(
    State(state): State<AppState>,
    _token: BearerToken,
    path: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let Path((group_id, key)) = path.map_err(path_error)?;
    let deleted = state
        .settings
        .delete(&group_id, &key)
        .await
        .context("Failed to delete setting")?;
    Ok(Json(ApiResponse::ok(json!({ "key": key, "deleted": deleted }))))
}
