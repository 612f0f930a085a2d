use crate::storage::{Admin, NewAdmin};
use crate::transport::http::error::{ApiError, ApiResult};
use crate::transport::http::handlers::common::{json_error, path_error, to_json};
use crate::transport::http::middleware::BearerToken;
use crate::transport::http::types::{AddAdminRequest, ApiResponse, AppState};
use anyhow::Context;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/admins",
    responses(
        (status = 200, description = "All administrators in insertion order", body = [Admin]),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_admins_handler(State(state): State<AppState>) -> ApiResult<Json<ApiResponse>> {
    let admins = state.admins.list().await.context("Failed to list administrators")?;
    Ok(Json(ApiResponse::ok(serde_json::json!({
        "total": admins.len(),
        "admins": to_json(&admins)?,
    }))))
}

#[utoipa::path(
    post,
    path = "/api/admins",
    request_body = AddAdminRequest,
    responses(
        (status = 200, description = "Administrator added", body = Admin),
        (status = 400, description = "Missing user_id", body = ApiResponse),
        (status = 401, description = "Missing bearer token", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn add_admin_handler(
    State(state): State<AppState>,
    _token: BearerToken,
    request: Result<Json<AddAdminRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let Json(request) = request.map_err(|e| json_error(e, "{\"user_id\": <number>, ...}"))?;
    let user_id = request.user_id.ok_or(ApiError::MissingParameter("user_id"))?;

    let admin = state
        .admins
        .add(NewAdmin {
            user_id,
            username: request.username.filter(|u| !u.trim().is_empty()),
            role: request.role.unwrap_or_default(),
            permissions: request.permissions,
        })
        .await
        .context("Failed to add administrator")?;

    tracing::info!(id = admin.id, user_id = admin.user_id, "administrator added");
    Ok(Json(ApiResponse::ok_with_message(
        to_json(&admin)?,
        "Administrator added",
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admins/{id}",
    params(("id" = u64, Path, description = "Administrator id assigned on creation")),
    responses(
        (status = 200, description = "Administrator removed", body = Admin),
        (status = 401, description = "Missing bearer token", body = ApiResponse),
        (status = 404, description = "No administrator with that id", body = ApiResponse)
    )
)]
pub async fn delete_admin_handler(
    State(state): State<AppState>,
    _token: BearerToken,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let Path(id) = id.map_err(path_error)?;

    let removed = state
        .admins
        .remove(id)
        .await
        .context("Failed to remove administrator")?
        .ok_or_else(|| ApiError::NotFound(format!("Administrator {} not found", id)))?;

    tracing::info!(id = removed.id, "administrator removed");
    Ok(Json(ApiResponse::ok_with_message(
        to_json(&removed)?,
        "Administrator removed",
    )))
}
