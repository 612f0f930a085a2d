use crate::domain::pagination::PageRequest;
use crate::domain::stats::ChatStats;
use crate::transport::http::error::ApiResult;
use crate::transport::http::handlers::common::{query_error, require_param, to_json};
use crate::transport::http::types::{ApiResponse, AppState, ChatStatsParams};
use anyhow::Context;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/chat-stats",
    params(ChatStatsParams),
    responses(
        (status = 200, description = "Dashboard aggregates with a page of top members", body = ChatStats),
        (status = 400, description = "Missing group_id", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn chat_stats_handler(
    State(state): State<AppState>,
    query: Result<Query<ChatStatsParams>, QueryRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let Query(params) = query.map_err(query_error)?;
    let group_id = require_param(params.group_id, "group_id")?;
    let page = PageRequest::new(params.page, params.page_size);

    let stats = state
        .stats
        .chat_stats(&group_id, page)
        .await
        .context("Failed to build chat statistics")?;
    Ok(Json(ApiResponse::ok(to_json(&stats)?)))
}
