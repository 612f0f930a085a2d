use crate::domain::address::{validate_address, AddressCheck, Chain, UnsupportedChain};
use crate::domain::ledger::{LedgerPage, LedgerQuery};
use crate::domain::pagination::PageRequest;
use crate::domain::rates::RateSnapshot;
use crate::transport::http::error::{ApiError, ApiResult};
use crate::transport::http::handlers::common::{query_error, require_param, to_json};
use crate::transport::http::types::{ApiResponse, AppState, CryptoQueryParams};
use anyhow::Context;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/crypto-query",
    params(CryptoQueryParams),
    responses(
        (status = 200, description = "Balance and one page of transactions", body = LedgerPage),
        (status = 400, description = "Missing parameter, unsupported chain or malformed address", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn crypto_query_handler(
    State(state): State<AppState>,
    query: Result<Query<CryptoQueryParams>, QueryRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let Query(params) = query.map_err(query_error)?;

    let address = require_param(params.address, "address")?;
    let chain: Chain = require_param(params.chain, "chain")?
        .parse()
        .map_err(|e: UnsupportedChain| ApiError::InvalidFormat(e.to_string()))?;

    if validate_address(chain, &address) == AddressCheck::InvalidFormat {
        return Err(ApiError::InvalidFormat(format!(
            "Invalid {} address format",
            chain
        )));
    }

    let query = LedgerQuery {
        address,
        chain,
        page: PageRequest::new(params.page, params.page_size),
    };
    let page = state
        .ledger
        .lookup(&query)
        .await
        .context("Ledger lookup failed")?;

    tracing::debug!(
        chain = %chain,
        page = page.page,
        returned = page.transactions.len(),
        "crypto query served"
    );
    Ok(Json(ApiResponse::ok(to_json(&page)?)))
}

#[utoipa::path(
    get,
    path = "/api/exchange-rates",
    responses(
        (status = 200, description = "USDT/CNY quotes sorted by buy price", body = RateSnapshot),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn exchange_rates_handler(State(state): State<AppState>) -> ApiResult<Json<ApiResponse>> {
    let snapshot = state
        .rates
        .snapshot()
        .await
        .context("Rate lookup failed")?;
    Ok(Json(ApiResponse::ok(to_json(&snapshot)?)))
}
