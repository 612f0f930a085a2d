use crate::transport::http::error::{ApiError, ApiResult};
use anyhow::Context;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Unwraps a query/body parameter, treating blank strings as absent.
pub fn require_param(value: Option<String>, name: &'static str) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ApiError::MissingParameter(name)),
    }
}

pub fn query_error(err: QueryRejection) -> ApiError {
    ApiError::InvalidFormat(format!("Invalid query string: {}", err.body_text()))
}

pub fn path_error(err: PathRejection) -> ApiError {
    ApiError::InvalidFormat(format!("Invalid path parameter: {}", err.body_text()))
}

pub fn json_error(err: JsonRejection, expected: &str) -> ApiError {
    ApiError::InvalidBody(format!(
        "Invalid JSON body: {} (expected: {})",
        err.body_text(),
        expected
    ))
}

pub fn to_json<T: Serialize>(value: &T) -> ApiResult<JsonValue> {
    Ok(serde_json::to_value(value).context("Failed to serialize response")?)
}
