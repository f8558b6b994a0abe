use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

/// GET /has-string/{key} handler - Check whether a string was remembered
///
/// Presence-only semantics: any stored value counts as "yes", the value is
/// never inspected. This is the intended contract, keep it that way.
#[utoipa::path(
    get,
    path = routes::HAS_STRING,
    params(
        ("key" = String, Path, description = "String to look up, taken verbatim from the path")
    ),
    responses(
        (status = 200, description = "Answer: `yes` or `no`", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "strings"
)]
pub async fn has_string_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, &'static str), ApiError> {
    match state.store.get(&key).await {
        Ok(Some(_)) => Ok((StatusCode::OK, "yes")),
        Ok(None) => Ok((StatusCode::OK, "no")),
        Err(e) => {
            tracing::error!("Error getting key {}: {:#}", key, e);
            Err(ApiError::LookupFailed { key })
        }
    }
}
