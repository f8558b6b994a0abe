use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use crate::store::FLAG_VALUE;
use axum::{body::Bytes, extract::State, http::StatusCode};

/// Longest string the service will remember.
const MAX_KEY_CHARS: usize = 30;

/// POST /save-string handler - Remember a string
///
/// The body itself is the key; the stored value is the constant flag `"1"`.
/// Repeating the request is safe: same key, same value.
#[utoipa::path(
    post,
    path = routes::SAVE_STRING,
    request_body(content = String, content_type = "text/plain",
        description = "String to remember, at most 30 characters"),
    responses(
        (status = 202, description = "String remembered", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not a string of at most 30 characters", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "strings"
)]
pub async fn save_string_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), ApiError> {
    let key = std::str::from_utf8(&body).map_err(|_| ApiError::InvalidBody)?;
    if key.chars().count() > MAX_KEY_CHARS {
        return Err(ApiError::InvalidBody);
    }

    match state.store.set(key, FLAG_VALUE).await {
        Ok(()) => {
            tracing::info!("Remembered key: {}", key);
            Ok((StatusCode::ACCEPTED, "accepted"))
        }
        Err(e) => {
            tracing::error!("Error saving key {}: {:#}", key, e);
            Err(ApiError::SaveFailed { key: key.to_string() })
        }
    }
}
