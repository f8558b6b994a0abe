use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Static 400 message for the save-string body contract.
pub const INVALID_BODY_MESSAGE: &str = "request body should be a < 30 character string";

/// Custom error type for API endpoints
///
/// Maps each failure class to an HTTP status and a terse plain-text body.
/// Nothing beyond the offending key is ever exposed to the client; the
/// underlying store error is logged at the handler, not echoed here.
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not a string of at most 30 characters
    InvalidBody,
    /// Store SET failed for the given key
    SaveFailed { key: String },
    /// Store GET failed for the given key
    LookupFailed { key: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                INVALID_BODY_MESSAGE.to_string(),
            ),
            ApiError::SaveFailed { key } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error saving {}", key),
            ),
            ApiError::LookupFailed { key } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error getting {}", key),
            ),
        };

        (status, body).into_response()
    }
}
