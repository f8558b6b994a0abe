use crate::routes;
use axum::http::StatusCode;

/// GET /healthcheck handler - Liveness probe
///
/// Always answers 200 `ok` without touching the store, so orchestration
/// probes keep passing even while redis is unreachable.
#[utoipa::path(
    get,
    path = routes::HEALTHCHECK,
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn healthcheck_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
