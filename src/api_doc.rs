use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "seen-strings API",
        version = "1.0.0",
        description = "Remembers strings in redis and answers whether a string has been seen"
    ),
    paths(
        handlers::health::healthcheck_handler,
        handlers::save_string::save_string_handler,
        handlers::has_string::has_string_handler
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "strings", description = "Remember and look up strings")
    )
)]
pub struct ApiDoc;
