pub mod has_string;
pub mod health;
pub mod save_string;

pub use has_string::has_string_handler;
pub use health::healthcheck_handler;
pub use save_string::save_string_handler;

use crate::routes;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Build the service router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTHCHECK, get(healthcheck_handler))
        .route(routes::SAVE_STRING, post(save_string_handler))
        .route(routes::HAS_STRING, get(has_string_handler))
        .with_state(state)
}
