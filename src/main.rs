mod api_doc;
mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod testutil;

use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use state::AppState;
use store::RedisStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("seen-strings starting");

    let config = Config::from_env()?;
    config.log_startup();

    // Connection is confirmed with a PING before the listener binds, so we
    // never accept requests while the store is unreachable at startup.
    let store = RedisStore::connect(&config).await?;

    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let addr = format!(
        "{}:{}",
        state.config.listen_host, state.config.listen_port
    );

    let app = handlers::router(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
