use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::config::Config;

/// The constant written against every remembered key. Only the presence
/// of the key is ever consulted; the value itself is never interpreted.
pub const FLAG_VALUE: &str = "1";

/// Key/value store abstraction used by the request handlers.
///
/// The store is treated purely as a presence-flag ledger: one SET to mark
/// a key, one GET to check it. Injecting the store through this trait keeps
/// the handlers testable against an in-memory fake.
#[async_trait]
pub trait KeyValue: Send + Sync + 'static {
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

/// Redis-backed store client, shared by every request.
///
/// `ConnectionManager` multiplexes a single connection and reconnects on
/// failure; it is cheap to clone, which is how concurrent handlers each
/// get a usable handle.
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Connect to redis using the configured host, port, and credential.
    ///
    /// The connection is confirmed with a PING before this returns, so the
    /// caller can refuse to start serving until the store is reachable.
    pub async fn connect(config: &Config) -> Result<Self> {
        let url = config.redis_url();

        let client = redis::Client::open(url.as_str())
            .context("Invalid redis connection URL")?;

        let mut manager = client
            .get_connection_manager()
            .await
            .with_context(|| {
                format!("Failed to connect to redis at {}:{}", config.redis_host, config.redis_port)
            })?;

        let pong: String = redis::cmd("PING")
            .query_async(&mut manager)
            .await
            .context("Redis did not respond to PING")?;
        if pong != "PONG" {
            bail!("Unexpected PING reply from redis: {}", pong);
        }

        tracing::info!(
            "Connected to redis at {}:{}",
            config.redis_host,
            config.redis_port
        );

        Ok(Self { manager })
    }
}

#[async_trait]
impl KeyValue for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.manager.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .with_context(|| format!("Redis SET failed for key {}", key))?;

        tracing::debug!("Set flag for key: {}", key);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn
            .get(key)
            .await
            .with_context(|| format!("Redis GET failed for key {}", key))?;

        tracing::debug!("Got key {}: present={}", key, value.is_some());
        Ok(value)
    }
}
