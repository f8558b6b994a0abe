use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_host: String,
    pub listen_port: u16,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_auth_pass: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let listen_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let listen_port = env::var("PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let redis_host = env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let redis_port = env::var("REDIS_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse::<u16>()
            .context("REDIS_PORT must be a valid port number (0-65535)")?;

        let redis_auth_pass = env::var("REDIS_AUTH_PASS").ok();

        Ok(Config {
            listen_host,
            listen_port,
            redis_host,
            redis_port,
            redis_auth_pass,
        })
    }

    /// Connection URL for the redis client, folding in the auth
    /// credential when one is configured.
    pub fn redis_url(&self) -> String {
        match &self.redis_auth_pass {
            Some(pass) => format!("redis://:{}@{}:{}", pass, self.redis_host, self.redis_port),
            None => format!("redis://{}:{}", self.redis_host, self.redis_port),
        }
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis: {}:{}", self.redis_host, self.redis_port);
        tracing::info!("  Redis auth: {}",
            if self.redis_auth_pass.is_some() { "enabled" } else { "disabled" });
        tracing::info!("  Service listening on: {}:{}", self.listen_host, self.listen_port);
    }
}
