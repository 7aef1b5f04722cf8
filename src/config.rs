use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
    pub redis_port: u16,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source. `from_env` is the
    /// production entry point; tests pass a map so they never touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redis_host = lookup("REDIS_HOST")
            .unwrap_or_else(|| "localhost".to_string());

        let redis_port = lookup("REDIS_PORT")
            .unwrap_or_else(|| "6379".to_string())
            .parse::<u16>()
            .context("REDIS_PORT must be a valid port number (0-65535)")?;

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            redis_host,
            redis_port,
            service_port,
            service_host,
        })
    }

    /// `host:port` the HTTP server binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis host: {}", self.redis_host);
        tracing::info!("  Redis port: {}", self.redis_port);
        tracing::info!("  Service listening on: {}", self.listen_addr());
    }
}
