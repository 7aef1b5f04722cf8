use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, RedisError};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::store::KvStore;

/// Cached connection plus a counter bumped each time a new one is stored
#[derive(Default)]
struct Slot {
    generation: u64,
    conn: Option<MultiplexedConnection>,
}

/// Shareable Redis client for use across async handlers
///
/// Holds at most one multiplexed connection, shared by every request. The
/// first connection is opened in the background at startup; if that fails
/// (or a live connection later drops), the next request makes a single new
/// attempt and reports the error itself if the attempt fails. The slot lock
/// is never held while connecting, so a hung attempt only stalls the request
/// that made it.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
    slot: Arc<Mutex<Slot>>,
    address: String,
}

impl RedisStore {
    /// Create a new Redis client from configuration and start connecting.
    ///
    /// Returns without waiting for the connection. Its outcome is logged: the
    /// service keeps running and store calls fail per request until Redis is
    /// reachable. Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns an error only if the connection parameters are rejected by the
    /// client library.
    pub fn connect(config: &Config) -> Result<Self> {
        let address = format!("{}:{}", config.redis_host, config.redis_port);

        let client = redis::Client::open((config.redis_host.clone(), config.redis_port))
            .with_context(|| format!("Invalid Redis address: {}", address))?;

        let store = Self {
            client,
            slot: Arc::new(Mutex::new(Slot::default())),
            address,
        };

        tracing::info!("Connecting to Redis at: {}", store.address);
        let background = store.clone();
        tokio::spawn(async move {
            match background.connection().await {
                Ok(_) => tracing::info!("Connected to Redis"),
                Err(e) => tracing::error!("Failed to connect to Redis: {}", e),
            }
        });

        Ok(store)
    }

    /// Return the shared connection and its generation, opening one first if
    /// there is none.
    async fn connection(&self) -> Result<(u64, MultiplexedConnection), RedisError> {
        {
            let slot = self.slot.lock().await;
            if let Some(conn) = &slot.conn {
                return Ok((slot.generation, conn.clone()));
            }
        }

        let conn = self.client.get_multiplexed_async_connection().await?;

        let mut slot = self.slot.lock().await;
        // A concurrent attempt may have finished first; keep its connection.
        if let Some(existing) = &slot.conn {
            return Ok((slot.generation, existing.clone()));
        }
        slot.generation += 1;
        slot.conn = Some(conn.clone());
        tracing::debug!(address = %self.address, generation = slot.generation, "Opened Redis connection");
        Ok((slot.generation, conn))
    }

    /// Drop the cached connection if `err` means it is no longer usable.
    /// A connection stored after `generation` is left alone.
    async fn discard_if_broken(&self, generation: u64, err: &RedisError) {
        if !(err.is_io_error() || err.is_connection_dropped() || err.is_connection_refusal()) {
            return;
        }

        let mut slot = self.slot.lock().await;
        if slot.generation == generation && slot.conn.is_some() {
            tracing::warn!("Redis connection lost: {}", err);
            slot.conn = None;
        }
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let (generation, mut conn) = self.connection().await?;

        let result: Result<(), RedisError> = conn.set(key, value).await;
        if let Err(err) = &result {
            self.discard_if_broken(generation, err).await;
        }
        result?;

        tracing::debug!(key, "SET");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let (generation, mut conn) = self.connection().await?;

        let result: Result<Option<String>, RedisError> = conn.get(key).await;
        if let Err(err) = &result {
            self.discard_if_broken(generation, err).await;
        }
        let value = result?;

        tracing::debug!(key, hit = value.is_some(), "GET");
        Ok(value)
    }

    async fn ping(&self) -> Result<()> {
        let (generation, mut conn) = self.connection().await?;

        let result: Result<String, RedisError> = redis::cmd("PING").query_async(&mut conn).await;
        if let Err(err) = &result {
            self.discard_if_broken(generation, err).await;
        }
        result?;

        Ok(())
    }
}
