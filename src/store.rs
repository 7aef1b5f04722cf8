use anyhow::Result;
use async_trait::async_trait;

/// Key-value operations the HTTP handlers need from the backing store.
///
/// Errors carry the backend's own message; handlers echo it to the caller
/// unchanged, so implementations should not wrap it in extra context.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Read the value under `key`. `Ok(None)` means the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Round-trip to the store without touching any key.
    async fn ping(&self) -> Result<()>;
}
