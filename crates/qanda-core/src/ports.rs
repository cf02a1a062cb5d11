//! Port traits — the storage boundary.
//!
//! The trait is defined here in `qanda-core` (pure Rust). Implementations
//! live in `qanda-platform`. The core never imports platform code; it only
//! depends on this trait.

use async_trait::async_trait;
use qanda_types::Result;

/// Session-scoped key-value state, the board's persistence boundary.
///
/// Keys are plain strings (`qanda:config`, `qanda:board:{session}`), values
/// serialized JSON. Async so durable browser backends fit behind the same
/// interface; the in-memory backend resolves immediately.
#[async_trait(?Send)]
pub trait StatePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// List keys with a given prefix
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
