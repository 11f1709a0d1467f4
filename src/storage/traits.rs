//! Core trait definition for the object-store abstraction

use async_trait::async_trait;

use super::error::StorageResult;

/// Keyed blob storage shared by all pipeline stages.
///
/// Artifacts are write-once-then-immutable in practice: a stage re-run with
/// the same inputs overwrites a key with byte-identical content. No append,
/// partial update, or locking primitives are required of a backend, but it
/// must provide read-after-write visibility for a key once `write` returns.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read the full content stored under `key`.
    ///
    /// Returns `StorageError::NotFound` when the key is absent.
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Write `bytes` under `key`, replacing any previous content.
    async fn write(&self, key: &str, bytes: &[u8]) -> StorageResult<()>;
}
