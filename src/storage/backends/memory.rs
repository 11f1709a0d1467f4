//! In-memory object store for testing and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::ObjectStore;

/// In-memory object store backed by a keyed map
#[derive(Default)]
pub struct MemoryStore {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create a new, empty memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::not_found(key))
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        self.objects
            .write()
            .await
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_then_read_returns_same_bytes() {
        let store = MemoryStore::new();
        store.write("docs/input.txt", b"hello world").await.unwrap();
        assert_eq!(store.read("docs/input.txt").await.unwrap(), b"hello world");
    }

    #[tokio::test]
    async fn read_of_missing_key_is_not_found() {
        let store = MemoryStore::new();
        let err = store.read("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn rewrite_replaces_previous_content() {
        let store = MemoryStore::new();
        store.write("k", b"first").await.unwrap();
        store.write("k", b"second").await.unwrap();
        assert_eq!(store.read("k").await.unwrap(), b"second");
    }
}
