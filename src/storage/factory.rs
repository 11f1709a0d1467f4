//! Storage factory for constructing backends from configuration

use std::sync::Arc;

#[cfg(feature = "s3")]
use super::backends::S3Store;
use super::backends::{FileStore, MemoryStore};
use super::config::StorageConfig;
use super::error::StorageResult;
use super::traits::ObjectStore;

/// Factory for creating object-store instances
pub struct StorageFactory;

impl StorageFactory {
    /// Create an object store from explicit configuration
    pub async fn from_config(config: &StorageConfig) -> StorageResult<Arc<dyn ObjectStore>> {
        match config {
            StorageConfig::Memory => Ok(Arc::new(MemoryStore::new())),
            StorageConfig::File { root } => Ok(Arc::new(FileStore::new(root).await?)),
            #[cfg(feature = "s3")]
            StorageConfig::S3 {
                bucket,
                prefix,
                endpoint,
            } => {
                let store = S3Store::new(bucket, prefix.clone(), endpoint.as_deref()).await?;
                Ok(Arc::new(store))
            }
            #[cfg(not(feature = "s3"))]
            StorageConfig::S3 { .. } => Err(super::error::StorageError::configuration(
                "S3 backend not enabled. Enable with --features s3",
            )),
        }
    }
}
