//! Local-filesystem object store

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::ObjectStore;

/// Object store rooted at a local directory.
///
/// Keys use `/` as a namespace separator; segments map onto subdirectories
/// under the root.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store, creating the root directory if needed
    pub async fn new(root: &Path) -> StorageResult<Self> {
        fs::create_dir_all(root).await?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl ObjectStore for FileStore {
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.object_path(key);
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::not_found(key))
            }
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let path = self.object_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        debug!("writing {} bytes to {}", bytes.len(), path.display());
        fs::write(&path, bytes).await?;
        Ok(())
    }
}
