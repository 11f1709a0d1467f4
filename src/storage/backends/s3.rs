//! S3 object store backend

use async_trait::async_trait;
use aws_sdk_s3::Client;
use std::sync::Arc;
use tracing::{debug, info};

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::ObjectStore;

/// S3-backed object store
pub struct S3Store {
    client: Arc<Client>,
    bucket: String,
    prefix: Option<String>,
}

impl S3Store {
    /// Create a new S3 store and verify the bucket is reachable
    pub async fn new(
        bucket: &str,
        prefix: Option<String>,
        endpoint: Option<&str>,
    ) -> StorageResult<Self> {
        info!("initializing S3 store for bucket {}", bucket);

        let aws_config = if let Some(endpoint) = endpoint {
            aws_config::from_env().endpoint_url(endpoint).load().await
        } else {
            aws_config::load_from_env().await
        };

        let client = Client::new(&aws_config);

        client
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| {
                StorageError::unavailable(format!("failed to access bucket {bucket}: {e}"))
            })?;

        Ok(Self {
            client: Arc::new(client),
            bucket: bucket.to_string(),
            prefix,
        })
    }

    fn object_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}/{key}"),
            None => key.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        debug!("reading s3://{}/{}", self.bucket, key);

        match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(self.object_key(key))
            .send()
            .await
        {
            Ok(output) => {
                let bytes = output.body.collect().await.map_err(|e| {
                    StorageError::unavailable(format!("failed to read body of {key}: {e}"))
                })?;
                Ok(bytes.into_bytes().to_vec())
            }
            Err(err) => {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_no_such_key())
                {
                    return Err(StorageError::not_found(key));
                }
                Err(StorageError::unavailable(format!(
                    "failed to read {key}: {err}"
                )))
            }
        }
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        debug!("writing {} bytes to s3://{}/{}", bytes.len(), self.bucket, key);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(self.object_key(key))
            .body(bytes.to_vec().into())
            .send()
            .await
            .map_err(|e| StorageError::unavailable(format!("failed to write {key}: {e}")))?;

        Ok(())
    }
}
