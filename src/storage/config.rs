//! Storage configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Backend selection plus backend-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// In-memory store, for tests and throwaway local runs
    Memory,
    /// Local-filesystem store rooted at a directory
    File { root: PathBuf },
    /// S3 bucket (requires the `s3` feature)
    S3 {
        bucket: String,
        #[serde(default)]
        prefix: Option<String>,
        /// Custom endpoint URL, e.g. for MinIO or localstack
        #[serde(default)]
        endpoint: Option<String>,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::File {
            root: PathBuf::from(".tally"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = StorageConfig::File {
            root: PathBuf::from("/var/lib/tally"),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: StorageConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn backend_tag_is_lowercase() {
        let json = serde_json::to_value(StorageConfig::Memory).unwrap();
        assert_eq!(json["backend"], "memory");
    }
}
