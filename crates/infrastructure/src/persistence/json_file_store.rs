//! File-backed key-value store
//!
//! One JSON document per key, stored as `<data_dir>/<key>.json`. Writes go
//! through a temp file and an atomic rename so a crash mid-write leaves the
//! previous document intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::StoragePort;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Key-value store with one file per key
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at a directory, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, ApplicationError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)
            .map_err(|e| ApplicationError::Storage(format!("Cannot create data dir: {e}")))?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

fn storage_err(context: &str, path: &Path, e: &std::io::Error) -> ApplicationError {
    ApplicationError::Storage(format!("{context} {}: {e}", path.display()))
}

#[async_trait]
impl StoragePort for JsonFileStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_err("Cannot read", &path, &e)),
        }
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: String) -> Result<(), ApplicationError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| storage_err("Cannot write", &tmp, &e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| storage_err("Cannot commit", &path, &e))?;

        debug!(key, "Stored record");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_err("Cannot remove", &path, &e)),
        }
    }
}
