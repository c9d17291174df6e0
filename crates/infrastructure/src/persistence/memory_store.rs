//! In-memory key-value store
//!
//! Backs tests and ephemeral deployments. Contents are lost on restart.

use std::collections::HashMap;

use application::error::ApplicationError;
use application::ports::StoragePort;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Key-value store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoragePort for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ApplicationError> {
        self.records.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        self.records.write().await.remove(key);
        Ok(())
    }
}
