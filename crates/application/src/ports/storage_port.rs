//! Key-value storage port
//!
//! The tax records and the cached weather snapshot live under a handful of
//! fixed string keys, each holding one JSON document. Implementations may
//! keep them in files or in memory. Values are stored as strings - the
//! typed extension trait handles JSON on top.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;
use crate::loaded::Loaded;

/// The fixed storage keys
pub mod keys {
    /// Last successfully derived weather snapshot
    pub const WEATHER_SNAPSHOT: &str = "hearth.weather.snapshot";
    /// The tax profile record
    pub const TAX_PROFILE: &str = "hearth.tax.profile";
    /// The expense category list
    pub const TAX_CATEGORIES: &str = "hearth.tax.categories";
    /// The expense list
    pub const TAX_EXPENSES: &str = "hearth.tax.expenses";
    /// First-run seeding guard
    pub const TAX_INITIALIZED: &str = "hearth.tax.initialized";
}

/// Port for string key-value storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Get the value stored under a key
    ///
    /// Returns `None` when the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    /// Store a value under a key, replacing any previous value
    async fn set(&self, key: &str, value: String) -> Result<(), ApplicationError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), ApplicationError>;
}

/// Extension trait for typed JSON records on top of the string interface
#[async_trait]
pub trait StoragePortExt: StoragePort {
    /// Read and decode the record under a key.
    ///
    /// I/O failures are errors; a missing record is `Loaded::Absent` and a
    /// record that fails to decode is `Loaded::Corrupt`, so callers can
    /// tell corruption from a fresh store.
    async fn get_json<T>(&self, key: &str) -> Result<Loaded<T>, ApplicationError>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.get(key).await? {
            None => Ok(Loaded::Absent),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Loaded::Value(value)),
                Err(e) => Ok(Loaded::Corrupt {
                    error: e.to_string(),
                }),
            },
        }
    }

    /// Encode and store a record under a key
    async fn set_json<T>(&self, key: &str, value: &T) -> Result<(), ApplicationError>
    where
        T: serde::Serialize + Send + Sync,
    {
        let raw = serde_json::to_string(value)
            .map_err(|e| ApplicationError::Internal(format!("Storage serialization error: {e}")))?;
        self.set(key, raw).await
    }
}

// Blanket implementation for all StoragePort implementors
impl<T: StoragePort + ?Sized> StoragePortExt for T {}
