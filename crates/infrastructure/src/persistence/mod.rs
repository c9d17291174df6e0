//! Key-value record persistence
//!
//! Two `StoragePort` implementations: a file-backed store for normal
//! deployments and an in-memory store for tests and ephemeral setups.

mod json_file_store;
mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
