//! Storage Port - Interface for persisting engine state.
//!
//! The engine persists its user patterns and learning records as opaque
//! bytes; the wire format is the engine's concern, not the adapter's.

use async_trait::async_trait;

/// Errors that can occur during storage operations.
///
/// These are always absorbed by the engine: a load failure degrades to an
/// empty in-memory state, a save failure retains the in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Port for persisting and loading opaque engine state.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load the bytes stored under `key`, or `None` when absent.
    ///
    /// # Errors
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store `bytes` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}
