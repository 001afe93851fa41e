//! Narrow key-value interface over durable local storage.

use crate::error::StorageError;

/// A keyed blob store holding whole values.
///
/// Writes replace the value under a key in full. Callers that need
/// multi-writer consistency must layer read-modify-write on top; the
/// current history log has a single writer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileStore`] - One JSON file per key
/// - [`crate::infrastructure::persistence::MemoryStore`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if present
    /// - `Ok(None)` if nothing was ever written under `key`
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value could not be made durable.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
