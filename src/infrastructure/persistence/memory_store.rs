//! In-memory key-value store for tests or when no state directory is usable.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::domain::repositories::KeyValueStore;
use crate::error::StorageError;

/// A store that keeps values for the lifetime of the process only.
///
/// # Use Cases
///
/// - Tests that need a real store without touching disk
/// - Fallback when the state directory cannot be resolved at startup
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (history is not persisted)");
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
