//! Persisted, newest-first log of generated links.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::HistoryEntry;
use crate::domain::repositories::KeyValueStore;

/// Storage slot holding the serialized log. Must stay stable across releases.
pub const HISTORY_KEY: &str = "whatsapp-link-history";

/// Owns the history log and mirrors every mutation to storage.
///
/// The whole log is written on each mutation. Storage failures never reach
/// the caller: a failed read yields an empty log and a failed write keeps the
/// in-memory log, both logged at `warn`.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<HistoryEntry>,
    max_entries: Option<usize>,
}

impl HistoryStore {
    /// Opens the log, loading whatever is persisted.
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let mut history = Self {
            store,
            entries: Vec::new(),
            max_entries: None,
        };
        history.load();
        history
    }

    /// Caps the log at `max_entries`, dropping the oldest on append.
    ///
    /// `None` or `Some(0)` leaves the log unbounded.
    pub fn with_limit(mut self, max_entries: Option<usize>) -> Self {
        self.max_entries = max_entries.filter(|&n| n > 0);
        self
    }

    /// Current log, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-reads the persisted log.
    ///
    /// Missing, unreadable, or malformed data yields an empty log.
    pub fn load(&mut self) -> &[HistoryEntry] {
        self.entries = match self.store.read(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding unreadable history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read history: {}. Starting empty.", e);
                Vec::new()
            }
        };
        &self.entries
    }

    /// Inserts `entry` at the front and persists the full log.
    pub fn append(&mut self, entry: HistoryEntry) -> &[HistoryEntry] {
        self.entries.insert(0, entry);
        if let Some(max) = self.max_entries {
            self.entries.truncate(max);
        }
        self.persist();
        &self.entries
    }

    /// Empties the log and persists the empty array.
    pub fn clear(&mut self) -> &[HistoryEntry] {
        let removed = self.entries.len();
        self.entries.clear();
        self.persist();
        info!(removed, "history cleared");
        &self.entries
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize history: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.write(HISTORY_KEY, &raw) {
            warn!("Failed to persist history: {}. Keeping it in memory.", e);
        }
    }
}
