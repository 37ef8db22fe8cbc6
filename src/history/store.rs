use tracing::{debug, warn};

use super::error::HistoryError;
use crate::converter::strip_radix_prefix;
use crate::models::HistoryEntry;
use crate::storage::{HISTORY_KEY, KeyValueStore, StorageError};

/// Maximum number of saved conversions; older entries are evicted
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Ordered log of saved conversions, newest first.
///
/// The whole list is written to the `conversionHistory` slot of the injected
/// storage after every mutation. A mutation whose write fails leaves the
/// in-memory list as it was.
#[derive(Debug)]
pub struct HistoryStore<S: KeyValueStore> {
    storage: S,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load history from storage.
    ///
    /// A missing or blank slot yields an empty history. Content that does not
    /// deserialize is logged and also yields an empty history; the slot is
    /// overwritten on the next mutation.
    pub fn open(storage: S) -> Result<Self, HistoryError> {
        let entries = match storage.get(HISTORY_KEY)? {
            Some(raw) if !raw.trim().is_empty() => {
                match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                    Ok(entries) => entries,
                    Err(e) => {
                        warn!(
                            error = %e,
                            "Stored conversion history is malformed, starting empty"
                        );
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        };
        debug!(entries = entries.len(), "Loaded conversion history");

        Ok(Self { storage, entries })
    }

    /// Record a conversion at the head of the history.
    ///
    /// Rejected with [`HistoryError::DuplicateEntry`] when an entry with the same
    /// input, source base and target base exists anywhere in the list. A radix
    /// prefix on `entry.result` is dropped before storing.
    pub fn save(&mut self, mut entry: HistoryEntry) -> Result<(), HistoryError> {
        if self.contains(&entry) {
            return Err(HistoryError::DuplicateEntry);
        }

        entry.result = strip_radix_prefix(&entry.result);

        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(entry);
        next.extend(self.entries.iter().cloned());
        if next.len() > MAX_HISTORY_ENTRIES {
            debug!(evicted = next.len() - MAX_HISTORY_ENTRIES, "Evicting oldest history entries");
            next.truncate(MAX_HISTORY_ENTRIES);
        }

        self.commit(next)
    }

    /// Remove the entry at `index`. Out-of-range indices are ignored.
    pub fn delete(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.entries.len() {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(index);
        self.commit(next)
    }

    /// Remove every entry. Confirmation is the caller's job.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.commit(Vec::new())
    }

    /// Snapshot of the current entries, newest first
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.clone()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &HistoryEntry) -> bool {
        let key = entry.dedup_key();
        self.entries.iter().any(|existing| existing.dedup_key() == key)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn commit(&mut self, next: Vec<HistoryEntry>) -> Result<(), HistoryError> {
        let serialized = serde_json::to_string(&next).map_err(StorageError::from)?;
        self.storage.set(HISTORY_KEY, &serialized)?;
        self.entries = next;
        Ok(())
    }
}
