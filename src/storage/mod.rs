//! Key-value persistence port.
//!
//! The history store and preferences read and write whole string values under
//! named slots, the same shape as browser local storage. Two backends:
//!
//! - [`FileStore`]: a single JSON object on disk, written atomically
//! - [`MemoryStore`]: in-process map for tests and embedding
//!
//! Every call is synchronous and either fully applies or fails; there is no
//! partial write.

pub mod file;
pub mod memory;
pub mod preferences;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use preferences::{load_theme, save_theme};

/// Slot holding the serialized conversion history
pub const HISTORY_KEY: &str = "conversionHistory";
/// Slot holding the theme preference
pub const THEME_KEY: &str = "theme";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String-keyed storage of string values
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
