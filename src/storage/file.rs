//! JSON-file storage backend with atomic writes

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{KeyValueStore, StorageError};

/// File name used inside a data directory
pub const STORAGE_FILENAME: &str = "storage.json";

/// All slots live in one JSON object (`{"slot": "value", ...}`). The file is
/// read once at open; each mutation rewrites it via temp file + rename, and the
/// in-memory copy only changes after the write succeeded.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    slots: BTreeMap<String, String>,
}

impl FileStore {
    /// Open `storage.json` inside `data_dir`, creating the directory if needed
    pub fn open_in_dir(data_dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(data_dir)?;
        Self::open(data_dir.join(STORAGE_FILENAME))
    }

    /// Open a storage file. A missing file is an empty store; a file that is
    /// not a JSON object of strings is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let slots = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(slots) => slots,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Storage file is corrupted, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), slots = slots.len(), "Opened storage file");

        Ok(Self { path, slots })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, slots: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut temp_name = self.path.file_name().unwrap_or_default().to_os_string();
        temp_name.push(".tmp");
        let temp_path = self.path.with_file_name(temp_name);

        let json = serde_json::to_string_pretty(slots)?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut next = self.slots.clone();
        next.insert(key.to_string(), value.to_string());
        self.write(&next)?;
        self.slots = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if !self.slots.contains_key(key) {
            return Ok(());
        }
        let mut next = self.slots.clone();
        next.remove(key);
        self.write(&next)?;
        self.slots = next;
        Ok(())
    }
}
