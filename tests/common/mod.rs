//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Builder for a data directory holding `storage.json`
pub struct DataDirBuilder {
    temp_dir: TempDir,
    slots: BTreeMap<String, String>,
}

impl DataDirBuilder {
    /// Create a new builder with no storage file
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, slots: BTreeMap::new() }
    }

    /// Set a raw slot value
    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    /// Store the given entries under the history slot
    pub fn with_history_entries(self, entries: &[HistoryEntryBuilder]) -> Self {
        let array = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join(",");
        self.with_slot("conversionHistory", &format!("[{}]", array))
    }

    pub fn with_theme(self, theme: &str) -> Self {
        self.with_slot("theme", theme)
    }

    /// Write `storage.json` (if any slot was set) and return the directory
    pub fn build(self) -> TempDir {
        if !self.slots.is_empty() {
            let json = serde_json::to_string(&self.slots).expect("Failed to encode slots");
            fs::write(self.temp_dir.path().join("storage.json"), json)
                .expect("Failed to write storage.json");
        }
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for entries in the `conversionHistory` slot
pub struct HistoryEntryBuilder {
    input: String,
    from_base: u32,
    to_base: u32,
    result: String,
    timestamp: String,
}

impl HistoryEntryBuilder {
    /// Create an entry with default values (255 decimal to hex)
    pub fn new() -> Self {
        Self {
            input: "255".to_string(),
            from_base: 10,
            to_base: 16,
            result: "FF".to_string(),
            timestamp: "2025-01-01T12:00:00.000Z".to_string(),
        }
    }

    pub fn input(mut self, input: &str) -> Self {
        self.input = input.to_string();
        self
    }

    pub fn bases(mut self, from_base: u32, to_base: u32) -> Self {
        self.from_base = from_base;
        self.to_base = to_base;
        self
    }

    pub fn result(mut self, result: &str) -> Self {
        self.result = result.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    /// Convert to a JSON object string
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "input": self.input,
            "fromBase": self.from_base,
            "toBase": self.to_base,
            "result": self.result,
            "timestamp": self.timestamp,
        })
        .to_string()
    }
}

impl Default for HistoryEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The binary under test, pointed at `data_dir`
pub fn cli(data_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_radix-converter"));
    cmd.arg("--data-dir").arg(data_dir).env_remove("RADIX_CONVERTER_DATA_DIR");
    cmd
}

pub fn storage_path(data_dir: &Path) -> PathBuf {
    data_dir.join("storage.json")
}

/// Parsed `conversionHistory` slot from `storage.json`
pub fn read_history(data_dir: &Path) -> Vec<serde_json::Value> {
    let contents = fs::read_to_string(storage_path(data_dir)).expect("Failed to read storage");
    let slots: BTreeMap<String, String> =
        serde_json::from_str(&contents).expect("Storage is not a JSON object of strings");
    match slots.get("conversionHistory") {
        Some(raw) => serde_json::from_str(raw).expect("History slot is not a JSON array"),
        None => Vec::new(),
    }
}
