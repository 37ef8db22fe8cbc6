//! Radix Converter - Convert numbers between binary, octal, decimal and hexadecimal
//!
//! This library provides:
//!
//! - A conversion engine with per-base validation and radix-prefix handling
//! - A bounded (50 entries), deduplicated history of saved conversions
//! - A key-value storage port with a JSON file backend
//! - Command-line and terminal UI front ends
//!
//! # Example
//!
//! ```
//! use radix_converter::converter::{convert, format_result};
//! use radix_converter::history::HistoryStore;
//! use radix_converter::models::{HistoryEntry, NumberBase};
//! use radix_converter::storage::MemoryStore;
//!
//! let result = convert("255", NumberBase::Decimal, NumberBase::Hexadecimal)?;
//! let formatted = format_result(&result.render(), NumberBase::Hexadecimal);
//! assert_eq!(formatted, "0xFF");
//!
//! let mut history = HistoryStore::open(MemoryStore::new())?;
//! let entry = HistoryEntry::new("255", NumberBase::Decimal, NumberBase::Hexadecimal, formatted);
//! history.save(entry)?;
//! assert_eq!(history.list()[0].result, "FF");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod converter;
pub mod export;
pub mod history;
pub mod models;
pub mod storage;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use converter::{ConvertError, convert, format_result};
pub use history::{HistoryError, HistoryStore};
pub use models::{ConversionResult, HistoryEntry, NumberBase};
