//! Data models for conversions and saved history.
//!
//! - [`NumberBase`] - The four supported numeral systems
//! - [`ConversionRequest`] / [`ConversionResult`] - Engine input and output
//! - [`HistoryEntry`] - A saved conversion, as persisted under `conversionHistory`
//!
//! Timestamps are written as ISO-8601 with millisecond precision and read back
//! leniently by the helpers in [`timestamps`].

pub mod base;
pub mod conversion;
pub mod history;
pub mod theme;
pub mod timestamps;

pub use base::NumberBase;
pub use conversion::{ConversionRequest, ConversionResult, Sign};
pub use history::HistoryEntry;
pub use theme::Theme;
