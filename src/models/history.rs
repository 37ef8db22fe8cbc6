use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::base::NumberBase;

/// A saved conversion.
///
/// Field names match the persisted layout (`fromBase`, `toBase`); `result` is
/// stored without a radix prefix, the prefix is rebuilt from `to_base` on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub input: String,
    #[serde(rename = "fromBase")]
    pub from_base: NumberBase,
    #[serde(rename = "toBase")]
    pub to_base: NumberBase,
    pub result: String,
    #[serde(
        serialize_with = "crate::models::timestamps::serialize_timestamp",
        deserialize_with = "crate::models::timestamps::deserialize_timestamp"
    )]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time
    pub fn new(
        input: impl Into<String>,
        from_base: NumberBase,
        to_base: NumberBase,
        result: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(input, from_base, to_base, result, Utc::now())
    }

    pub fn with_timestamp(
        input: impl Into<String>,
        from_base: NumberBase,
        to_base: NumberBase,
        result: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self { input: input.into(), from_base, to_base, result: result.into(), timestamp }
    }

    /// Key used for duplicate detection
    pub fn dedup_key(&self) -> (&str, NumberBase, NumberBase) {
        (&self.input, self.from_base, self.to_base)
    }
}
