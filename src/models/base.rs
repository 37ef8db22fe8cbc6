use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported positional numeral system.
///
/// Serialized as its integer radix (`2`, `8`, `10`, `16`) so persisted history
/// stays readable by anything that stored plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum NumberBase {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl NumberBase {
    pub const ALL: [NumberBase; 4] =
        [NumberBase::Binary, NumberBase::Octal, NumberBase::Decimal, NumberBase::Hexadecimal];

    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Binary => 2,
            NumberBase::Octal => 8,
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
        }
    }

    pub fn from_radix(radix: u32) -> Option<Self> {
        match radix {
            2 => Some(NumberBase::Binary),
            8 => Some(NumberBase::Octal),
            10 => Some(NumberBase::Decimal),
            16 => Some(NumberBase::Hexadecimal),
            _ => None,
        }
    }

    /// Human-readable system name used in messages and reports
    pub fn name(self) -> &'static str {
        match self {
            NumberBase::Binary => "Binary",
            NumberBase::Octal => "Octal",
            NumberBase::Decimal => "Decimal",
            NumberBase::Hexadecimal => "Hexadecimal",
        }
    }

    /// Radix prefix for display (`None` for decimal)
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            NumberBase::Binary => Some("0b"),
            NumberBase::Octal => Some("0o"),
            NumberBase::Decimal => None,
            NumberBase::Hexadecimal => Some("0x"),
        }
    }

    pub fn is_digit(self, ch: char) -> bool {
        ch.is_digit(self.radix())
    }

    /// Next base in display order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|b| *b == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous base in display order, wrapping around
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|b| *b == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<NumberBase> for u32 {
    fn from(base: NumberBase) -> Self {
        base.radix()
    }
}

impl TryFrom<u32> for NumberBase {
    type Error = String;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        NumberBase::from_radix(radix).ok_or_else(|| format!("unsupported base: {}", radix))
    }
}

impl FromStr for NumberBase {
    type Err = String;

    /// Accepts the radix (`16`), the short name (`hex`) or the full name
    /// (`hexadecimal`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" | "bin" | "binary" => Ok(NumberBase::Binary),
            "8" | "oct" | "octal" => Ok(NumberBase::Octal),
            "10" | "dec" | "decimal" => Ok(NumberBase::Decimal),
            "16" | "hex" | "hexadecimal" => Ok(NumberBase::Hexadecimal),
            other => Err(format!(
                "unknown base '{}' (expected 2, 8, 10, 16 or bin, oct, dec, hex)",
                other
            )),
        }
    }
}
