use std::fmt;

use super::base::NumberBase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// A conversion as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub raw_input: String,
    pub source_base: NumberBase,
    pub target_base: NumberBase,
}

impl ConversionRequest {
    pub fn new(
        raw_input: impl Into<String>,
        source_base: NumberBase,
        target_base: NumberBase,
    ) -> Self {
        Self { raw_input: raw_input.into(), source_base, target_base }
    }
}

/// Outcome of a successful conversion.
///
/// `digits` is the unsigned magnitude in `base` (uppercase for hex); the sign is
/// kept separately and is never `Negative` for a zero magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub digits: String,
    pub sign: Sign,
    pub base: NumberBase,
}

impl ConversionResult {
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Signed, unprefixed rendering (`-101`, `FF`)
    pub fn render(&self) -> String {
        if self.is_negative() { format!("-{}", self.digits) } else { self.digits.clone() }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
