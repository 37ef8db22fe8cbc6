use thiserror::Error;

use crate::models::NumberBase;

/// Reasons a conversion is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Please enter a number to convert")]
    InvalidInput,

    #[error("Invalid characters for {base} system")]
    InvalidCharacters { base: NumberBase },

    #[error("Invalid number format")]
    InvalidFormat,

    #[error("Source and target number systems are the same")]
    SameBase,
}
