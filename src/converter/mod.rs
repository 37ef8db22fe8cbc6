//! Numeral-base conversion.
//!
//! [`convert`] parses a string in one of the four supported bases and renders it
//! in another. Display concerns (radix prefixes) live in [`format`] and are
//! applied by callers, never by the engine itself.

pub mod engine;
pub mod error;
pub mod format;

pub use engine::{convert, convert_request};
pub use error::ConvertError;
pub use format::{format_result, strip_input_prefix, strip_radix_prefix};
