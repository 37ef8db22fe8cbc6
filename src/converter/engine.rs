use super::error::ConvertError;
use super::format::strip_input_prefix;
use crate::models::{ConversionRequest, ConversionResult, NumberBase, Sign};

/// Convert `raw_input` written in `source` into `target`.
///
/// The input may carry the radix prefix of its own base (`0b`, `0o`, `0x`, any
/// case). Only decimal input accepts a leading `-`; binary, octal and hex input
/// is unsigned. Magnitudes are exact up to `u64::MAX` and rejected above it.
///
/// Negative values keep their sign in every target base (`-5` in binary renders
/// as `-101`).
///
/// ```
/// use radix_converter::converter::convert;
/// use radix_converter::models::NumberBase;
///
/// let result = convert("0x1F", NumberBase::Hexadecimal, NumberBase::Decimal)?;
/// assert_eq!(result.render(), "31");
/// # Ok::<(), radix_converter::converter::ConvertError>(())
/// ```
pub fn convert(
    raw_input: &str,
    source: NumberBase,
    target: NumberBase,
) -> Result<ConversionResult, ConvertError> {
    if source == target {
        return Err(ConvertError::SameBase);
    }
    if raw_input.is_empty() {
        return Err(ConvertError::InvalidInput);
    }

    let value = strip_input_prefix(raw_input, source);
    validate_alphabet(value, source)?;

    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::Positive, value),
    };

    if digits.is_empty() {
        return Err(ConvertError::InvalidFormat);
    }
    let magnitude =
        u64::from_str_radix(digits, source.radix()).map_err(|_| ConvertError::InvalidFormat)?;

    // -0 is plain 0
    let sign = if magnitude == 0 { Sign::Positive } else { sign };

    Ok(ConversionResult { digits: render_magnitude(magnitude, target), sign, base: target })
}

/// [`convert`] for a [`ConversionRequest`]
pub fn convert_request(request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
    convert(&request.raw_input, request.source_base, request.target_base)
}

/// Every character must belong to the base's alphabet. Decimal additionally
/// allows one leading `-`.
fn validate_alphabet(value: &str, base: NumberBase) -> Result<(), ConvertError> {
    let body = match base {
        NumberBase::Decimal => value.strip_prefix('-').unwrap_or(value),
        _ => value,
    };
    if body.chars().all(|ch| base.is_digit(ch)) {
        Ok(())
    } else {
        Err(ConvertError::InvalidCharacters { base })
    }
}

fn render_magnitude(magnitude: u64, base: NumberBase) -> String {
    match base {
        NumberBase::Binary => format!("{:b}", magnitude),
        NumberBase::Octal => format!("{:o}", magnitude),
        NumberBase::Decimal => magnitude.to_string(),
        NumberBase::Hexadecimal => format!("{:X}", magnitude),
    }
}
