use crate::models::NumberBase;

/// Remove a radix prefix matching `base` (`0b`, `0o`, `0x`), case-insensitively.
/// Decimal has no prefix, and a prefix of another base is left alone.
pub fn strip_input_prefix(value: &str, base: NumberBase) -> &str {
    let Some(prefix) = base.prefix() else {
        return value;
    };
    match value.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &value[prefix.len()..],
        _ => value,
    }
}

/// Prefix a rendered result for display: `0b`/`0o`/`0x` for non-decimal bases,
/// placed after a leading minus sign. Decimal is returned unchanged.
///
/// ```
/// use radix_converter::converter::format_result;
/// use radix_converter::models::NumberBase;
///
/// assert_eq!(format_result("FF", NumberBase::Hexadecimal), "0xFF");
/// assert_eq!(format_result("-101", NumberBase::Binary), "-0b101");
/// assert_eq!(format_result("42", NumberBase::Decimal), "42");
/// ```
pub fn format_result(rendered: &str, base: NumberBase) -> String {
    let Some(prefix) = base.prefix() else {
        return rendered.to_string();
    };
    match rendered.strip_prefix('-') {
        Some(magnitude) => format!("-{}{}", prefix, magnitude),
        None => format!("{}{}", prefix, rendered),
    }
}

/// Inverse of [`format_result`]: drop a leading `0b`/`0o`/`0x` (after an
/// optional minus sign) so only the digits are persisted.
pub fn strip_radix_prefix(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let bytes = rest.as_bytes();
    let prefixed = bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1], b'b' | b'o' | b'x' | b'B' | b'O' | b'X');
    if prefixed { format!("{}{}", sign, &rest[2..]) } else { formatted.to_string() }
}
