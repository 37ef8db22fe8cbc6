//! Terminal output sanitization
//!
//! History inputs are read back from a user-editable storage file, so anything
//! shown from it goes through [`strip_ansi_codes`] before reaching the terminal.
//! An embedded escape sequence could otherwise clear the screen, move the cursor
//! or restyle the TUI.

/// Strips ANSI escape codes from a string
///
/// Removes CSI sequences (`ESC [ ... letter`) and every other control character
/// except tab, newline and carriage return.
///
/// ```
/// use radix_converter::utils::terminal::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31m0xFF\x1b[0m"), "0xFF");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }
        result.push(ch);
    }

    result
}
