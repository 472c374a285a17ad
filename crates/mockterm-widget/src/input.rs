//! Keystroke filtering.
//!
//! The original widget only accepts word characters, digits, whitespace,
//! dots, and dashes into the input buffer; hosts wire this into their key
//! handling before committing a line.

/// Strip characters outside `[A-Za-z0-9_ \t.-]` (and other whitespace)
/// from raw input.
pub fn filter_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '.' | '-'))
        .collect()
}
