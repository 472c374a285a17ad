//! HTML helper functions available to command handlers.
//!
//! The output sink never escapes anything; handlers that interpolate user
//! text into markup call [`escape`] themselves.

/// Escape the five XML-predefined characters so `text` renders literally.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `text` followed by a line of `ch` repeated to the same width.
///
/// Used for section headers in `help` and `man` output.
pub fn underline(text: &str, ch: char) -> String {
    let line: String = std::iter::repeat_n(ch, text.chars().count()).collect();
    format!("{text}<br>{line}")
}
