//! Character and format rules for individual fields.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

use std::sync::LazyLock;

use regex::Regex;

/// Browser regex `\s`: Unicode `White_Space` without U+0085, plus U+FEFF.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `local@domain.tld` with no whitespace or extra `@` in any part.
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    let part = format!("[^{WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$"))
});

/// Whitespace as the browser's regex engine sees it.
fn is_page_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Whether `c` may appear in a person's name.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || is_page_whitespace(c) || c == '-' || c == '\''
}

/// Strip every character that is not an ASCII letter, whitespace, hyphen,
/// or apostrophe.
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    raw.chars().filter(|&c| is_name_char(c)).collect()
}

/// Loose structural email check: something, `@`, something, `.`, something.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    match &*EMAIL_PATTERN {
        Ok(pattern) => pattern.is_match(raw),
        Err(err) => {
            log::error!("email pattern failed to compile: {err}");
            false
        }
    }
}

/// Length of `text` as the page measures it, in UTF-16 code units.
#[must_use]
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Longest prefix of `text` no longer than `max` UTF-16 code units.
///
/// Never splits a character, so a surrogate pair straddling the limit is
/// dropped whole.
#[must_use]
pub fn truncate_to_length(text: &str, max: usize) -> &str {
    let mut units = 0;
    for (idx, c) in text.char_indices() {
        units += c.len_utf16();
        if units > max {
            return &text[..idx];
        }
    }
    text
}
