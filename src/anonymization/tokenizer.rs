//! Token splitting policies
//!
//! Detection tests whitespace-separated words. Anonymization needs the exact
//! substring to rewrite inside possibly JSON-escaped text, so it also splits
//! on the punctuation that usually wraps a value.

/// Extra delimiters of the extended policy, on top of whitespace
const EXTENDED_DELIMITERS: [char; 14] = [
    ',', ';', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '/', '\\',
];

/// Characters stripped from both ends of a matched token
const WRAPPING_CHARS: [char; 14] = [
    '"', '\'', '[', ']', '{', '}', '.', ',', ':', ';', '!', '?', '(', ')',
];

/// Literal backslash escapes that separate values in serialized JSON
const ESCAPE_PAIRS: [&str; 3] = ["\\n", "\\t", "\\r"];

/// Split a single line on Unicode whitespace
pub fn whitespace_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Split text on newlines, then each line on whitespace
pub fn line_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').flat_map(whitespace_tokens)
}

/// Split text using the extended delimiter policy.
///
/// Literal `\n`, `\t` and `\r` escape pairs become delimiters first, so a
/// value written right after an escape (`"\n111.444.777-35"`) comes out
/// without the escape letter glued to it.
pub fn extended_tokens(text: &str) -> Vec<String> {
    let mut normalized = text.to_string();
    for pair in ESCAPE_PAIRS {
        if normalized.contains(pair) {
            normalized = normalized.replace(pair, " ");
        }
    }

    normalized
        .split(|c: char| c.is_whitespace() || EXTENDED_DELIMITERS.contains(&c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim wrapping punctuation from both ends of a token
pub fn strip_wrapping(token: &str) -> &str {
    token.trim_matches(&WRAPPING_CHARS[..])
}
