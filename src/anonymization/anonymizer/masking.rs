//! Masking anonymization strategy

use super::Anonymizer;

/// Masking strategy - overwrites the leading characters of the first
/// occurrence of a value.
///
/// Each of the first `min(length, chars(value))` characters is replaced by one
/// copy of the filler. A value no longer than `length` is therefore masked
/// entirely. A `length` of zero never changes anything.
///
/// The value is the matched token minus the fixed wrapper characters, while
/// numeric detectors accept any non-digit edge. A labelled token such as
/// `cpf:11144477735` is therefore masked from the label, leaving the digits
/// visible. Use a redacting rule where labels may be glued to values.
#[derive(Debug, Clone)]
pub struct MaskingStrategy {
    filler: String,
    length: usize,
}

impl MaskingStrategy {
    /// Create a new masking strategy
    pub fn new(filler: impl Into<String>, length: usize) -> Self {
        Self {
            filler: filler.into(),
            length,
        }
    }
}

impl Anonymizer for MaskingStrategy {
    fn rewrite(&self, text: &str, value: &str) -> Option<String> {
        if self.length == 0 || value.is_empty() {
            return None;
        }
        let start = text.find(value)?;
        let end = start + value.len();

        let masked_chars = self.length.min(value.chars().count());
        // Byte offset where the unmasked tail of the value begins
        let tail = value
            .char_indices()
            .nth(masked_chars)
            .map_or(value.len(), |(idx, _)| idx);

        let mut result = String::with_capacity(text.len() + self.filler.len() * masked_chars);
        result.push_str(&text[..start]);
        result.push_str(&self.filler.repeat(masked_chars));
        result.push_str(&value[tail..]);
        result.push_str(&text[end..]);
        Some(result)
    }
}
