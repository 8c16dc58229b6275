//! String-backed text buffer with a character-offset API.

use super::selection::Selection;

/// The text content of an editable component.
///
/// All offsets in the public API count characters, matching [`Selection`]
/// and the tokenizer's spans. The buffer is replaced wholesale by every
/// editing command rather than patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
}

impl TextBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial text
    pub fn from_text(text: &str) -> Self {
        Self {
            content: text.to_string(),
        }
    }

    /// The buffer content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the entire content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Length in characters
    pub fn len_chars(&self) -> usize {
        self.content.chars().count()
    }

    /// True when the buffer holds no text
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Byte offset of the character at `char_offset` (content length for
    /// offsets at or past the end)
    pub fn byte_of(&self, char_offset: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_offset)
            .map(|(b, _)| b)
            .unwrap_or(self.content.len())
    }

    /// The text covered by `selection`
    pub fn slice(&self, selection: Selection) -> &str {
        let start = self.byte_of(selection.start);
        let end = self.byte_of(selection.end);
        &self.content[start..end]
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_chars_vs_bytes() {
        let buf = TextBuffer::from_text("héllo");
        assert_eq!(buf.len_chars(), 5);
        assert_eq!(buf.content().len(), 6);
    }

    #[test]
    fn test_slice_char_offsets() {
        let buf = TextBuffer::from_text("日本語abc");
        assert_eq!(buf.slice(Selection::new(1, 4)), "本語a");
    }

    #[test]
    fn test_byte_of_past_end() {
        let buf = TextBuffer::from_text("ab");
        assert_eq!(buf.byte_of(2), 2);
        assert_eq!(buf.byte_of(99), 2);
    }
}
