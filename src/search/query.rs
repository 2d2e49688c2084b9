//! Editable query text
//!
//! Holds a search string together with a byte cursor that always sits on a
//! character boundary.

/// A search query being edited in a text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryText {
    text: String,
    cursor: usize,
}

impl QueryText {
    /// Create an empty query
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Create a query with initial text and the cursor at the end
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Current text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Cursor position in bytes
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the query is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at the cursor
    pub fn push(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    ///
    /// Returns `true` if the text changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev_char_boundary = self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.text.remove(prev_char_boundary);
        self.cursor = prev_char_boundary;
        true
    }

    /// Remove the character under the cursor
    ///
    /// Returns `true` if the text changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    /// Remove the word before the cursor
    ///
    /// Returns `true` if the text changed.
    pub fn delete_word(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let trimmed = self.text[..self.cursor].trim_end();
        if let Some(last_space) = trimmed.rfind(' ') {
            self.text.drain(last_space + 1..self.cursor);
            self.cursor = last_space + 1;
        } else {
            self.text.drain(..self.cursor);
            self.cursor = 0;
        }
        true
    }

    /// Move the cursor one character left
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the cursor one character right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.text.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Clear the text
    ///
    /// Returns `true` if there was anything to clear.
    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.cursor = 0;
        changed
    }
}
