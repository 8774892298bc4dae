//! Single-line text buffer with cursor management

/// Editable text value for one form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Current text
    pub buffer: String,

    /// Cursor position within `buffer` (byte offset)
    pub cursor: usize,
}

impl InputState {
    /// Create an empty input
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Clear the buffer and reset the cursor
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Delete the previous word (like many shell/readline editors).
    ///
    /// This removes any whitespace immediately before the cursor, then removes
    /// the contiguous non-whitespace "word" segment.
    pub fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let mut start = self.cursor;
        let mut found_non_whitespace = false;

        for (index, ch) in self.buffer[..self.cursor].char_indices().rev() {
            if !found_non_whitespace {
                start = index;
                found_non_whitespace = !ch.is_whitespace();
                continue;
            }

            if ch.is_whitespace() {
                start = index.saturating_add(ch.len_utf8());
                break;
            }

            start = index;
        }

        self.buffer.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Replace the content and move the cursor to the end.
    ///
    /// Newlines are dropped; the field is single-line.
    pub fn set(&mut self, content: &str) {
        self.buffer = content.chars().filter(|c| *c != '\n').collect();
        self.cursor = self.buffer.len();
    }

    /// Insert a character at the cursor position.
    ///
    /// Control characters (including newlines) are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev_char_boundary = self.buffer[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.buffer.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
        }
    }

    /// Delete the character at the cursor (delete key)
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Move cursor left by one character
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.buffer[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move cursor right by one character
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = self.buffer[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.buffer.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Move cursor to the start of the field
    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end of the field
    pub const fn cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Current text
    #[must_use]
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Number of characters before the cursor (display column)
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    /// The buffer with every character replaced by `mask`
    #[must_use]
    pub fn masked(&self, mask: char) -> String {
        std::iter::repeat_n(mask, self.buffer.chars().count()).collect()
    }

    /// Check if the buffer is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
