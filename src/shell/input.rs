//! Editable input line.

use super::types::ShellError;
use crate::fs::Capacity;

/// The prompt's input buffer. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct InputLine {
    text: String,
    cursor: usize,
    capacity: usize,
}

impl InputLine {
    pub fn new(capacity: usize) -> Self {
        Self { text: String::new(), cursor: 0, capacity }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    /// Insert at the cursor.
    pub fn insert(&mut self, c: char) -> Result<(), ShellError> {
        if self.len() >= self.capacity {
            return Err(ShellError::CapacityExceeded {
                what: Capacity::InputLine,
                limit: self.capacity,
            });
        }
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, c);
        self.cursor += 1;
        Ok(())
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let offset = self.byte_offset(self.cursor);
        self.text.remove(offset);
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Replace the content, cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.chars().take(self.capacity).collect();
        self.cursor = self.len();
    }

    /// Take the content, leaving the line empty with the cursor at 0.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}
