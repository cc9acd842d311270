//! Single-line text field backing an open editor
//!
//! The caret is a character index, not a byte offset.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextField {
    text: String,
    caret: usize,
}

impl TextField {
    /// Field holding `text` with the caret at end-of-text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.chars().count();
        Self { text, caret }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Replace the whole value, caret to end
    pub fn set_value(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.char_len();
    }

    /// Blank the field and write its value back, which leaves the caret at
    /// end-of-text without losing the content
    pub fn refocus(&mut self) {
        let value = std::mem::take(&mut self.text);
        self.caret = 0;
        self.set_value(value);
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' || ch == '\r' {
            return;
        }
        let at = self.byte_offset(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
    }

    /// Insert text at the caret; line breaks are dropped (single-line field)
    pub fn insert_str(&mut self, s: &str) {
        let clean: String = s.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let at = self.byte_offset(self.caret);
        self.text.insert_str(at, &clean);
        self.caret += clean.chars().count();
    }

    pub fn delete_backward(&mut self) {
        if self.caret == 0 {
            return;
        }
        let at = self.byte_offset(self.caret - 1);
        self.text.remove(at);
        self.caret -= 1;
    }

    pub fn delete_forward(&mut self) {
        if self.caret >= self.char_len() {
            return;
        }
        let at = self.byte_offset(self.caret);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.char_len();
    }
}
