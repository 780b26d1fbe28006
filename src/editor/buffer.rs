use std::ops::Range;

use ropey::Rope;

use crate::selection::SelectionObservation;

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A text buffer backed by a rope, with a caret and an optional selection.
///
/// All positions are `char` indices into the whole buffer. A selection is
/// the range between `anchor` and the caret.
pub struct EditorBuffer {
    rope: Rope,
    cursor: usize,
    anchor: Option<usize>,
}

impl EditorBuffer {
    /// Create a new buffer from a string, caret at the end.
    pub fn from_text(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let cursor = rope.len_chars();
        Self {
            rope,
            cursor,
            anchor: None,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Caret position as a char index.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Caret position as zero-based `(line, column)`, column in chars.
    pub fn position(&self) -> (usize, usize) {
        let line = self.rope.char_to_line(self.cursor);
        (line, self.cursor - self.rope.line_to_char(line))
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(line.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Char index of the first character of a line.
    pub fn line_start(&self, line_idx: usize) -> usize {
        self.rope.line_to_char(line_idx.min(self.line_count().saturating_sub(1)))
    }

    /// The selected char range, ordered, or `None` without a selection.
    pub fn selection_range(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        let range = anchor.min(self.cursor)..anchor.max(self.cursor);
        (!range.is_empty()).then_some(range)
    }

    /// What the host reports to the annotation session: the selected range
    /// and its text. A bare caret is not a selection.
    pub fn selection_observation(&self) -> Option<SelectionObservation> {
        let range = self.selection_range()?;
        let text = self.rope.slice(range.clone()).to_string();
        Some(SelectionObservation::new(range.start, range.end, text))
    }

    /// Insert a character at the caret, replacing any selection.
    pub fn insert_char(&mut self, ch: char) {
        self.delete_selection();
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
    }

    /// Insert a string at the caret, replacing any selection.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.delete_selection();
        self.rope.insert(self.cursor, s);
        self.cursor += s.chars().count();
    }

    /// Delete the selection, or the character before the caret (Backspace).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.rope.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        true
    }

    /// Delete the selection, or the character at the caret (Delete key).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(self.cursor..=self.cursor);
        true
    }

    /// Move the caret, dropping any selection.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.anchor = None;
        self.step(direction);
    }

    /// Move the caret while keeping the selection anchor (Shift+arrow).
    pub fn extend_selection(&mut self, direction: Direction) {
        self.anchor.get_or_insert(self.cursor);
        self.step(direction);
    }

    /// Move caret to the beginning of the line (Home).
    pub fn move_home(&mut self, extend: bool) {
        self.set_anchor(extend);
        let (line, _) = self.position();
        self.cursor = self.rope.line_to_char(line);
    }

    /// Move caret to the end of the line (End).
    pub fn move_end(&mut self, extend: bool) {
        self.set_anchor(extend);
        let (line, _) = self.position();
        self.cursor = self.rope.line_to_char(line) + self.line_len(line);
    }

    /// Move caret to a char index, clamped to the buffer (mouse).
    pub fn move_to(&mut self, char_idx: usize, extend: bool) {
        self.set_anchor(extend);
        self.cursor = char_idx.min(self.rope.len_chars());
    }

    /// Select the whole buffer.
    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.cursor = self.rope.len_chars();
    }

    /// Drop the selection. Returns whether one was active.
    pub const fn clear_selection(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    // --- Private helpers ---

    fn set_anchor(&mut self, extend: bool) {
        if extend {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
    }

    fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection_range() else {
            self.anchor = None;
            return false;
        };
        self.rope.remove(range.clone());
        self.cursor = range.start;
        self.anchor = None;
        true
    }

    /// Length of a line in chars, without its line break.
    fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.chars().count())
    }

    fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.cursor = self.cursor.saturating_sub(1),
            Direction::Right => self.cursor = (self.cursor + 1).min(self.rope.len_chars()),
            Direction::Up => {
                let (line, col) = self.position();
                if line > 0 {
                    self.cursor = self.rope.line_to_char(line - 1) + col.min(self.line_len(line - 1));
                }
            }
            Direction::Down => {
                let (line, col) = self.position();
                if line + 1 < self.line_count() {
                    self.cursor = self.rope.line_to_char(line + 1) + col.min(self.line_len(line + 1));
                }
            }
        }
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} chars)", self.rope.len_chars()),
            )
            .field("cursor", &self.cursor)
            .field("anchor", &self.anchor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction and basic queries ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = EditorBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_from_text_places_caret_at_end() {
        let buf = EditorBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.cursor(), 11);
        assert_eq!(buf.position(), (1, 5));
    }

    // --- Editing ---

    #[test]
    fn test_insert_chars_builds_text() {
        let mut buf = EditorBuffer::empty();
        for ch in "a b".chars() {
            buf.insert_char(ch);
        }
        assert_eq!(buf.text(), "a b");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_insert_multibyte_char_advances_one() {
        let mut buf = EditorBuffer::empty();
        buf.insert_char('é');
        buf.insert_char('x');
        assert_eq!(buf.text(), "éx");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_insert_str_empty_is_noop() {
        let mut buf = EditorBuffer::from_text("abc");
        buf.insert_str("");
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_delete_back_at_start_is_noop() {
        let mut buf = EditorBuffer::from_text("abc");
        buf.move_home(false);
        assert!(!buf.delete_back());
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn test_delete_back_removes_char() {
        let mut buf = EditorBuffer::from_text("abc");
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "ab");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = EditorBuffer::from_text("abc");
        assert!(!buf.delete_forward());
    }

    #[test]
    fn test_delete_forward_removes_char() {
        let mut buf = EditorBuffer::from_text("abc");
        buf.move_home(false);
        assert!(buf.delete_forward());
        assert_eq!(buf.text(), "bc");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_typing_replaces_selection() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.move_home(false);
        for _ in 0..5 {
            buf.extend_selection(Direction::Right);
        }
        buf.insert_char('J');
        assert_eq!(buf.text(), "J world");
        assert_eq!(buf.cursor(), 1);
        assert!(buf.selection_range().is_none());
    }

    #[test]
    fn test_backspace_deletes_selection() {
        let mut buf = EditorBuffer::from_text("hello world");
        for _ in 0..6 {
            buf.extend_selection(Direction::Left);
        }
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "hello");
    }

    // --- Selection ---

    #[test]
    fn test_selection_observation_reports_selected_text() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.move_home(false);
        for _ in 0..6 {
            buf.extend_selection(Direction::Right);
        }
        assert_eq!(
            buf.selection_observation(),
            Some(SelectionObservation::new(0, 6, "hello "))
        );
    }

    #[test]
    fn test_backward_selection_is_ordered() {
        let mut buf = EditorBuffer::from_text("hello world");
        for _ in 0..5 {
            buf.extend_selection(Direction::Left);
        }
        assert_eq!(buf.selection_range(), Some(6..11));
        assert_eq!(buf.selection_observation().unwrap().text, "world");
    }

    #[test]
    fn test_bare_caret_is_not_observed() {
        let mut buf = EditorBuffer::from_text("a  b");
        assert_eq!(buf.selection_observation(), None);
        buf.move_to(2, false);
        assert_eq!(buf.selection_observation(), None);
    }

    #[test]
    fn test_move_drops_selection() {
        let mut buf = EditorBuffer::from_text("ab");
        buf.extend_selection(Direction::Left);
        assert!(buf.selection_range().is_some());
        buf.move_cursor(Direction::Left);
        assert!(buf.selection_range().is_none());
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut buf = EditorBuffer::from_text("a b");
        buf.select_all();
        assert_eq!(buf.selection_range(), Some(0..3));
        assert!(buf.clear_selection());
        assert!(!buf.clear_selection());
    }

    #[test]
    fn test_extend_home_selects_to_line_start() {
        let mut buf = EditorBuffer::from_text("one\ntwo");
        buf.move_home(true);
        assert_eq!(
            buf.selection_observation(),
            Some(SelectionObservation::new(4, 7, "two"))
        );
    }

    // --- Navigation ---

    #[test]
    fn test_move_left_at_start_is_noop() {
        let mut buf = EditorBuffer::from_text("a");
        buf.move_home(false);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_move_right_at_end_is_noop() {
        let mut buf = EditorBuffer::from_text("a");
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_move_up_clamps_to_shorter_line() {
        let mut buf = EditorBuffer::from_text("ab\nlonger");
        buf.move_cursor(Direction::Up);
        assert_eq!(buf.position(), (0, 2));
    }

    #[test]
    fn test_move_down_keeps_column() {
        let mut buf = EditorBuffer::from_text("abc\nxyz");
        buf.move_cursor(Direction::Up);
        buf.move_cursor(Direction::Left);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.position(), (1, 2));
    }

    #[test]
    fn test_move_end_on_first_line() {
        let mut buf = EditorBuffer::from_text("abc\nxy");
        buf.move_cursor(Direction::Up);
        buf.move_home(false);
        buf.move_end(false);
        assert_eq!(buf.position(), (0, 3));
    }
}
