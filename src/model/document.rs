//! In-memory document text owned by a single tab
//!
//! `DocumentBuffer` is the editable text region shown for one tab. It keeps
//! the text as lines split on `\n` so that joining them back reproduces the
//! loaded content byte-for-byte (trailing newlines and `\r` are preserved).
//!
//! Provides:
//! - Cursor navigation (arrows, home/end, word, page, document start/end)
//! - Selection support (Shift+arrows, Ctrl+A)
//! - Insert/delete operations

/// Editable text for one document
#[derive(Debug, Clone)]
pub struct DocumentBuffer {
    /// Lines of text, without their `\n` terminators
    lines: Vec<String>,
    /// Current cursor row (0-indexed)
    cursor_row: usize,
    /// Current cursor column (0-indexed, in bytes)
    cursor_col: usize,
    /// Selection anchor position (row, col) - for Shift+Arrow selection
    selection_anchor: Option<(usize, usize)>,
}

impl Default for DocumentBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
            selection_anchor: None,
        }
    }

    /// Create a buffer seeded with `text`
    pub fn with_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_content(text);
        buffer
    }

    /// Full text of the buffer, exactly as it would be written to disk
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the whole text, resetting cursor and selection
    pub fn set_content(&mut self, text: &str) {
        self.lines = text.split('\n').map(String::from).collect();
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.selection_anchor = None;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cursor as (row, byte column)
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Whether the buffer holds no text at all
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn current_line_len(&self) -> usize {
        self.lines
            .get(self.cursor_row)
            .map(|l| l.len())
            .unwrap_or(0)
    }

    // ========================================================================
    // Cursor movement (clears selection)
    // ========================================================================

    pub fn move_left(&mut self) {
        self.clear_selection();
        self.move_left_internal();
    }

    fn move_left_internal(&mut self) {
        if self.cursor_col > 0 {
            let line = &self.lines[self.cursor_row];
            self.cursor_col = prev_char_boundary(line, self.cursor_col);
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].len();
        }
    }

    pub fn move_right(&mut self) {
        self.clear_selection();
        self.move_right_internal();
    }

    fn move_right_internal(&mut self) {
        if self.cursor_col < self.current_line_len() {
            let line = &self.lines[self.cursor_row];
            self.cursor_col = next_char_boundary(line, self.cursor_col);
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_up(&mut self) {
        self.clear_selection();
        self.move_vertical(-1);
    }

    pub fn move_down(&mut self) {
        self.clear_selection();
        self.move_vertical(1);
    }

    pub fn move_page_up(&mut self, page_height: usize) {
        self.clear_selection();
        self.move_vertical(-(page_height.max(1) as isize));
    }

    pub fn move_page_down(&mut self, page_height: usize) {
        self.clear_selection();
        self.move_vertical(page_height.max(1) as isize);
    }

    fn move_vertical(&mut self, delta: isize) {
        let last_row = self.lines.len() - 1;
        let target = (self.cursor_row as isize + delta).clamp(0, last_row as isize) as usize;
        if target == self.cursor_row {
            return;
        }
        self.cursor_row = target;
        self.clamp_col_to_line();
    }

    /// Keep the column inside the line and on a char boundary
    fn clamp_col_to_line(&mut self) {
        let line = &self.lines[self.cursor_row];
        let mut col = self.cursor_col.min(line.len());
        while col > 0 && !line.is_char_boundary(col) {
            col -= 1;
        }
        self.cursor_col = col;
    }

    pub fn move_home(&mut self) {
        self.clear_selection();
        self.cursor_col = 0;
    }

    pub fn move_end(&mut self) {
        self.clear_selection();
        self.cursor_col = self.current_line_len();
    }

    pub fn move_document_start(&mut self) {
        self.clear_selection();
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    pub fn move_document_end(&mut self) {
        self.clear_selection();
        self.cursor_row = self.lines.len() - 1;
        self.cursor_col = self.current_line_len();
    }

    pub fn move_word_left(&mut self) {
        self.clear_selection();
        self.move_word_left_internal();
    }

    fn move_word_left_internal(&mut self) {
        if self.cursor_col > 0 {
            let line = &self.lines[self.cursor_row];
            self.cursor_col = find_word_start(line, self.cursor_col);
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].len();
        }
    }

    pub fn move_word_right(&mut self) {
        self.clear_selection();
        self.move_word_right_internal();
    }

    fn move_word_right_internal(&mut self) {
        if self.cursor_col < self.current_line_len() {
            let line = &self.lines[self.cursor_row];
            self.cursor_col = find_word_end(line, self.cursor_col);
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    // ========================================================================
    // Selection support
    // ========================================================================

    pub fn has_selection(&self) -> bool {
        self.selection_range().is_some()
    }

    /// Selection as ((start_row, start_col), (end_row, end_col)) in document order
    pub fn selection_range(&self) -> Option<((usize, usize), (usize, usize))> {
        let anchor = self.selection_anchor?;
        let cursor = (self.cursor_row, self.cursor_col);
        match anchor.cmp(&cursor) {
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Less => Some((anchor, cursor)),
            std::cmp::Ordering::Greater => Some((cursor, anchor)),
        }
    }

    pub fn selected_text(&self) -> Option<String> {
        let ((start_row, start_col), (end_row, end_col)) = self.selection_range()?;
        if start_row == end_row {
            return Some(self.lines[start_row][start_col..end_col].to_string());
        }
        let mut result = String::from(&self.lines[start_row][start_col..]);
        for row in (start_row + 1)..end_row {
            result.push('\n');
            result.push_str(&self.lines[row]);
        }
        result.push('\n');
        result.push_str(&self.lines[end_row][..end_col]);
        Some(result)
    }

    /// Delete the selection and return the removed text
    pub fn delete_selection(&mut self) -> Option<String> {
        let ((start_row, start_col), (end_row, end_col)) = self.selection_range()?;
        let deleted = self.selected_text()?;

        let tail = self.lines[end_row][end_col..].to_string();
        self.lines[start_row].truncate(start_col);
        self.lines[start_row].push_str(&tail);
        self.lines.drain((start_row + 1)..=end_row);

        self.cursor_row = start_row;
        self.cursor_col = start_col;
        self.selection_anchor = None;
        Some(deleted)
    }

    pub fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }

    fn ensure_anchor(&mut self) {
        if self.selection_anchor.is_none() {
            self.selection_anchor = Some((self.cursor_row, self.cursor_col));
        }
    }

    pub fn select_left(&mut self) {
        self.ensure_anchor();
        self.move_left_internal();
    }

    pub fn select_right(&mut self) {
        self.ensure_anchor();
        self.move_right_internal();
    }

    pub fn select_up(&mut self) {
        self.ensure_anchor();
        self.move_vertical(-1);
    }

    pub fn select_down(&mut self) {
        self.ensure_anchor();
        self.move_vertical(1);
    }

    pub fn select_home(&mut self) {
        self.ensure_anchor();
        self.cursor_col = 0;
    }

    pub fn select_end(&mut self) {
        self.ensure_anchor();
        self.cursor_col = self.current_line_len();
    }

    pub fn select_word_left(&mut self) {
        self.ensure_anchor();
        self.move_word_left_internal();
    }

    pub fn select_word_right(&mut self) {
        self.ensure_anchor();
        self.move_word_right_internal();
    }

    pub fn select_all(&mut self) {
        self.selection_anchor = Some((0, 0));
        self.cursor_row = self.lines.len() - 1;
        self.cursor_col = self.current_line_len();
    }

    // ========================================================================
    // Editing operations
    // ========================================================================

    /// Insert a character at the cursor, replacing any selection
    pub fn insert_char(&mut self, c: char) {
        if self.has_selection() {
            self.delete_selection();
        }
        self.selection_anchor = None;

        if c == '\n' {
            let rest = self.lines[self.cursor_row].split_off(self.cursor_col);
            self.lines.insert(self.cursor_row + 1, rest);
            self.cursor_row += 1;
            self.cursor_col = 0;
        } else {
            self.lines[self.cursor_row].insert(self.cursor_col, c);
            self.cursor_col += c.len_utf8();
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn backspace(&mut self) {
        if self.delete_selection().is_some() {
            return;
        }
        self.selection_anchor = None;

        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            let start = prev_char_boundary(line, self.cursor_col);
            line.drain(start..self.cursor_col);
            self.cursor_col = start;
        } else if self.cursor_row > 0 {
            let current = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].len();
            self.lines[self.cursor_row].push_str(&current);
        }
    }

    /// Delete the character under the cursor, joining lines at line end
    pub fn delete(&mut self) {
        if self.delete_selection().is_some() {
            return;
        }
        self.selection_anchor = None;

        if self.cursor_col < self.current_line_len() {
            let line = &mut self.lines[self.cursor_row];
            let end = next_char_boundary(line, self.cursor_col);
            line.drain(self.cursor_col..end);
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
        }
    }
}

fn prev_char_boundary(line: &str, col: usize) -> usize {
    let mut pos = col.saturating_sub(1);
    while pos > 0 && !line.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

fn next_char_boundary(line: &str, col: usize) -> usize {
    let mut pos = col + 1;
    while pos < line.len() && !line.is_char_boundary(pos) {
        pos += 1;
    }
    pos.min(line.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `col` (skipping separators first)
fn find_word_start(line: &str, col: usize) -> usize {
    let before = &line[..col];
    let mut chars = before.char_indices().rev().peekable();
    while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}
    let mut start = chars.peek().map(|(i, c)| i + c.len_utf8()).unwrap_or(0);
    for (i, c) in chars {
        if !is_word_char(c) {
            break;
        }
        start = i;
    }
    start
}

/// End of the word at or after `col` (skipping separators first)
fn find_word_end(line: &str, col: usize) -> usize {
    let mut chars = line[col..].char_indices().peekable();
    while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}
    let mut end = chars.peek().map(|(i, _)| col + i).unwrap_or(line.len());
    for (i, c) in chars {
        if !is_word_char(c) {
            break;
        }
        end = col + i + c.len_utf8();
    }
    end
}
