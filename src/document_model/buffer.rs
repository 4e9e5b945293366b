use super::error::BufferError;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthChar;

/// A character slot in the buffer. `column` counts characters, not bytes,
/// and may equal the line length (the slot after the last character).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Number of characters in `line`.
pub(crate) fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Byte offset of character index `column`, or `line.len()` past the end.
pub(crate) fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}

/// The document under edit: never-empty line storage plus a cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    lines: Vec<String>,
    cursor: Position,
    filename: Option<PathBuf>,
    modified: bool,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::default(),
            filename: None,
            modified: false,
        }
    }

    /// Builds an unmodified, unnamed buffer from existing lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }

        Self {
            lines,
            cursor: Position::default(),
            filename: None,
            modified: false,
        }
    }

    /// Splits `text` into lines. A trailing newline does not produce an
    /// extra empty line.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BufferError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BufferError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut buffer = Self::from_text(&content);
        buffer.filename = Some(path.to_path_buf());
        info!("loaded {} ({} lines)", path.display(), buffer.line_count());
        Ok(buffer)
    }

    /// Replaces the whole document, e.g. when a different file is edited.
    pub fn replace_content(&mut self, other: Buffer) {
        *self = other;
    }

    /// Resets to a new, empty, unnamed buffer.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line_num: usize) -> Result<&str, BufferError> {
        self.lines
            .get(line_num)
            .map(String::as_str)
            .ok_or(BufferError::LineOutOfRange {
                line: line_num,
                max: self.lines.len() - 1,
            })
    }

    /// Length of a line in characters; 0 for lines outside the buffer.
    pub fn line_len(&self, line_num: usize) -> usize {
        self.lines.get(line_num).map_or(0, |line| char_len(line))
    }

    pub fn current_line(&self) -> &str {
        self.lines.get(self.cursor.line).map_or("", String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: impl Into<PathBuf>) {
        self.filename = Some(filename.into());
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Terminal cell column of the cursor, expanding tabs to `tab_stop`.
    pub fn display_column(&self, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        self.current_line()
            .chars()
            .take(self.cursor.column)
            .fold(0, |cells, ch| match ch {
                '\t' => cells + tab_stop - cells % tab_stop,
                _ => cells + ch.width().unwrap_or(0),
            })
    }

    /// Clamps `pos` into the buffer and commits it as the cursor.
    pub fn set_cursor(&mut self, pos: Position) {
        let line = pos.line.min(self.lines.len() - 1);
        let column = pos.column.min(self.line_len(line));
        self.cursor = Position { line, column };
    }

    pub fn move_cursor(&mut self, delta_line: isize, delta_column: isize) {
        let line = self.cursor.line.saturating_add_signed(delta_line);
        let column = self.cursor.column.saturating_add_signed(delta_column);
        self.set_cursor(Position { line, column });
    }

    fn check_cursor(&self) -> Result<(), BufferError> {
        if self.cursor.line >= self.lines.len() {
            return Err(BufferError::LineOutOfRange {
                line: self.cursor.line,
                max: self.lines.len() - 1,
            });
        }

        let len = self.line_len(self.cursor.line);
        if self.cursor.column > len {
            return Err(BufferError::ColumnOutOfRange {
                column: self.cursor.column,
                len,
            });
        }

        Ok(())
    }

    pub fn insert_char(&mut self, ch: char) -> Result<(), BufferError> {
        if ch == '\n' {
            return self.insert_line();
        }
        self.check_cursor()?;

        let line = &mut self.lines[self.cursor.line];
        let offset = byte_offset(line, self.cursor.column);
        line.insert(offset, ch);

        self.cursor.column += 1;
        self.modified = true;
        Ok(())
    }

    /// Inserts `text` at the cursor, splitting lines on `\n`.
    pub fn insert_str(&mut self, text: &str) -> Result<(), BufferError> {
        for ch in text.chars() {
            self.insert_char(ch)?;
        }
        Ok(())
    }

    /// Removes the character under the cursor. The cursor does not move.
    pub fn delete_char(&mut self) -> Result<(), BufferError> {
        self.check_cursor()?;

        let line = &mut self.lines[self.cursor.line];
        if self.cursor.column >= char_len(line) {
            return Err(BufferError::NothingToDelete);
        }

        let offset = byte_offset(line, self.cursor.column);
        line.remove(offset);
        self.modified = true;
        Ok(())
    }

    pub fn backspace(&mut self) -> Result<(), BufferError> {
        self.check_cursor()?;

        if self.cursor.column == 0 {
            if self.cursor.line == 0 {
                return Err(BufferError::AtBufferStart);
            }

            // Merge onto the previous line
            let current = self.lines.remove(self.cursor.line);
            self.cursor.line -= 1;
            self.cursor.column = self.line_len(self.cursor.line);
            self.lines[self.cursor.line].push_str(&current);
            self.modified = true;
            return Ok(());
        }

        let line = &mut self.lines[self.cursor.line];
        let offset = byte_offset(line, self.cursor.column - 1);
        line.remove(offset);
        self.cursor.column -= 1;
        self.modified = true;
        Ok(())
    }

    /// Splits the current line at the cursor; the right part moves below.
    pub fn insert_line(&mut self) -> Result<(), BufferError> {
        self.check_cursor()?;

        let line = &mut self.lines[self.cursor.line];
        let offset = byte_offset(line, self.cursor.column);
        let right = line.split_off(offset);
        self.lines.insert(self.cursor.line + 1, right);

        self.cursor = Position::new(self.cursor.line + 1, 0);
        self.modified = true;
        Ok(())
    }

    /// Opens a blank line above the current one and parks the cursor on it.
    pub fn insert_empty_line(&mut self) -> Result<(), BufferError> {
        if self.cursor.line >= self.lines.len() {
            return Err(BufferError::LineOutOfRange {
                line: self.cursor.line,
                max: self.lines.len() - 1,
            });
        }

        self.lines.insert(self.cursor.line, String::new());
        self.cursor.column = 0;
        self.modified = true;
        Ok(())
    }

    pub fn delete_line(&mut self) -> Result<(), BufferError> {
        if self.lines.len() <= 1 {
            // The buffer keeps at least one line
            self.lines[0].clear();
            self.cursor = Position::default();
            self.modified = true;
            return Ok(());
        }

        if self.cursor.line >= self.lines.len() {
            return Err(BufferError::LineOutOfRange {
                line: self.cursor.line,
                max: self.lines.len() - 1,
            });
        }

        self.lines.remove(self.cursor.line);
        self.set_cursor(self.cursor);
        self.modified = true;
        Ok(())
    }

    /// Joins the next line onto the current one, separated by a single
    /// space when both sides have text.
    pub fn join_lines(&mut self) -> Result<(), BufferError> {
        let line = self.cursor.line;
        if line + 1 >= self.lines.len() {
            return Err(BufferError::NoNextLine { line });
        }

        let next = self.lines.remove(line + 1);
        let current = &mut self.lines[line];
        if !current.is_empty() && !next.is_empty() {
            current.push(' ');
        }
        current.push_str(&next);

        self.modified = true;
        Ok(())
    }

    /// Orders two positions and clamps them into the buffer.
    fn normalize_span(&self, a: Position, b: Position) -> (Position, Position) {
        let clamp = |pos: Position| {
            let line = pos.line.min(self.lines.len() - 1);
            Position::new(line, pos.column.min(self.line_len(line)))
        };
        let (a, b) = (clamp(a), clamp(b));
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Text of the inclusive span between `a` and `b`. A span ending on a
    /// line's end slot includes that line break.
    pub fn text_in(&self, a: Position, b: Position) -> String {
        let (start, end) = self.normalize_span(a, b);
        let mut text = String::new();

        for idx in start.line..=end.line {
            let line = &self.lines[idx];
            let len = char_len(line);
            let from = if idx == start.line { start.column } else { 0 };
            let to = if idx == end.line { (end.column + 1).min(len) } else { len };

            if from < to {
                text.push_str(&line[byte_offset(line, from)..byte_offset(line, to)]);
            }

            let takes_break = idx < end.line || (end.column >= len && idx + 1 < self.lines.len());
            if takes_break {
                text.push('\n');
            }
        }

        text
    }

    /// Removes the inclusive span between `a` and `b`, leaving the cursor
    /// at the span start. Returns the removed text.
    pub fn delete_span(&mut self, a: Position, b: Position) -> String {
        let (start, end) = self.normalize_span(a, b);
        let removed = self.text_in(start, end);
        if removed.is_empty() {
            self.set_cursor(start);
            return removed;
        }

        let end_len = self.line_len(end.line);
        let (last_line, tail) = if end.column < end_len {
            let line = &self.lines[end.line];
            (end.line, line[byte_offset(line, end.column + 1)..].to_string())
        } else if end.line + 1 < self.lines.len() {
            (end.line + 1, self.lines[end.line + 1].clone())
        } else {
            (end.line, String::new())
        };

        let first = &mut self.lines[start.line];
        first.truncate(byte_offset(first, start.column));
        first.push_str(&tail);
        self.lines.drain(start.line + 1..=last_line);

        debug!("deleted span {:?}..={:?} ({} chars)", start, end, removed.chars().count());
        self.set_cursor(start);
        self.modified = true;
        removed
    }

    /// Writes to the buffer's filename. Returns the number of bytes written.
    pub fn save(&mut self) -> Result<usize, BufferError> {
        match self.filename.clone() {
            Some(filename) => self.save_as(filename),
            None => Err(BufferError::NoFilename),
        }
    }

    pub fn save_as(&mut self, filename: impl Into<PathBuf>) -> Result<usize, BufferError> {
        let filename = filename.into();
        if filename.as_os_str().is_empty() {
            return Err(BufferError::EmptyFilename);
        }

        let content = self.to_string();
        fs::write(&filename, &content).map_err(|source| BufferError::Io {
            path: filename.clone(),
            source,
        })?;

        info!("wrote {} bytes to {}", content.len(), filename.display());
        self.filename = Some(filename);
        self.modified = false;
        Ok(content.len())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_at(lines: &[&str], line: usize, column: usize) -> Buffer {
        let mut buffer = Buffer::from_lines(lines.iter().copied());
        buffer.set_cursor(Position::new(line, column));
        buffer
    }

    fn assert_cursor_invariant(buffer: &Buffer) {
        let cursor = buffer.cursor();
        assert!(buffer.line_count() >= 1);
        assert!(cursor.line < buffer.line_count());
        assert!(cursor.column <= buffer.line_len(cursor.line));
    }

    #[test]
    fn test_new_buffer() {
        let buffer = Buffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.current_line(), "");
        assert_eq!(buffer.cursor(), Position::new(0, 0));
        assert!(!buffer.is_modified());
        assert!(buffer.filename().is_none());
    }

    #[test]
    fn test_insert_hello() {
        let mut buffer = Buffer::new();
        for c in "hello".chars() {
            buffer.insert_char(c).unwrap();
        }
        assert_eq!(buffer.to_string(), "hello");
        assert_eq!(buffer.cursor(), Position::new(0, 5));
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_insert_multibyte() {
        let mut buffer = buffer_at(&["héllo"], 0, 2);
        buffer.insert_char('ü').unwrap();
        assert_eq!(buffer.current_line(), "héüllo");
        assert_eq!(buffer.cursor(), Position::new(0, 3));
        buffer.backspace().unwrap();
        assert_eq!(buffer.current_line(), "héllo");
    }

    #[test]
    fn test_insert_char_rejects_bad_cursor() {
        let mut buffer = buffer_at(&["abc"], 0, 0);
        buffer.cursor = Position::new(0, 9);
        assert!(matches!(
            buffer.insert_char('x'),
            Err(BufferError::ColumnOutOfRange { column: 9, len: 3 })
        ));
        buffer.cursor = Position::new(4, 0);
        assert!(matches!(buffer.insert_char('x'), Err(BufferError::LineOutOfRange { .. })));
    }

    #[test]
    fn test_insert_then_backspace_restores() {
        let mut buffer = buffer_at(&["abc", "def"], 1, 1);
        buffer.insert_char('Z').unwrap();
        buffer.backspace().unwrap();
        assert_eq!(buffer.lines(), &["abc", "def"]);
        assert_eq!(buffer.cursor(), Position::new(1, 1));
    }

    #[test]
    fn test_delete_char() {
        let mut buffer = buffer_at(&["abc"], 0, 1);
        buffer.delete_char().unwrap();
        assert_eq!(buffer.current_line(), "ac");
        assert_eq!(buffer.cursor(), Position::new(0, 1));
    }

    #[test]
    fn test_delete_char_at_line_end_fails() {
        let mut buffer = buffer_at(&["abc"], 0, 3);
        assert!(matches!(buffer.delete_char(), Err(BufferError::NothingToDelete)));
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_backspace_merges_lines() {
        let mut buffer = buffer_at(&["hello", "world"], 1, 0);
        buffer.backspace().unwrap();
        assert_eq!(buffer.lines(), &["helloworld"]);
        assert_eq!(buffer.cursor(), Position::new(0, 5));
    }

    #[test]
    fn test_backspace_at_buffer_start_fails() {
        let mut buffer = buffer_at(&["hello"], 0, 0);
        assert!(matches!(buffer.backspace(), Err(BufferError::AtBufferStart)));
    }

    #[test]
    fn test_insert_line_splits() {
        let mut buffer = buffer_at(&["hello"], 0, 2);
        buffer.insert_line().unwrap();
        assert_eq!(buffer.lines(), &["he", "llo"]);
        assert_eq!(buffer.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_split_then_join_restores() {
        let mut buffer = buffer_at(&["hello"], 0, 5);
        buffer.insert_line().unwrap();
        buffer.set_cursor(Position::new(0, 0));
        buffer.join_lines().unwrap();
        assert_eq!(buffer.lines(), &["hello"]);

        // Both halves non-empty: the join adds a separator
        let mut buffer = buffer_at(&["hello"], 0, 2);
        buffer.insert_line().unwrap();
        buffer.set_cursor(Position::new(0, 0));
        buffer.join_lines().unwrap();
        assert_eq!(buffer.lines(), &["he llo"]);
    }

    #[test]
    fn test_insert_empty_line_above() {
        let mut buffer = buffer_at(&["one", "two"], 1, 2);
        buffer.insert_empty_line().unwrap();
        assert_eq!(buffer.lines(), &["one", "", "two"]);
        assert_eq!(buffer.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_delete_line_clamps_cursor() {
        let mut buffer = buffer_at(&["first", "second", "x"], 2, 0);
        buffer.delete_line().unwrap();
        assert_eq!(buffer.lines(), &["first", "second"]);
        assert_eq!(buffer.cursor(), Position::new(1, 0));

        let mut buffer = buffer_at(&["longer line", "a"], 0, 8);
        buffer.delete_line().unwrap();
        assert_eq!(buffer.lines(), &["a"]);
        assert_eq!(buffer.cursor(), Position::new(0, 1));
        assert_cursor_invariant(&buffer);
    }

    #[test]
    fn test_delete_sole_line_clears() {
        let mut buffer = buffer_at(&["only"], 0, 3);
        buffer.delete_line().unwrap();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.current_line(), "");
        assert_eq!(buffer.cursor(), Position::new(0, 0));
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_join_lines_separator() {
        let mut buffer = buffer_at(&["", "text"], 0, 0);
        buffer.join_lines().unwrap();
        assert_eq!(buffer.lines(), &["text"]);

        let mut buffer = buffer_at(&["a", "b", "c"], 2, 0);
        assert!(matches!(buffer.join_lines(), Err(BufferError::NoNextLine { line: 2 })));
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut buffer = Buffer::from_lines(["abc", "de"]);
        buffer.set_cursor(Position::new(10, 10));
        assert_eq!(buffer.cursor(), Position::new(1, 2));
        buffer.move_cursor(-5, -5);
        assert_eq!(buffer.cursor(), Position::new(0, 0));
        buffer.move_cursor(0, 2);
        assert_eq!(buffer.cursor(), Position::new(0, 2));
    }

    #[test]
    fn test_cursor_invariant_over_sequence() {
        let mut buffer = buffer_at(&["alpha", "", "gamma delta"], 2, 11);
        assert_cursor_invariant(&buffer);
        let _ = buffer.delete_line();
        assert_cursor_invariant(&buffer);
        let _ = buffer.backspace();
        assert_cursor_invariant(&buffer);
        let _ = buffer.insert_line();
        assert_cursor_invariant(&buffer);
        let _ = buffer.join_lines();
        assert_cursor_invariant(&buffer);
        let _ = buffer.delete_line();
        let _ = buffer.delete_line();
        let _ = buffer.delete_line();
        assert_cursor_invariant(&buffer);
        assert_eq!(buffer.line_count(), 1);
    }

    fn sanitized(lines: Vec<String>) -> Buffer {
        Buffer::from_lines(lines.into_iter().map(|line| line.replace(['\n', '\r'], "")))
    }

    fn apply_op(buffer: &mut Buffer, (op, ch, a, b): (u8, char, usize, usize)) {
        let _ = match op % 11 {
            0 => buffer.insert_char(ch),
            1 => buffer.delete_char(),
            2 => buffer.backspace(),
            3 => buffer.insert_line(),
            4 => buffer.insert_empty_line(),
            5 => buffer.delete_line(),
            6 => buffer.join_lines(),
            7 => {
                buffer.set_cursor(Position::new(a % 8, b % 16));
                Ok(())
            }
            8 => {
                buffer.move_cursor((a % 5) as isize - 2, (b % 9) as isize - 4);
                Ok(())
            }
            9 => {
                buffer.delete_span(Position::new(a % 8, b % 16), buffer.cursor());
                Ok(())
            }
            _ => buffer.insert_str("ab\ncd"),
        };
    }

    quickcheck::quickcheck! {
        fn prop_cursor_invariant_holds(lines: Vec<String>, ops: Vec<(u8, char, usize, usize)>) -> bool {
            let mut buffer = sanitized(lines);
            ops.into_iter().all(|op| {
                apply_op(&mut buffer, op);
                let cursor = buffer.cursor();
                buffer.line_count() >= 1
                    && cursor.line < buffer.line_count()
                    && cursor.column <= buffer.line_len(cursor.line)
            })
        }

        fn prop_insert_then_backspace_restores(lines: Vec<String>, line: usize, column: usize, ch: char) -> bool {
            let ch = if ch == '\n' { 'x' } else { ch };
            let mut buffer = sanitized(lines);
            buffer.set_cursor(Position::new(line, column));
            let before = buffer.lines().to_vec();
            let cursor = buffer.cursor();

            buffer.insert_char(ch).is_ok()
                && buffer.backspace().is_ok()
                && buffer.lines() == before.as_slice()
                && buffer.cursor() == cursor
        }

        fn prop_split_then_join_restores(lines: Vec<String>, line: usize, column: usize) -> bool {
            let mut buffer = sanitized(lines);
            buffer.set_cursor(Position::new(line, column));
            let before = buffer.lines().to_vec();
            let cursor = buffer.cursor();
            let original = buffer.current_line().to_string();
            let split = byte_offset(&original, cursor.column);
            let (left, right) = original.split_at(split);

            buffer.insert_line().is_ok() && {
                buffer.move_cursor(-1, 0);
                buffer.join_lines().is_ok()
            } && {
                let expected = if left.is_empty() || right.is_empty() {
                    original.clone()
                } else {
                    format!("{left} {right}")
                };
                let mut restored = before.clone();
                restored[cursor.line] = expected;
                buffer.lines() == restored.as_slice()
            }
        }
    }

    #[test]
    fn test_line_out_of_range() {
        let buffer = Buffer::from_lines(["a"]);
        assert_eq!(buffer.line(0).unwrap(), "a");
        assert!(matches!(buffer.line(3), Err(BufferError::LineOutOfRange { line: 3, max: 0 })));
    }

    #[test]
    fn test_from_text_trailing_newline() {
        assert_eq!(Buffer::from_text("a\nb\n").lines(), &["a", "b"]);
        assert_eq!(Buffer::from_text("a\r\nb").lines(), &["a", "b"]);
        assert_eq!(Buffer::from_text("").lines(), &[""]);
    }

    #[test]
    fn test_display_column() {
        let buffer = buffer_at(&["\tab"], 0, 2);
        assert_eq!(buffer.display_column(4), 5);
        let buffer = buffer_at(&["日本語"], 0, 2);
        assert_eq!(buffer.display_column(4), 4);
    }

    #[test]
    fn test_text_in_single_line() {
        let buffer = Buffer::from_lines(["hello world"]);
        assert_eq!(buffer.text_in(Position::new(0, 6), Position::new(0, 10)), "world");
        // Order does not matter
        assert_eq!(buffer.text_in(Position::new(0, 4), Position::new(0, 0)), "hello");
    }

    #[test]
    fn test_text_in_multi_line() {
        let buffer = Buffer::from_lines(["abc", "def", "ghi"]);
        assert_eq!(buffer.text_in(Position::new(0, 1), Position::new(2, 0)), "bc\ndef\ng");
        assert_eq!(buffer.text_in(Position::new(0, 1), Position::new(0, 3)), "bc\n");
    }

    #[test]
    fn test_delete_span() {
        let mut buffer = Buffer::from_lines(["abc", "def", "ghi"]);
        let removed = buffer.delete_span(Position::new(2, 0), Position::new(0, 1));
        assert_eq!(removed, "bc\ndef\ng");
        assert_eq!(buffer.lines(), &["ahi"]);
        assert_eq!(buffer.cursor(), Position::new(0, 1));
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_delete_span_through_line_end() {
        let mut buffer = Buffer::from_lines(["abc", "def"]);
        let removed = buffer.delete_span(Position::new(0, 2), Position::new(0, 3));
        assert_eq!(removed, "c\n");
        assert_eq!(buffer.lines(), &["abdef"]);

        let mut buffer = Buffer::from_lines(["abc"]);
        buffer.delete_span(Position::new(0, 0), Position::new(0, 3));
        assert_eq!(buffer.lines(), &[""]);
        assert_cursor_invariant(&buffer);
    }

    #[test]
    fn test_save_without_filename() {
        let mut buffer = Buffer::new();
        assert!(matches!(buffer.save(), Err(BufferError::NoFilename)));
        assert!(matches!(buffer.save_as(""), Err(BufferError::EmptyFilename)));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut buffer = Buffer::from_lines(["first", "", "third"]);
        buffer.insert_char('>').unwrap();
        let bytes = buffer.save_as(&path).unwrap();
        assert_eq!(bytes, ">first\n\nthird".len());
        assert!(!buffer.is_modified());
        assert_eq!(buffer.filename(), Some(path.as_path()));

        let loaded = Buffer::from_file(&path).unwrap();
        assert_eq!(loaded.to_string(), buffer.to_string());
        assert!(!loaded.is_modified());
        assert_eq!(loaded.filename(), Some(path.as_path()));
    }

    #[test]
    fn test_save_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let mut buffer = Buffer::from_lines(["x"]);
        buffer.insert_char('y').unwrap();
        assert!(matches!(buffer.save_as(&path), Err(BufferError::Io { .. })));
        assert!(buffer.is_modified());
        assert!(buffer.filename().is_none());
    }

    #[test]
    fn test_from_file_rejects_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9\n").unwrap();

        match Buffer::from_file(&path) {
            Err(BufferError::Io { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("expected an invalid data error, got {other:?}"),
        }
    }
}
