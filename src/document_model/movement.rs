use super::buffer::{Buffer, Position};

// Cursor motions shared by Normal and Visual mode. They may leave the cursor
// on the end-of-line slot; Normal mode pulls it back with
// `clamp_cursor_to_char`.
impl Buffer {
    fn chars_of(&self, line: usize) -> Vec<char> {
        self.line(line).map(|text| text.chars().collect()).unwrap_or_default()
    }

    /// Pull the cursor back onto the last character of a non-empty line.
    pub fn clamp_cursor_to_char(&mut self) {
        let cursor = self.cursor();
        let len = self.line_len(cursor.line);
        if len > 0 && cursor.column >= len {
            self.set_cursor(Position::new(cursor.line, len - 1));
        }
    }

    // Word movement
    pub fn move_word_forward(&mut self) {
        let cursor = self.cursor();
        let chars = self.chars_of(cursor.line);
        let has_next_line = cursor.line + 1 < self.line_count();

        if cursor.column >= chars.len() {
            if has_next_line {
                self.set_cursor(Position::new(cursor.line + 1, 0));
            }
            return;
        }

        let mut col = cursor.column;
        // Skip the rest of the current word
        while col < chars.len() && !chars[col].is_whitespace() {
            col += 1;
        }
        // Skip inter-word space
        while col < chars.len() && chars[col].is_whitespace() {
            col += 1;
        }

        if col >= chars.len() && has_next_line {
            self.set_cursor(Position::new(cursor.line + 1, 0));
        } else {
            self.set_cursor(Position::new(cursor.line, col));
        }
    }

    pub fn move_word_backward(&mut self) {
        let cursor = self.cursor();

        if cursor.column == 0 {
            if cursor.line > 0 {
                let prev_len = self.line_len(cursor.line - 1);
                self.set_cursor(Position::new(cursor.line - 1, prev_len.saturating_sub(1)));
            }
            return;
        }

        let chars = self.chars_of(cursor.line);
        let mut col = cursor.column.min(chars.len());
        while col > 0 && chars[col - 1].is_whitespace() {
            col -= 1;
        }
        while col > 0 && !chars[col - 1].is_whitespace() {
            col -= 1;
        }

        self.set_cursor(Position::new(cursor.line, col));
    }

    pub fn move_word_end(&mut self) {
        let cursor = self.cursor();
        let chars = self.chars_of(cursor.line);

        let mut col = cursor.column + 1;
        while col < chars.len() && chars[col].is_whitespace() {
            col += 1;
        }

        if col >= chars.len() {
            // Ran off the line: end of the first word on the next line
            if cursor.line + 1 < self.line_count() {
                let next = self.chars_of(cursor.line + 1);
                let mut col = 0;
                while col < next.len() && next[col].is_whitespace() {
                    col += 1;
                }
                while col < next.len() && !next[col].is_whitespace() {
                    col += 1;
                }
                self.set_cursor(Position::new(cursor.line + 1, col.saturating_sub(1)));
            }
            return;
        }

        while col < chars.len() && !chars[col].is_whitespace() {
            col += 1;
        }
        self.set_cursor(Position::new(cursor.line, col - 1));
    }

    // Line movement
    pub fn move_line_start(&mut self) {
        let line = self.cursor().line;
        self.set_cursor(Position::new(line, 0));
    }

    /// Cursor to the end-of-line slot (after the last character).
    pub fn move_line_end(&mut self) {
        let line = self.cursor().line;
        self.set_cursor(Position::new(line, self.line_len(line)));
    }

    pub fn move_first_non_blank(&mut self) {
        let line = self.cursor().line;
        let col = self
            .chars_of(line)
            .iter()
            .position(|c| !c.is_whitespace())
            .unwrap_or(0);
        self.set_cursor(Position::new(line, col));
    }

    // Document movement
    pub fn move_document_start(&mut self) {
        self.set_cursor(Position::new(0, 0));
    }

    pub fn move_document_end(&mut self) {
        let last = self.line_count() - 1;
        self.set_cursor(Position::new(last, 0));
    }
}
