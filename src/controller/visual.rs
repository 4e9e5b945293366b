use super::mode::{Mode, ModeContext, ModeKind, ModeResult};
use crate::document_model::{Buffer, Position};
use crate::input::Key;
use log::debug;

/// Visual mode: character-wise selection from the anchor to the cursor,
/// both ends inclusive.
#[derive(Debug, Default)]
pub struct VisualMode {
    anchor: Position,
    last_yank: Option<String>,
}

impl VisualMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Selected span as ordered `(start, end)`.
    pub fn selection(&self, buffer: &Buffer) -> (Position, Position) {
        let cursor = buffer.cursor();
        if self.anchor <= cursor {
            (self.anchor, cursor)
        } else {
            (cursor, self.anchor)
        }
    }

    /// Text copied by the most recent `y`
    pub fn last_yank(&self) -> Option<&str> {
        self.last_yank.as_deref()
    }
}

impl Mode for VisualMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Visual
    }

    fn handle_key(&mut self, key: Key, ctx: &mut ModeContext) -> ModeResult {
        let buffer = &mut *ctx.buffer;

        match key {
            Key::Char('h') | Key::Left => buffer.move_cursor(0, -1),
            Key::Char('l') | Key::Right => buffer.move_cursor(0, 1),
            Key::Char('j') | Key::Down => buffer.move_cursor(1, 0),
            Key::Char('k') | Key::Up => buffer.move_cursor(-1, 0),
            Key::Char('0') | Key::Home => buffer.move_line_start(),
            Key::Char('$') | Key::End => buffer.move_line_end(),
            Key::Char('w') => buffer.move_word_forward(),
            Key::Char('b') => buffer.move_word_backward(),
            Key::Char('e') => buffer.move_word_end(),

            Key::Char('d') | Key::Char('x') => {
                let (start, end) = self.selection(buffer);
                let removed = buffer.delete_span(start, end);
                debug!("visual delete removed {} chars", removed.chars().count());
                return ModeResult::switch(ModeKind::Normal);
            }
            Key::Char('y') => {
                let (start, end) = self.selection(buffer);
                self.last_yank = Some(buffer.text_in(start, end));
                buffer.set_cursor(start);
                return ModeResult::switch(ModeKind::Normal);
            }
            Key::Char('i') => return ModeResult::switch(ModeKind::Insert),

            Key::Escape => return ModeResult::switch(ModeKind::Normal),
            key if key.is_interrupt() => return ModeResult::switch(ModeKind::Normal),
            _ => return ModeResult::ignored(),
        }

        ModeResult::handled()
    }

    fn on_enter(&mut self, buffer: &mut Buffer) {
        self.anchor = buffer.cursor();
    }

    fn status_text(&self) -> String {
        "-- VISUAL --".to_string()
    }
}
