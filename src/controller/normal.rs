use super::mode::{Mode, ModeContext, ModeKind, ModeResult, ignore_boundary};
use crate::document_model::Buffer;
use crate::input::Key;
use log::debug;

/// Normal mode: motions, single-key edits and the entry points to the
/// other modes. Never leaves the cursor on the end-of-line slot.
#[derive(Debug, Default)]
pub struct NormalMode {
    // First key of a two-key sequence (`gg`, `dd`)
    pending: Option<char>,
}

impl NormalMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<char> {
        self.pending
    }

    fn handle_pending(&mut self, prefix: char, key: Key, buffer: &mut Buffer) -> Option<ModeResult> {
        match (prefix, key) {
            ('g', Key::Char('g')) => buffer.move_document_start(),
            ('d', Key::Char('d')) => {
                ignore_boundary(buffer.delete_line());
                buffer.clamp_cursor_to_char();
            }
            (_, Key::Char(c)) => debug!("unknown sequence {prefix}{c}"),
            // Anything else is handled as if no prefix had been typed
            _ => return None,
        }
        Some(ModeResult::handled())
    }
}

impl Mode for NormalMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Normal
    }

    fn handle_key(&mut self, key: Key, ctx: &mut ModeContext) -> ModeResult {
        let buffer = &mut *ctx.buffer;

        if let Some(prefix) = self.pending.take() {
            if let Some(result) = self.handle_pending(prefix, key, buffer) {
                return result;
            }
        }

        match key {
            // Character motions
            Key::Char('h') | Key::Left => buffer.move_cursor(0, -1),
            Key::Char('l') | Key::Right => {
                let cursor = buffer.cursor();
                if cursor.column + 1 < buffer.line_len(cursor.line) {
                    buffer.move_cursor(0, 1);
                }
            }
            Key::Char('j') | Key::Down => {
                buffer.move_cursor(1, 0);
                buffer.clamp_cursor_to_char();
            }
            Key::Char('k') | Key::Up => {
                buffer.move_cursor(-1, 0);
                buffer.clamp_cursor_to_char();
            }

            // Line motions
            Key::Char('0') | Key::Home => buffer.move_line_start(),
            Key::Char('$') | Key::End => {
                buffer.move_line_end();
                buffer.clamp_cursor_to_char();
            }
            Key::Char('^') => buffer.move_first_non_blank(),

            // Word motions
            Key::Char('w') => {
                buffer.move_word_forward();
                buffer.clamp_cursor_to_char();
            }
            Key::Char('b') => buffer.move_word_backward(),
            Key::Char('e') => {
                buffer.move_word_end();
                buffer.clamp_cursor_to_char();
            }

            Key::Char('G') => buffer.move_document_end(),
            Key::Char(c @ ('g' | 'd')) => self.pending = Some(c),

            // Edits
            Key::Char('x') | Key::Delete => {
                ignore_boundary(buffer.delete_char());
                buffer.clamp_cursor_to_char();
            }
            Key::Char('X') => {
                // Never joins with the previous line
                if buffer.cursor().column > 0 {
                    ignore_boundary(buffer.backspace());
                }
            }
            Key::Char('J') => {
                ignore_boundary(buffer.join_lines());
                buffer.clamp_cursor_to_char();
            }

            // Mode switches
            Key::Char('i') => return ModeResult::switch(ModeKind::Insert),
            Key::Char('a') => {
                buffer.move_cursor(0, 1);
                return ModeResult::switch(ModeKind::Insert);
            }
            Key::Char('I') => {
                buffer.move_first_non_blank();
                return ModeResult::switch(ModeKind::Insert);
            }
            Key::Char('A') => {
                buffer.move_line_end();
                return ModeResult::switch(ModeKind::Insert);
            }
            Key::Char('o') => {
                buffer.move_line_end();
                ignore_boundary(buffer.insert_line());
                return ModeResult::switch(ModeKind::Insert);
            }
            Key::Char('O') => {
                buffer.move_line_start();
                ignore_boundary(buffer.insert_empty_line());
                return ModeResult::switch(ModeKind::Insert);
            }
            Key::Char('v') => return ModeResult::switch(ModeKind::Visual),
            Key::Char(':') => return ModeResult::switch(ModeKind::Command),

            Key::Escape => {}
            key if key.is_interrupt() => return ModeResult::exit(),
            _ => return ModeResult::ignored(),
        }

        ModeResult::handled()
    }

    fn on_enter(&mut self, buffer: &mut Buffer) {
        self.pending = None;
        buffer.clamp_cursor_to_char();
    }

    fn status_text(&self) -> String {
        self.pending.map(String::from).unwrap_or_default()
    }
}
