use super::mode::{Mode, ModeContext, ModeKind, ModeResult, ignore_boundary};
use crate::document_model::Buffer;
use crate::input::Key;
use log::{debug, info, warn};

/// Insert mode: keys are typed into the buffer at the cursor.
#[derive(Debug, Default)]
pub struct InsertMode;

impl InsertMode {
    pub fn new() -> Self {
        Self
    }

    fn save(buffer: &mut Buffer) {
        if buffer.filename().is_none() {
            debug!("ctrl-s ignored: buffer has no file name");
            return;
        }
        match buffer.save() {
            Ok(bytes) => info!("saved {bytes} bytes from insert mode"),
            Err(e) => warn!("save from insert mode failed: {e}"),
        }
    }
}

impl Mode for InsertMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Insert
    }

    fn handle_key(&mut self, key: Key, ctx: &mut ModeContext) -> ModeResult {
        let buffer = &mut *ctx.buffer;

        match key {
            Key::Char(c) => ignore_boundary(buffer.insert_char(c)),
            Key::Enter => ignore_boundary(buffer.insert_line()),
            Key::Backspace => ignore_boundary(buffer.backspace()),
            Key::Delete => ignore_boundary(buffer.delete_char()),
            Key::Tab => {
                let settings = &ctx.env.settings;
                if settings.expand_tab {
                    ignore_boundary(buffer.insert_str(&" ".repeat(settings.tab_stop)));
                } else {
                    ignore_boundary(buffer.insert_char('\t'));
                }
            }

            Key::Left => buffer.move_cursor(0, -1),
            Key::Right => buffer.move_cursor(0, 1),
            Key::Up => buffer.move_cursor(-1, 0),
            Key::Down => buffer.move_cursor(1, 0),
            Key::Home => buffer.move_line_start(),
            Key::End => buffer.move_line_end(),

            Key::Ctrl('s') => Self::save(buffer),
            Key::Escape => return ModeResult::switch(ModeKind::Normal),
            key if key.is_interrupt() => return ModeResult::switch(ModeKind::Normal),
            _ => return ModeResult::ignored(),
        }

        ModeResult::handled()
    }

    fn on_exit(&mut self, buffer: &mut Buffer) {
        buffer.clamp_cursor_to_char();
    }

    fn status_text(&self) -> String {
        "-- INSERT --".to_string()
    }
}
