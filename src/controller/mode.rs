use crate::commands::Environment;
use crate::document_model::{Buffer, BufferError};
use crate::input::Key;
use log::{debug, warn};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeKind {
    #[default]
    Normal,
    Insert,
    Visual,
    Command,
}

impl ModeKind {
    pub fn name(self) -> &'static str {
        match self {
            ModeKind::Normal => "NORMAL",
            ModeKind::Insert => "INSERT",
            ModeKind::Visual => "VISUAL",
            ModeKind::Command => "COMMAND",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of handing one key to a mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeResult {
    pub handled: bool,
    pub switch_to: Option<ModeKind>,
    pub exit_editor: bool,
}

impl ModeResult {
    pub fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }

    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn switch(kind: ModeKind) -> Self {
        Self {
            handled: true,
            switch_to: Some(kind),
            exit_editor: false,
        }
    }

    pub fn exit() -> Self {
        Self {
            handled: true,
            switch_to: None,
            exit_editor: true,
        }
    }
}

/// Everything a mode may touch while handling one key
pub struct ModeContext<'a> {
    pub buffer: &'a mut Buffer,
    pub env: &'a mut Environment,
}

impl<'a> ModeContext<'a> {
    pub fn new(buffer: &'a mut Buffer, env: &'a mut Environment) -> Self {
        Self { buffer, env }
    }
}

/// Trait that all editing modes implement
pub trait Mode {
    fn kind(&self) -> ModeKind;

    fn handle_key(&mut self, key: Key, ctx: &mut ModeContext) -> ModeResult;

    fn on_enter(&mut self, _buffer: &mut Buffer) {}

    fn on_exit(&mut self, _buffer: &mut Buffer) {}

    /// Short label for the status line
    fn status_text(&self) -> String;
}

/// Buffer edits that hit a boundary make the key a no-op.
pub(crate) fn ignore_boundary(result: Result<(), BufferError>) {
    match result {
        Err(e) if e.is_precondition() => debug!("key ignored: {e}"),
        Err(e) => warn!("edit failed: {e}"),
        Ok(()) => {}
    }
}
