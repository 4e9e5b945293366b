use super::mode::{Mode, ModeContext, ModeKind, ModeResult};
use crate::commands::CommandExecutor;
use crate::document_model::Buffer;
use crate::input::Key;

/// Command mode: a one-line editor for `:` commands
pub struct CommandMode {
    command_line: String,
    message: String,
    executor: CommandExecutor,
}

impl Default for CommandMode {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandMode {
    pub fn new() -> Self {
        Self::with_executor(CommandExecutor::new())
    }

    pub fn with_executor(executor: CommandExecutor) -> Self {
        Self {
            command_line: String::new(),
            message: String::new(),
            executor,
        }
    }

    /// The line as displayed, including the leading `:`
    pub fn command_line(&self) -> String {
        format!(":{}", self.command_line)
    }

    /// Message from the last executed command
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut CommandExecutor {
        &mut self.executor
    }
}

impl Mode for CommandMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Command
    }

    fn handle_key(&mut self, key: Key, ctx: &mut ModeContext) -> ModeResult {
        match key {
            Key::Char(c) => self.command_line.push(c),
            Key::Backspace => {
                self.command_line.pop();
            }
            Key::Enter => {
                if self.command_line.trim().is_empty() {
                    self.command_line.clear();
                    return ModeResult::switch(ModeKind::Normal);
                }

                let line = std::mem::take(&mut self.command_line);
                let result = self.executor.execute(&line, ctx.buffer, ctx.env);
                self.message = result.message;

                if result.exit_editor {
                    return ModeResult::exit();
                }
                if result.switch_mode {
                    return ModeResult::switch(ModeKind::Normal);
                }
            }
            Key::Escape => {
                self.command_line.clear();
                return ModeResult::switch(ModeKind::Normal);
            }
            key if key.is_interrupt() => {
                self.command_line.clear();
                return ModeResult::switch(ModeKind::Normal);
            }
            _ => return ModeResult::ignored(),
        }

        ModeResult::handled()
    }

    fn on_enter(&mut self, _buffer: &mut Buffer) {
        self.command_line.clear();
        self.message.clear();
    }

    fn status_text(&self) -> String {
        "-- COMMAND --".to_string()
    }
}
