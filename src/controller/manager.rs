use super::command::CommandMode;
use super::insert::InsertMode;
use super::mode::{Mode, ModeContext, ModeKind, ModeResult};
use super::normal::NormalMode;
use super::visual::VisualMode;
use crate::commands::{CommandExecutor, Environment};
use crate::config::Settings;
use crate::document_model::{Buffer, Position};
use crate::input::Key;
use log::debug;

/// Owns the four modes and routes keys to the active one
pub struct ModeManager {
    current: ModeKind,
    normal: NormalMode,
    insert: InsertMode,
    visual: VisualMode,
    command: CommandMode,
    env: Environment,
}

impl Default for ModeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeManager {
    pub fn new() -> Self {
        Self::with_environment(Environment::default())
    }

    pub fn with_environment(env: Environment) -> Self {
        Self::with_executor(env, CommandExecutor::new())
    }

    pub fn with_executor(env: Environment, executor: CommandExecutor) -> Self {
        Self {
            current: ModeKind::Normal,
            normal: NormalMode::new(),
            insert: InsertMode::new(),
            visual: VisualMode::new(),
            command: CommandMode::with_executor(executor),
            env,
        }
    }

    fn mode_mut(&mut self, kind: ModeKind) -> &mut dyn Mode {
        match kind {
            ModeKind::Normal => &mut self.normal,
            ModeKind::Insert => &mut self.insert,
            ModeKind::Visual => &mut self.visual,
            ModeKind::Command => &mut self.command,
        }
    }

    fn mode(&self, kind: ModeKind) -> &dyn Mode {
        match kind {
            ModeKind::Normal => &self.normal,
            ModeKind::Insert => &self.insert,
            ModeKind::Visual => &self.visual,
            ModeKind::Command => &self.command,
        }
    }

    /// Feed one key to the active mode and apply any transition it asks for.
    pub fn handle_key(&mut self, key: Key, buffer: &mut Buffer) -> ModeResult {
        let current = self.current;
        let mut ctx = ModeContext::new(buffer, &mut self.env);
        let result = match current {
            ModeKind::Normal => self.normal.handle_key(key, &mut ctx),
            ModeKind::Insert => self.insert.handle_key(key, &mut ctx),
            ModeKind::Visual => self.visual.handle_key(key, &mut ctx),
            ModeKind::Command => self.command.handle_key(key, &mut ctx),
        };

        if let Some(target) = result.switch_to {
            self.switch_to(target, buffer);
        }
        result
    }

    /// Run the exit hook of the current mode and the enter hook of `kind`.
    pub fn switch_to(&mut self, kind: ModeKind, buffer: &mut Buffer) {
        let from = self.current;
        self.mode_mut(from).on_exit(buffer);
        self.current = kind;
        self.mode_mut(kind).on_enter(buffer);
        debug!("mode {from} -> {kind}");
    }

    pub fn current_kind(&self) -> ModeKind {
        self.current
    }

    pub fn status_text(&self) -> String {
        self.mode(self.current).status_text()
    }

    pub fn command_line(&self) -> String {
        self.command.command_line()
    }

    /// Last command message; stays visible after returning to Normal
    pub fn message(&self) -> &str {
        self.command.message()
    }

    /// Ordered selection span while Visual mode is active
    pub fn selection(&self, buffer: &Buffer) -> Option<(Position, Position)> {
        (self.current == ModeKind::Visual).then(|| self.visual.selection(buffer))
    }

    pub fn last_yank(&self) -> Option<&str> {
        self.visual.last_yank()
    }

    pub fn settings(&self) -> &Settings {
        &self.env.settings
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }
}
