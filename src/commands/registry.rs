use super::environment::Environment;
use crate::document_model::Buffer;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

/// Outcome of running an ex command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub message: String,
    pub exit_editor: bool,
    pub switch_mode: bool,
}

impl CommandResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ..Self::default()
        }
    }

    /// Success that ends the editing session.
    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            exit_editor: true,
            switch_mode: false,
        }
    }
}

/// A named ex command (`:write`, `:q!`, ...).
pub trait Command {
    /// Canonical name, e.g. `write`
    fn name(&self) -> &str;

    /// Alternative spellings, e.g. `w`
    fn aliases(&self) -> &[&str] {
        &[]
    }

    fn help(&self) -> &str;

    fn execute(&self, args: &[String], buffer: &mut Buffer, env: &mut Environment) -> CommandResult;
}

/// Lookup table from every name and alias to its command.
///
/// Entries are stored per key: registering a command whose name or alias
/// collides with an existing key replaces only that key.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Rc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in file, session and settings commands.
    pub fn with_builtins() -> Self {
        use super::file_commands::*;
        use super::settings_commands::SetCommand;

        let mut registry = Self::new();
        registry.register(WriteCommand);
        registry.register(QuitCommand);
        registry.register(ForceQuitCommand);
        registry.register(WriteQuitCommand);
        registry.register(EditCommand { force: false });
        registry.register(EditCommand { force: true });
        registry.register(NewCommand);
        registry.register(SetCommand);
        registry
    }

    pub fn register(&mut self, command: impl Command + 'static) {
        let command: Rc<dyn Command> = Rc::new(command);

        self.commands.insert(command.name().to_string(), Rc::clone(&command));
        for alias in command.aliases() {
            self.commands.insert(alias.to_string(), Rc::clone(&command));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Rc<dyn Command>> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Canonical names of every reachable command, sorted.
    pub fn list_commands(&self) -> Vec<String> {
        self.commands
            .values()
            .map(|command| command.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn help_for(&self, name: &str) -> Option<&str> {
        self.get(name).map(|command| command.help())
    }
}
