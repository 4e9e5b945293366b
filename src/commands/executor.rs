use super::environment::Environment;
use super::parser;
use super::registry::{CommandRegistry, CommandResult};
use crate::document_model::Buffer;
use log::{debug, warn};

/// Parses command lines and dispatches them through a [`CommandRegistry`].
pub struct CommandExecutor {
    registry: CommandRegistry,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self::with_registry(CommandRegistry::with_builtins())
    }

    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Runs one command line. Every result that does not exit the editor
    /// hands control back to Normal mode.
    pub fn execute(&self, line: &str, buffer: &mut Buffer, env: &mut Environment) -> CommandResult {
        let parsed = match parser::parse(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                return CommandResult {
                    message: format!("Error: {e}"),
                    switch_mode: true,
                    ..CommandResult::default()
                };
            }
        };

        let Some(command) = self.registry.get(&parsed.name) else {
            warn!("unknown command: {}", parsed.name);
            return CommandResult {
                message: format!("Unknown command: {}", parsed.name),
                switch_mode: true,
                ..CommandResult::default()
            };
        };

        debug!("executing :{} {:?}", command.name(), parsed.args);
        let mut result = command.execute(&parsed.args, buffer, env);
        if !result.exit_editor {
            result.switch_mode = true;
        }
        result
    }
}
