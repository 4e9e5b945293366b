/// Command subsystem - Ex command registry, parsing and execution
///
/// Command mode hands the typed line to [`CommandExecutor`], which looks the
/// name up in a [`CommandRegistry`] and runs it against the buffer.
pub mod environment;
pub mod executor;
pub mod file_commands;
pub mod parser;
pub mod registry;
pub mod settings_commands;

pub use environment::Environment;
pub use executor::CommandExecutor;
pub use parser::{ParseError, ParsedCommand, parse};
pub use registry::{Command, CommandRegistry, CommandResult};
