use super::environment::Environment;
use super::registry::{Command, CommandResult};
use crate::config::RcLoader;
use crate::document_model::Buffer;

/// `:set [option...]` - change editor settings for the session
pub struct SetCommand;

impl Command for SetCommand {
    fn name(&self) -> &str {
        "set"
    }

    fn aliases(&self) -> &[&str] {
        &["se"]
    }

    fn help(&self) -> &str {
        ":set [option...] - Show or change settings (tabstop=N, [no]expandtab, [no]number, [no]list)"
    }

    fn execute(&self, args: &[String], _buffer: &mut Buffer, env: &mut Environment) -> CommandResult {
        // Validate everything first so a bad option leaves settings untouched
        let mut updated = env.settings.clone();
        for arg in args {
            if !RcLoader::apply_setting(arg, &mut updated) {
                return CommandResult::fail(format!("Unknown option: {arg}"));
            }
        }

        env.settings = updated;
        CommandResult::ok(env.settings.summary())
    }
}
