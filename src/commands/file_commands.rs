use super::environment::Environment;
use super::registry::{Command, CommandResult};
use crate::document_model::{Buffer, BufferError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const UNSAVED_CHANGES: &str = "No write since last change (add ! to override)";

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

/// `:w [file]` - write the buffer, optionally under a new name
pub struct WriteCommand;

impl Command for WriteCommand {
    fn name(&self) -> &str {
        "write"
    }

    fn aliases(&self) -> &[&str] {
        &["w"]
    }

    fn help(&self) -> &str {
        ":w [filename] - Write buffer to file"
    }

    fn execute(&self, args: &[String], buffer: &mut Buffer, _env: &mut Environment) -> CommandResult {
        let written = match args.first() {
            Some(filename) => buffer.save_as(filename),
            None => buffer.save(),
        };

        match written {
            Ok(bytes) => {
                let filename = buffer.filename().map(display_name).unwrap_or_default();
                CommandResult::ok(format!("\"{filename}\" {bytes}B written"))
            }
            Err(BufferError::NoFilename) => CommandResult::fail("No file name"),
            Err(e) => CommandResult::fail(format!("Error writing file: {e}")),
        }
    }
}

/// `:q` - quit unless there are unsaved changes
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn aliases(&self) -> &[&str] {
        &["q"]
    }

    fn help(&self) -> &str {
        ":q - Quit editor (fails if unsaved changes)"
    }

    fn execute(&self, _args: &[String], buffer: &mut Buffer, _env: &mut Environment) -> CommandResult {
        if buffer.is_modified() {
            return CommandResult::fail(
                "No write since last change (use :q! to force quit or :wq to save and quit)",
            );
        }
        CommandResult::exit("")
    }
}

/// `:q!` - quit, discarding changes
pub struct ForceQuitCommand;

impl Command for ForceQuitCommand {
    fn name(&self) -> &str {
        "quit!"
    }

    fn aliases(&self) -> &[&str] {
        &["q!"]
    }

    fn help(&self) -> &str {
        ":q! - Quit editor, discarding unsaved changes"
    }

    fn execute(&self, _args: &[String], _buffer: &mut Buffer, _env: &mut Environment) -> CommandResult {
        CommandResult::exit("")
    }
}

/// `:wq [file]` - write, then quit if the write succeeded
pub struct WriteQuitCommand;

impl Command for WriteQuitCommand {
    fn name(&self) -> &str {
        "wq"
    }

    fn aliases(&self) -> &[&str] {
        &["x", "exit"]
    }

    fn help(&self) -> &str {
        ":wq [filename] - Write buffer and quit editor"
    }

    fn execute(&self, args: &[String], buffer: &mut Buffer, env: &mut Environment) -> CommandResult {
        let written = WriteCommand.execute(args, buffer, env);
        if !written.success {
            return written;
        }
        CommandResult::exit(written.message)
    }
}

/// `:e [file]` reloads or opens a file; `:e!` does so even with unsaved changes.
pub struct EditCommand {
    pub force: bool,
}

impl EditCommand {
    fn load(&self, path: PathBuf, buffer: &mut Buffer) -> CommandResult {
        match Buffer::from_file(&path) {
            Ok(loaded) => {
                let lines = loaded.line_count();
                buffer.replace_content(loaded);
                CommandResult::ok(format!("\"{}\" {lines}L", display_name(&path)))
            }
            Err(BufferError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                // Editing a file that does not exist yet starts a named empty buffer
                let mut fresh = Buffer::new();
                fresh.set_filename(&path);
                buffer.replace_content(fresh);
                CommandResult::ok(format!("\"{}\" [New File]", display_name(&path)))
            }
            Err(e) => CommandResult::fail(format!("Error reading file: {e}")),
        }
    }
}

impl Command for EditCommand {
    fn name(&self) -> &str {
        if self.force { "edit!" } else { "edit" }
    }

    fn aliases(&self) -> &[&str] {
        if self.force { &["e!"] } else { &["e"] }
    }

    fn help(&self) -> &str {
        if self.force {
            ":e! [filename] - Edit file, discarding unsaved changes"
        } else {
            ":e [filename] - Edit file (loads new file or reloads current)"
        }
    }

    fn execute(&self, args: &[String], buffer: &mut Buffer, _env: &mut Environment) -> CommandResult {
        if buffer.is_modified() && !self.force {
            return CommandResult::fail(UNSAVED_CHANGES);
        }

        let path = match args.first() {
            Some(filename) => PathBuf::from(filename),
            None => match buffer.filename() {
                Some(current) => current.to_path_buf(),
                None => return CommandResult::fail("No file name"),
            },
        };

        self.load(path, buffer)
    }
}

/// `:new` - replace the buffer with an empty, unnamed one
pub struct NewCommand;

impl Command for NewCommand {
    fn name(&self) -> &str {
        "new"
    }

    fn aliases(&self) -> &[&str] {
        &["enew"]
    }

    fn help(&self) -> &str {
        ":new - Start a new empty buffer"
    }

    fn execute(&self, _args: &[String], buffer: &mut Buffer, _env: &mut Environment) -> CommandResult {
        if buffer.is_modified() {
            return CommandResult::fail(UNSAVED_CHANGES);
        }
        buffer.clear();
        CommandResult::ok("[No Name]")
    }
}
