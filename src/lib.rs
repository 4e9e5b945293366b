//! Modal editing core: a text buffer, an Ex command subsystem and the
//! Normal/Insert/Visual/Command state machine that drives them.
//!
//! Rendering and terminal handling stay with the caller, which feeds
//! [`Key`]s to a [`ModeManager`] and redraws from the [`Buffer`].

pub mod commands;
pub mod config;
pub mod controller;
pub mod document_model;
pub mod input;

pub use commands::{Command, CommandExecutor, CommandRegistry, CommandResult, Environment};
pub use config::{RcLoader, Settings};
pub use controller::{Mode, ModeKind, ModeManager, ModeResult};
pub use document_model::{Buffer, BufferError, Position};
pub use input::Key;
