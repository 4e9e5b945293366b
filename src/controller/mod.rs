/// Controller subsystem - The modal state machine
///
/// Each mode handles keys against the buffer on its own; [`ModeManager`]
/// owns them all, routes input to the active one and runs the enter/exit
/// hooks when a mode asks for a switch.
pub mod command;
pub mod insert;
pub mod manager;
pub mod mode;
pub mod normal;
pub mod visual;

pub use command::CommandMode;
pub use insert::InsertMode;
pub use manager::ModeManager;
pub use mode::{Mode, ModeContext, ModeKind, ModeResult};
pub use normal::NormalMode;
pub use visual::VisualMode;
