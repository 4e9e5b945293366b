/// Configuration subsystem - Editor settings and preferences
///
/// This module parses rc-style settings text into [`Settings`], which the
/// command environment carries and the `:set` command edits at runtime.
pub mod rc;

// Re-export public interface
pub use rc::{RcLoader, Settings};
