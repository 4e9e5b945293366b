/// Document model subsystem - Text storage and cursor semantics
///
/// The buffer owns the lines of the document and the cursor, and knows
/// nothing about modes or commands.
pub mod buffer;
pub mod error;
pub mod movement;

// Re-export main types for convenience
pub use buffer::{Buffer, Position};
pub use error::BufferError;
