use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by [`Buffer`](super::Buffer) operations.
///
/// Range variants indicate a cursor that escaped the buffer bounds; the rest
/// are precondition failures that callers usually treat as a no-op key press.
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("line {line} out of range [0-{max}]")]
    LineOutOfRange { line: usize, max: usize },

    #[error("column {column} out of range for line length {len}")]
    ColumnOutOfRange { column: usize, len: usize },

    #[error("cannot delete at end of line")]
    NothingToDelete,

    #[error("cannot backspace at beginning of buffer")]
    AtBufferStart,

    #[error("cannot join line {line} (no next line)")]
    NoNextLine { line: usize },

    #[error("no filename set for buffer")]
    NoFilename,

    #[error("filename cannot be empty")]
    EmptyFilename,

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BufferError {
    /// True for the boundary conditions a mode handler is expected to swallow.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            BufferError::NothingToDelete | BufferError::AtBufferStart | BufferError::NoNextLine { .. }
        )
    }
}
