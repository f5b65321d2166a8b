use std::path::PathBuf;
use thiserror::Error;

pub type NotesResult<T> = Result<T, NotesError>;

/// Errors raised by note store and search operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Validation failure; no I/O was attempted.
    #[error("{what} cannot be empty")]
    EmptyInput { what: &'static str },

    /// File open/read/write/truncate failure.
    #[error("failed to {op} `{}`: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NotesError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NotesError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// True for failures that should be routed to the error log.
    pub fn is_io(&self) -> bool {
        matches!(self, NotesError::Io { .. })
    }
}
