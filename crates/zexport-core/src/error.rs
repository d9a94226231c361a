//! Error types for zexport operations.
//!
//! Every failure class in the export pipeline is fatal for the run; the types
//! here exist so internal functions stay pure with respect to process
//! termination and a single top-level handler decides the exit code.

use thiserror::Error;

/// Main error type for zexport operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Localconfig document could not be parsed
    #[error("Failed to parse localconfig: {0}")]
    LocalconfigParse(String),

    /// Directory operation failed
    #[error("Directory {operation} failed: {message}")]
    Directory {
        /// Protocol operation that failed (connect, bind, search, unbind)
        operation: String,
        /// Error message from the directory layer
        message: String,
    },

    /// Output stream error
    #[error("Output error: {0}")]
    Io(String),
}

/// Specialized result type for zexport operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a directory error for the given protocol operation.
    #[must_use]
    pub fn directory(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Directory {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
