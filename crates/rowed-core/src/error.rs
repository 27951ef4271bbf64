//! Editor errors.
//!
//! Every error the editor can hit while running ends up as a status message,
//! so an [`EditorError`]'s `Display` text is exactly what the user sees.
//! [`ErrorKind`] groups them by how they arise.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad category of an [`EditorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A command the user can retype: unknown verb, missing or bad argument.
    UserInput,
    /// An edit or save on a read-only document.
    Permission,
    /// A file that isn't there.
    Resource,
    /// The OS failed a read or write.
    FatalIo,
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Invalid command: Command not recognized.")]
    UnknownCommand,

    #[error("Invalid option: No file path specified.")]
    MissingPath,

    #[error("Invalid option: No file name specified. No changes made.")]
    MissingName,

    #[error("Invalid option: No position specified.")]
    MissingPosition,

    #[error("Invalid option: No line number specified.")]
    MissingLineNumber,

    #[error("Invalid option: Line number outside of file range.")]
    InvalidLineNumber,

    /// `move` parses but has no implementation.
    #[error("Cannot move yet.")]
    Unsupported,

    #[error("Error: This file is read-only!")]
    ReadOnly,

    #[error("Error: File does not exist.")]
    FileNotFound(PathBuf),

    #[error("Error: {0}")]
    Io(#[from] io::Error),
}

impl EditorError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCommand
            | Self::MissingPath
            | Self::MissingName
            | Self::MissingPosition
            | Self::MissingLineNumber
            | Self::InvalidLineNumber
            | Self::Unsupported => ErrorKind::UserInput,
            Self::ReadOnly => ErrorKind::Permission,
            Self::FileNotFound(_) => ErrorKind::Resource,
            Self::Io(_) => ErrorKind::FatalIo,
        }
    }

    /// Level to log this error at: the OS failing is an error, anything the
    /// user can correct is a warning.
    #[must_use]
    pub const fn log_level(&self) -> log::Level {
        match self.kind() {
            ErrorKind::FatalIo => log::Level::Error,
            ErrorKind::UserInput | ErrorKind::Permission | ErrorKind::Resource => {
                log::Level::Warn
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_status_text() {
        assert_eq!(
            EditorError::UnknownCommand.to_string(),
            "Invalid command: Command not recognized."
        );
        assert_eq!(EditorError::Unsupported.to_string(), "Cannot move yet.");
        assert_eq!(
            EditorError::FileNotFound(PathBuf::from("x.txt")).to_string(),
            "Error: File does not exist."
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: EditorError = io::Error::other("disk full").into();
        assert_eq!(err.to_string(), "Error: disk full");
        assert_eq!(err.kind(), ErrorKind::FatalIo);
    }

    #[test]
    fn kinds() {
        assert_eq!(EditorError::MissingPath.kind(), ErrorKind::UserInput);
        assert_eq!(EditorError::InvalidLineNumber.kind(), ErrorKind::UserInput);
        assert_eq!(EditorError::Unsupported.kind(), ErrorKind::UserInput);
        assert_eq!(EditorError::ReadOnly.kind(), ErrorKind::Permission);
        assert_eq!(
            EditorError::FileNotFound(PathBuf::new()).kind(),
            ErrorKind::Resource
        );
    }

    #[test]
    fn only_io_failures_log_as_errors() {
        let io: EditorError = io::Error::other("disk full").into();
        assert_eq!(io.log_level(), log::Level::Error);
        assert_eq!(EditorError::UnknownCommand.log_level(), log::Level::Warn);
        assert_eq!(EditorError::ReadOnly.log_level(), log::Level::Warn);
        assert_eq!(
            EditorError::FileNotFound(PathBuf::new()).log_level(),
            log::Level::Warn
        );
    }
}
