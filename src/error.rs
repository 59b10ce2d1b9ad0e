//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a command handler.
///
/// The dispatcher renders every variant as `Error: <message>`; none of them
/// ends the session.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A name, phone or birthday failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The referenced contact does not exist
    #[error("Contact {0} not found.")]
    NotFound(String),

    /// The command received the wrong number of arguments
    #[error("Invalid number of arguments. Usage: {usage}")]
    Usage { usage: &'static str },
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid address book
    #[error("Invalid address book data in {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The temporary file could not replace the target
    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Saving the address book on exit failed
    #[error("Failed to save address book: {0}")]
    Storage(#[from] StorageError),

    /// Reading a command or writing a reply failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
