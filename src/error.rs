//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by operations on a single contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record has no birthday stored yet
    #[error("Birthday not set for {name}")]
    BirthdayNotSet { name: String },
}

/// Errors a command handler can return.
///
/// Every variant maps to a fixed line shown to the user, see
/// [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few arguments for the command
    #[error("Missing arguments, usage: {usage}")]
    MissingArgument { usage: &'static str },

    /// A value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Lookup of a name that is not in the book
    #[error("Name not found: {0}")]
    NameNotFound(String),

    /// Update of a contact that is not in the book
    #[error("Contact does not exist: {0}")]
    ContactDoesNotExist(String),

    /// Record-level failure
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl CommandError {
    /// The line printed to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            CommandError::MissingArgument { .. } => "Give me a name",
            CommandError::Validation(_) => "Incorrect value",
            CommandError::NameNotFound(_) => "Name not found",
            CommandError::ContactDoesNotExist(_) => "Contact does not exist.",
            CommandError::Record(RecordError::BirthdayNotSet { .. }) => "Birthday not set.",
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
