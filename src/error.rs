//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that a command can report back to the prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone, or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command targets a name that is not in the book
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The command was given too few arguments
    #[error("'{command}' expects {expected} argument(s), got {got}")]
    ArgumentCount {
        command: String,
        expected: usize,
        got: usize,
    },
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON or holds invalid values
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file contains the same contact name twice
    #[error("Duplicate contact name in saved data: {0}")]
    DuplicateName(String),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Loading or saving the book failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Reading input or writing output failed
    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
