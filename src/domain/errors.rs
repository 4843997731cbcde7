//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or blank.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Phone number must be 10 digits, got: {0}")]
    InvalidPhone(String),

    /// The provided birthday is malformed or not a real calendar date.
    #[error("Invalid date format. Use DD.MM.YYYY, got: {0}")]
    InvalidDate(String),
}
