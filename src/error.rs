//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when adding a contact to the store.
///
/// The display strings are the notices shown to the user; the underlying
/// reason is available through [`std::error::Error::source`] or by matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Name or email is empty, or the email fails the pattern
    #[error("Please enter valid data")]
    InvalidInput(#[from] ValidationError),

    /// Another contact already uses this email
    #[error("Email already in use")]
    DuplicateEmail(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors that can occur while parsing a console command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("unknown command: {0} (try 'help')")]
    Unknown(String),

    /// A required argument is missing
    #[error("usage: {0}")]
    Usage(&'static str),

    /// An argument failed validation
    #[error("{0}")]
    InvalidArgument(#[from] ValidationError),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = StoreError::InvalidInput(ValidationError::BlankName);
        assert_eq!(err.to_string(), "Please enter valid data");

        let err = StoreError::DuplicateEmail("al@ex.com".to_string());
        assert_eq!(err.to_string(), "Email already in use");

        let err = ConfigError::InvalidValue {
            var: "CONTACTS_DEFAULT_VIEW".to_string(),
            reason: "Must be 'grid' or 'list'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACTS_DEFAULT_VIEW: Must be 'grid' or 'list'"
        );

        let err = CommandError::Unknown("frob".to_string());
        assert_eq!(err.to_string(), "unknown command: frob (try 'help')");
    }

    #[test]
    fn test_invalid_input_exposes_reason() {
        let err: StoreError = ValidationError::InvalidEmail("x".to_string()).into();
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Invalid email address: x"));
    }
}
