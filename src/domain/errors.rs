//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty after trimming.
    BlankName,

    /// The email address is empty after trimming.
    BlankEmail,

    /// The email address does not match the accepted pattern.
    InvalidEmail(String),

    /// The provided contact ID is not a positive integer.
    InvalidContactId(String),

    /// The provided view mode is neither `grid` nor `list`.
    InvalidViewMode(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "Name cannot be empty"),
            Self::BlankEmail => write!(f, "Email cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidContactId(id) => write!(f, "Invalid contact ID: {}", id),
            Self::InvalidViewMode(mode) => {
                write!(f, "Invalid view mode: {} (expected grid or list)", mode)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
