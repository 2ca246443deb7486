//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for contact IDs.
///
/// IDs are positive integers issued by the store. They are never reused
/// within one store, even after the contact holding them is deleted.
///
/// # Example
///
/// ```
/// use contact_manager::domain::ContactId;
///
/// let id: ContactId = "7".parse().unwrap();
/// assert_eq!(id.get(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// The first ID a fresh store hands out.
    pub const FIRST: ContactId = ContactId(1);

    /// Create a ContactId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The ID issued after this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl FromStr for ContactId {
    type Err = ValidationError;

    /// Parse a positive decimal integer, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<u64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ValidationError::InvalidContactId(trimmed.to_string())),
        }
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
