//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accepts `xx@yyyyy.zzz`: a 2-25 character local part, a 2-15 character
/// alphanumeric domain and a 2-3 letter suffix. Case folding is ASCII-only,
/// so non-ASCII letters that fold onto `k` or `s` do not match.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^[a-z0-9_.]{2,25}@[a-z0-9]{2,15}\.[a-z]{2,3}$")
        .expect("email pattern is a valid regex")
});

/// A type-safe wrapper for email addresses.
///
/// The address is trimmed and validated at construction time. The input
/// casing is preserved, so two addresses that differ only in case are
/// distinct values.
///
/// # Example
///
/// ```
/// use contact_manager::domain::EmailAddress;
///
/// let email = EmailAddress::new("  al@ex.com ").unwrap();
/// assert_eq!(email.as_str(), "al@ex.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty after trimming
    /// - Local part: 2-25 characters from `[a-z0-9_.]`
    /// - Domain: 2-15 alphanumeric characters
    /// - Suffix: 2-3 letters
    ///
    /// All character classes are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankEmail` for an empty address and
    /// `ValidationError::InvalidEmail` if the pattern does not match.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = email.as_ref().trim();

        if email.is_empty() {
            return Err(ValidationError::BlankEmail);
        }

        if !Self::is_valid(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        Ok(Self(email.to_string()))
    }

    /// Check an already trimmed address against the pattern.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
