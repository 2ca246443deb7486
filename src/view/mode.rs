//! Presentation mode selector.

use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the visible contacts are laid out. Has no effect on stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One card per contact.
    #[default]
    Grid,
    /// One table row per contact.
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl FromStr for ViewMode {
    type Err = ValidationError;

    /// Parse `grid` or `list`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("grid") {
            Ok(ViewMode::Grid)
        } else if trimmed.eq_ignore_ascii_case("list") {
            Ok(ViewMode::List)
        } else {
            Err(ValidationError::InvalidViewMode(trimmed.to_string()))
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
