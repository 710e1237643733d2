//! Cleanup operation selector

use std::fmt;
use std::str::FromStr;

use crate::cleaner::error::CleanerError;

/// The cleanup operation requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Canonical,
    Redirection,
    All,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Canonical => "canonical",
            Operation::Redirection => "redirection",
            Operation::All => "all",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CleanerError;

    /// Matches case-insensitively; the input is lower-cased before matching.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "canonical" => Ok(Operation::Canonical),
            "redirection" => Ok(Operation::Redirection),
            "all" => Ok(Operation::All),
            _ => Err(CleanerError::InvalidOperation(value.to_string())),
        }
    }
}
