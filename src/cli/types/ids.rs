//! ID types for draft leagues and their entries.

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier selecting a draft league instance.
///
/// The code is embedded as a single URL path segment, so it must be
/// non-empty and may not contain `/`.
///
/// # Examples
///
/// ```rust
/// use fpl_draft_cache::LeagueCode;
///
/// let code: LeagueCode = "305".parse().unwrap();
/// assert_eq!(code.as_str(), "305");
/// assert!("".parse::<LeagueCode>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueCode(String);

impl LeagueCode {
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        let trimmed = code.trim();

        if trimmed.is_empty() {
            return Err(DraftError::InvalidLeagueCode {
                code,
                reason: "must not be empty".to_string(),
            });
        }
        if trimmed.contains('/') {
            return Err(DraftError::InvalidLeagueCode {
                code,
                reason: "must not contain '/'".to_string(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueCode {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Type-safe wrapper for league entry (team) IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl EntryId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
