//! Gameweek type and the gameweek range selected for a run.

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for gameweek numbers (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Gameweek(pub u32);

impl Gameweek {
    pub fn new(gw: u32) -> Self {
        Self(gw)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Gameweeks to fetch for a run: every gameweek from 1 through `current`
/// when `all` is set, otherwise only `current`.
pub fn gameweeks_to_fetch(current: Gameweek, all: bool) -> Vec<Gameweek> {
    if all {
        (1..=current.as_u32()).map(Gameweek::new).collect()
    } else {
        vec![current]
    }
}
