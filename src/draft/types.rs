//! Serde views over the `game` and `league/{code}/details` payloads.
//!
//! Only the fields that drive the run are typed. Everything else is left
//! undecoded so an unexpected shape elsewhere in a payload cannot fail it.

use crate::{EntryId, Gameweek};
use serde::{Deserialize, Deserializer};
use serde_json::Value;


/// Distinguish a key that is present but `null` (`Some(None)`) from a key
/// that is absent (`None`, via `#[serde(default)]`).
fn de_present_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The fields of the `game` payload the run depends on
#[derive(Debug, Clone, Deserialize)]
pub struct Game {
    #[serde(default, deserialize_with = "de_present_nullable")]
    current_event: Option<Option<Gameweek>>,
}

impl Game {
    /// `None` when the key is missing; `Some(None)` during preseason.
    pub fn current_event(&self) -> Option<Option<Gameweek>> {
        self.current_event
    }
}

/// A team taking part in the league
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueEntry {
    #[serde(default)]
    pub entry_id: Option<EntryId>,
}

/// The fields of the `league/{code}/details` payload the run depends on
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueDetails {
    #[serde(default)]
    pub league: Option<Value>,
    #[serde(default)]
    pub league_entries: Option<Vec<LeagueEntry>>,
}

impl LeagueDetails {
    pub fn league_name(&self) -> Option<&str> {
        self.league
            .as_ref()
            .and_then(|l| l.get("name"))
            .and_then(Value::as_str)
    }

    /// Entry ids in listed order, skipping entries without one.
    pub fn entry_ids(&self) -> Vec<EntryId> {
        self.league_entries
            .iter()
            .flatten()
            .filter_map(|e| e.entry_id)
            .collect()
    }
}
