//! Catalogue of the draft API endpoints mirrored into the cache.

use std::fmt;

use crate::{EntryId, Gameweek, LeagueCode};

/// Base path for the FPL draft API.
pub const DRAFT_API_BASE: &str = "https://draft.premierleague.com/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `bootstrap-static`: players, teams, rules; independent of any league
    BootstrapStatic,
    /// `game`: current/next event and processing status
    Game,
    /// `league/{code}/details`
    LeagueDetails(LeagueCode),
    /// `entry/{id}/public`
    EntryPublic(EntryId),
    /// `event/{gw}/live`
    EventLive(Gameweek),
    /// `entry/{id}/event/{gw}`
    EntryEvent(EntryId, Gameweek),
}

impl Endpoint {
    /// Path relative to the API base. The league code is percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Endpoint::BootstrapStatic => "bootstrap-static".to_string(),
            Endpoint::Game => "game".to_string(),
            Endpoint::LeagueDetails(code) => {
                format!("league/{}/details", urlencoding::encode(code.as_str()))
            }
            Endpoint::EntryPublic(id) => format!("entry/{}/public", id),
            Endpoint::EventLive(gw) => format!("event/{}/live", gw),
            Endpoint::EntryEvent(id, gw) => format!("entry/{}/event/{}", id, gw),
        }
    }

    /// Absolute URL under `api_base`.
    pub fn url(&self, api_base: &str) -> String {
        format!("{}/{}", api_base.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
