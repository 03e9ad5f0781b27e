//! Type-safe wrappers for draft league identifiers and gameweeks.

pub mod ids;
pub mod time;

pub use ids::{EntryId, LeagueCode};
pub use time::{gameweeks_to_fetch, Gameweek};
