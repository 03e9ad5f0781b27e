//! Snapshot command: mirror a league's draft API data into the file cache.
//!
//! The run is strictly sequential: bootstrap-static, game, league details,
//! each team's public entry, then live and per-team data for the selected
//! gameweeks. Only missing game or league data (or malformed payloads for
//! either) stops the run with an error; a `null` current gameweek stops it
//! cleanly before any gameweek fetch.

use std::{path::PathBuf, time::Duration};
use tracing::warn;

use crate::{
    cli::{types::gameweeks_to_fetch, DraftCache},
    draft::{CachingFetcher, DraftClient, Endpoint, FetchStats, Game, LeagueDetails},
    DraftError, EntryId, Gameweek, LeagueCode, Result,
};

use super::{prerequisites::check_prerequisites, resolve_api_base};

/// Parameters for the snapshot command
#[derive(Debug, Clone)]
pub struct SnapshotParams {
    pub league_code: LeagueCode,
    pub base_path: PathBuf,
    pub api_base: Option<String>,
    pub all_gameweeks: bool,
    pub skip_prerequisites: bool,
    pub timeout: Option<Duration>,
}

impl From<DraftCache> for SnapshotParams {
    fn from(args: DraftCache) -> Self {
        Self {
            league_code: args.league_code,
            base_path: args.base_path,
            api_base: args.api_base,
            all_gameweeks: args.all_gws,
            skip_prerequisites: args.skip_prerequisites,
            timeout: args.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// How a run that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every planned fetch was attempted.
    Completed(FetchStats),
    /// The game has no current gameweek yet; gameweek data was not fetched.
    Preseason(FetchStats),
}

impl RunOutcome {
    pub fn stats(&self) -> FetchStats {
        match self {
            RunOutcome::Completed(stats) | RunOutcome::Preseason(stats) => *stats,
        }
    }
}

/// Process exit status for a finished run: 0 for completed and preseason
/// runs, 1 for any error.
pub fn exit_code(result: &Result<RunOutcome>) -> i32 {
    match result {
        Ok(RunOutcome::Completed(_)) | Ok(RunOutcome::Preseason(_)) => 0,
        Err(_) => 1,
    }
}

/// Handle the snapshot command
pub async fn handle_snapshot(params: SnapshotParams) -> Result<RunOutcome> {
    if !params.skip_prerequisites {
        check_prerequisites(&params.base_path, params.timeout)?;
    }

    let api_base = resolve_api_base(params.api_base);
    let client = DraftClient::new(api_base, params.timeout)?;
    let mut fetcher = CachingFetcher::new(client, &params.base_path);

    println!("Fetching data for league: {}", params.league_code);
    println!("Saving to: {}", params.base_path.display());

    println!("\nFetching bootstrap-static...");
    fetcher.fetch_or_skip(&Endpoint::BootstrapStatic).await?;

    println!("Fetching game data...");
    let current_gw = fetch_current_gameweek(&mut fetcher).await?;
    match current_gw {
        Some(gw) => println!("Current gameweek: {}", gw),
        None => println!("Current gameweek: null"),
    }

    println!("Fetching league details for {}...", params.league_code);
    let teams = fetch_league_teams(&mut fetcher, &params.league_code).await?;
    println!("Found {} teams: [{}]", teams.len(), join_ids(&teams));

    println!("\nFetching team-specific data...");
    for team in &teams {
        fetcher.fetch_or_skip(&Endpoint::EntryPublic(*team)).await?;
    }

    let Some(current_gw) = current_gw else {
        println!("Current GW is null - preseason!");
        return Ok(RunOutcome::Preseason(fetcher.stats()));
    };

    if params.all_gameweeks {
        println!("\nFetching gameweek data (GW 1 to {})...", current_gw);
    } else {
        println!("\nFetching gameweek data (GW {})...", current_gw);
    }

    for gw in gameweeks_to_fetch(current_gw, params.all_gameweeks) {
        fetcher.fetch_or_skip(&Endpoint::EventLive(gw)).await?;

        for team in &teams {
            fetcher.fetch_or_skip(&Endpoint::EntryEvent(*team, gw)).await?;
        }
    }

    let stats = fetcher.stats();
    println!("\nDatabase creation completed!");
    println!("Summary: {}", stats);

    Ok(RunOutcome::Completed(stats))
}

/// Fetch `game` and extract `current_event`; `Ok(None)` means preseason.
async fn fetch_current_gameweek(fetcher: &mut CachingFetcher) -> Result<Option<Gameweek>> {
    let value = fetcher
        .fetch_or_skip(&Endpoint::Game)
        .await?
        .ok_or(DraftError::NoData { what: "game data" })?;

    let game: Game = serde_json::from_value(value)?;

    game.current_event().ok_or_else(|| DraftError::MissingField {
        endpoint: Endpoint::Game.path(),
        field: "current_event",
    })
}

/// Fetch league details and extract the team ids in listed order.
async fn fetch_league_teams(
    fetcher: &mut CachingFetcher,
    league_code: &LeagueCode,
) -> Result<Vec<EntryId>> {
    let endpoint = Endpoint::LeagueDetails(league_code.clone());
    let value = fetcher
        .fetch_or_skip(&endpoint)
        .await?
        .ok_or(DraftError::NoData {
            what: "league details",
        })?;

    let details: LeagueDetails = serde_json::from_value(value)?;

    let entries = details
        .league_entries
        .as_ref()
        .ok_or_else(|| DraftError::MissingField {
            endpoint: endpoint.path(),
            field: "league_entries",
        })?;

    if let Some(name) = details.league_name() {
        println!("League: {}", name);
    }

    let teams = details.entry_ids();
    let without_id = entries.len() - teams.len();
    if without_id > 0 {
        warn!(
            league = %league_code,
            count = without_id,
            "league entries without entry_id were skipped"
        );
    }

    Ok(teams)
}

fn join_ids(ids: &[EntryId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
