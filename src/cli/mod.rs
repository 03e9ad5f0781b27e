//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::LeagueCode;

/// Fetch FPL draft data and create a local file database.
#[derive(Debug, Parser)]
#[clap(
    name = "fpl-draft-cache",
    about = "Fetch FPL draft data and create local database"
)]
pub struct DraftCache {
    /// League code for the draft league.
    pub league_code: LeagueCode,

    /// Base path for storing fetched data.
    #[clap(long, short, default_value = ".")]
    pub base_path: PathBuf,

    /// Skip checking that the HTTPS client and storage directory are usable.
    #[clap(long)]
    pub skip_prerequisites: bool,

    /// Fetch all gameweeks up to current instead of only the current one.
    #[clap(long = "all-gws")]
    pub all_gws: bool,

    /// API base URL (or set `FPL_DRAFT_API_BASE` env var).
    #[clap(long)]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds. Requests never time out when unset.
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Print debug diagnostics on stderr.
    #[clap(long, short)]
    pub verbose: bool,
}
