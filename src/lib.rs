//! FPL Draft API snapshot library
//!
//! Mirrors a draft league's API responses into a local file tree so they
//! can be read offline. Each endpoint is stored as pretty-printed JSON at
//! `<base>/api/<endpoint path>`, and existing files are never rewritten.
//!
//! ## What gets fetched
//!
//! - `bootstrap-static` and `game`
//! - `league/{code}/details`
//! - `entry/{id}/public` for every team in the league
//! - `event/{gw}/live` and `entry/{id}/event/{gw}` for the current gameweek,
//!   or for every gameweek up to it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_draft_cache::{commands::snapshot::*, LeagueCode};
//!
//! # async fn example() -> fpl_draft_cache::Result<()> {
//! let params = SnapshotParams {
//!     league_code: LeagueCode::new("305")?,
//!     base_path: "db".into(),
//!     api_base: None,
//!     all_gameweeks: true,
//!     skip_prerequisites: false,
//!     timeout: None,
//! };
//!
//! match handle_snapshot(params).await? {
//!     RunOutcome::Completed(stats) => println!("done: {}", stats),
//!     RunOutcome::Preseason(_) => println!("no gameweek yet"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the tool at a different API host (a mirror or a local server):
//! ```bash
//! export FPL_DRAFT_API_BASE=http://localhost:8000/api
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod draft;
pub mod error;

// Re-export commonly used types
pub use cli::types::{EntryId, Gameweek, LeagueCode};
pub use error::{DraftError, Result};

pub const API_BASE_ENV_VAR: &str = "FPL_DRAFT_API_BASE";
