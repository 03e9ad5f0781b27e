//! FPL draft API access: endpoint catalogue, payload views, HTTP client
//! and the fetch-or-skip cache writer.

pub mod endpoints;
pub mod fetch;
pub mod http;
pub mod types;

pub use endpoints::{Endpoint, DRAFT_API_BASE};
pub use fetch::{CachingFetcher, FetchStats};
pub use http::DraftClient;
pub use types::{Game, LeagueDetails};
