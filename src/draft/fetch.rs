//! Fetch-or-skip: GET an endpoint and mirror it into the file cache.

use serde_json::Value;
use std::{fmt, path::PathBuf};
use tracing::{debug, warn};

use crate::{
    core::{cache_file_path, write_json_if_absent, WriteOutcome},
    Result,
};

use super::{endpoints::Endpoint, http::DraftClient};


/// Per-run counters of what happened to each requested endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for FetchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} skipped, {} failed",
            self.created, self.skipped, self.failed
        )
    }
}

pub struct CachingFetcher {
    client: DraftClient,
    base_path: PathBuf,
    stats: FetchStats,
}

impl CachingFetcher {
    pub fn new(client: DraftClient, base_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            base_path: base_path.into(),
            stats: FetchStats::default(),
        }
    }

    pub fn stats(&self) -> FetchStats {
        self.stats
    }

    pub async fn fetch_or_skip(&mut self, endpoint: &Endpoint) -> Result<Option<Value>> {
        let url = self.client.url(endpoint);
        self.fetch_url_or_skip(&url).await
    }

    /// Fetch `url` and store it unless its cache file already exists.
    ///
    /// The request is made even when the file exists; only the write is
    /// skipped. Network, status and body errors are reported and yield
    /// `Ok(None)`. Path and filesystem errors are returned.
    pub async fn fetch_url_or_skip(&mut self, url: &str) -> Result<Option<Value>> {
        let file_path = cache_file_path(&self.base_path, url, self.client.api_base())?;
        debug!(url, path = %file_path.display(), "resolved cache path");

        let data = match self.client.get_json(url).await {
            Ok(data) => data,
            Err(e) => {
                println!("Error fetching {}: {}", url, e);
                warn!(url, error = %e, "fetch failed");
                self.stats.failed += 1;
                return Ok(None);
            }
        };

        match write_json_if_absent(&file_path, &data)? {
            WriteOutcome::Created => {
                println!("Created: {}", file_path.display());
                self.stats.created += 1;
            }
            WriteOutcome::Skipped => {
                println!("Skipped (exists): {}", file_path.display());
                self.stats.skipped += 1;
            }
        }

        Ok(Some(data))
    }
}
