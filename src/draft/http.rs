//! HTTP client for the draft API

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::{core::build_client, Result};

use super::endpoints::Endpoint;


/// GETs JSON documents from one API base.
#[derive(Debug, Clone)]
pub struct DraftClient {
    http: Client,
    api_base: String,
}

impl DraftClient {
    pub fn new(api_base: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: build_client(timeout)?,
            api_base,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        endpoint.url(&self.api_base)
    }

    /// GET `url` and decode the body as JSON. Non-2xx statuses are errors.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET");

        let v = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }
}
