//! HTTP utilities for draft API communication

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use std::time::Duration;

pub const USER_AGENT: &str = concat!("fpl-draft-cache/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every API request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the shared reqwest client.
///
/// With `timeout == None` requests may block indefinitely.
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_headers());

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_accept_json() {
        let headers = default_headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("fpl-draft-cache/"));
        assert!(USER_AGENT.len() > "fpl-draft-cache/".len());
    }

    #[test]
    fn test_build_client_with_and_without_timeout() {
        assert!(build_client(None).is_ok());
        assert!(build_client(Some(Duration::from_secs(10))).is_ok());
    }
}
