//! Error types for the draft API snapshot tool

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid league code '{code}': {reason}")]
    InvalidLeagueCode { code: String, reason: String },

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("URL {url} is outside the API prefix {prefix}")]
    OutsideApi { url: String, prefix: String },

    #[error("Refusing to cache {url} at unsafe path '{path}'")]
    UnsafePath { url: String, path: String },

    #[error("Response from {endpoint} is missing field '{field}'")]
    MissingField {
        endpoint: String,
        field: &'static str,
    },

    #[error("Failed to fetch {what}")]
    NoData { what: &'static str },

    #[error("Missing prerequisites: {}", .missing.join(", "))]
    MissingPrerequisites { missing: Vec<String> },
}
