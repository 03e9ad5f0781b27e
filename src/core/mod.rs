//! Core utilities for the draft snapshot tool
//!
//! - `cache`: URL-to-path mapping and write-if-absent JSON persistence
//! - `http`: reqwest client construction

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{cache_file_path, relative_endpoint_path, write_json_if_absent, WriteOutcome};
pub use http::build_client;
