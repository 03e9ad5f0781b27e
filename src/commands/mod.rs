//! Command implementations for the draft snapshot tool

pub mod prerequisites;
pub mod snapshot;

use crate::{draft::DRAFT_API_BASE, API_BASE_ENV_VAR};

/// API base from the CLI, else `FPL_DRAFT_API_BASE`, else the public API.
pub fn resolve_api_base(api_base: Option<String>) -> String {
    api_base
        .or_else(|| {
            std::env::var(API_BASE_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| DRAFT_API_BASE.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}
