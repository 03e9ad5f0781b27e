//! File-backed endpoint cache
//!
//! Every endpoint response is stored as pretty-printed JSON at
//! `<base>/api/<relative endpoint path>`. A file that exists is never
//! rewritten; existence is the only state carried between runs.

use serde_json::Value;
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Component, Path, PathBuf},
};

use crate::{DraftError, Result};


/// Directory under the base path that mirrors the API's URL space.
pub const CACHE_NAMESPACE: &str = "api";

/// Result of persisting one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Skipped,
}

/// Strip the API prefix (`api_base` plus `/`) from `url` and percent-decode
/// the remainder.
pub fn relative_endpoint_path(url: &str, api_base: &str) -> Result<String> {
    let prefix = format!("{}/", api_base.trim_end_matches('/'));

    let rel = url
        .strip_prefix(&prefix)
        .ok_or_else(|| DraftError::OutsideApi {
            url: url.to_string(),
            prefix: prefix.clone(),
        })?;

    let decoded = urlencoding::decode(rel).map_err(|_| DraftError::UnsafePath {
        url: url.to_string(),
        path: rel.to_string(),
    })?;

    Ok(decoded.into_owned())
}

/// Local file path for `url`: `<base_path>/api/<relative endpoint path>`.
///
/// Relative paths that are empty or would escape the cache directory
/// (absolute paths, `..`) are rejected.
pub fn cache_file_path(base_path: &Path, url: &str, api_base: &str) -> Result<PathBuf> {
    let rel = relative_endpoint_path(url, api_base)?;
    let rel_path = Path::new(&rel);

    let components: Vec<Component> = rel_path.components().collect();
    let is_safe = components.iter().any(|c| matches!(c, Component::Normal(_)))
        && components
            .iter()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if !is_safe {
        return Err(DraftError::UnsafePath {
            url: url.to_string(),
            path: rel,
        });
    }

    Ok(base_path.join(CACHE_NAMESPACE).join(rel_path))
}

/// Write `value` as two-space indented JSON unless `path` already exists.
pub fn write_json_if_absent(path: &Path, value: &Value) -> Result<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(value)?;

    let mut f = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(WriteOutcome::Skipped),
        Err(e) => return Err(e.into()),
    };
    f.write_all(contents.as_bytes())?;

    Ok(WriteOutcome::Created)
}
