//! Pre-run environment check
//!
//! Verifies what a run actually relies on: a working HTTPS client and a
//! writable cache directory. Every missing item is reported, not just the
//! first.

use std::{fmt, fs, io::Write, path::Path, time::Duration};
use tracing::debug;

use crate::{
    core::{build_client, cache::CACHE_NAMESPACE},
    DraftError, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite {
    HttpsClient,
    WritableStorage,
}

impl Prerequisite {
    pub fn name(&self) -> &'static str {
        match self {
            Prerequisite::HttpsClient => "https-client",
            Prerequisite::WritableStorage => "writable-storage",
        }
    }
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Return every prerequisite that is not satisfied for `base_path`.
pub fn missing_prerequisites(base_path: &Path, timeout: Option<Duration>) -> Vec<Prerequisite> {
    let mut missing = Vec::new();

    if let Err(e) = build_client(timeout) {
        debug!(error = %e, "HTTPS client unavailable");
        missing.push(Prerequisite::HttpsClient);
    }

    if let Err(e) = check_storage_writable(base_path) {
        debug!(error = %e, path = %base_path.display(), "storage not writable");
        missing.push(Prerequisite::WritableStorage);
    }

    missing
}

/// Fail with `MissingPrerequisites` naming every unsatisfied item.
pub fn check_prerequisites(base_path: &Path, timeout: Option<Duration>) -> Result<()> {
    let missing = missing_prerequisites(base_path, timeout);
    if missing.is_empty() {
        return Ok(());
    }

    Err(DraftError::MissingPrerequisites {
        missing: missing.iter().map(ToString::to_string).collect(),
    })
}

/// Create `<base>/api` and write then remove a scratch file inside it.
fn check_storage_writable(base_path: &Path) -> std::io::Result<()> {
    let dir = base_path.join(CACHE_NAMESPACE);
    fs::create_dir_all(&dir)?;

    let scratch = dir.join(format!(".write-check-{}", std::process::id()));
    let mut f = fs::File::create(&scratch)?;
    f.write_all(b"{}")?;
    drop(f);

    fs::remove_file(&scratch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_all_prerequisites_met() {
        let temp_dir = TempDir::new().unwrap();

        assert!(missing_prerequisites(temp_dir.path(), None).is_empty());
        assert!(check_prerequisites(temp_dir.path(), None).is_ok());
    }

    #[test]
    fn test_write_check_leaves_only_the_cache_directory() {
        let temp_dir = TempDir::new().unwrap();

        check_prerequisites(temp_dir.path(), None).unwrap();

        let api_dir = temp_dir.path().join("api");
        assert!(api_dir.is_dir());
        assert_eq!(fs::read_dir(&api_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_base_path_that_is_a_file_is_not_writable() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        let missing = missing_prerequisites(&file, None);
        assert_eq!(missing, vec![Prerequisite::WritableStorage]);

        match check_prerequisites(&file, None) {
            Err(DraftError::MissingPrerequisites { missing }) => {
                assert_eq!(missing, vec!["writable-storage".to_string()]);
            }
            other => panic!("Expected MissingPrerequisites, got {:?}", other),
        }
    }

    #[test]
    fn test_prerequisite_names() {
        assert_eq!(Prerequisite::HttpsClient.to_string(), "https-client");
        assert_eq!(Prerequisite::WritableStorage.to_string(), "writable-storage");
    }
}
