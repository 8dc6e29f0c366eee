//! Common-password file loading.
//!
//! The loaded set is merged into a [`PolicyConfig`](crate::PolicyConfig);
//! nothing here keeps process-wide state.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra common-password file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist path from `PWD_BLACKLIST_PATH`, if set and non-empty.
pub fn blacklist_path_from_env() -> Option<PathBuf> {
    std::env::var(BLACKLIST_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Loads a common-password file: one entry per line, trimmed and lowercased.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no entries
pub fn load_blacklist<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, BlacklistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!(path = %path.display(), "Blacklist file not found");
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!(path = %path.display(), "Blacklist file is empty");
        return Err(BlacklistError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!(count = set.len(), path = %path.display(), "Blacklist loaded");

    Ok(set)
}
