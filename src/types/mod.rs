pub mod errors;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::errors::ConfigError;

/// A single poster entry as handed over by the directory-listing layer.
///
/// `directory` is a category key (e.g. `"movies"`, `"collections"`), not a
/// filesystem path. The crate reads and reorders items, never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterItem {
    pub filename: String,
    pub directory: String,
}

impl PosterItem {
    pub fn new(filename: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            directory: directory.into(),
        }
    }

    /// Filename without its final extension. Whatever follows the last `.`
    /// is dropped regardless of what the extension is; a leading-dot name
    /// stays intact.
    pub fn stem(&self) -> &str {
        match self.filename.rfind('.') {
            Some(idx) if idx > 0 => &self.filename[..idx],
            _ => &self.filename,
        }
    }
}

/// Which default order to apply when no search query is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    DateAdded,
    Alphabetical,
}

impl FromStr for SortMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date-added" => Ok(SortMode::DateAdded),
            "alphabetical" => Ok(SortMode::Alphabetical),
            other => Err(ConfigError::InvalidSortMode(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod types_tests;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod errors_tests;
