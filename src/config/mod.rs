use serde::{Deserialize, Serialize};

use crate::types::errors::ConfigResult;
use crate::types::SortMode;

/// Display settings for the poster grid.
///
/// Passed explicitly into the ordering path; there is no global state. The
/// host application persists these alongside its other settings and may
/// override them per request.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
    pub sort_mode: SortMode,
    pub ignore_articles: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            // Newest posters first, articles folded away.
            sort_mode: SortMode::DateAdded,
            ignore_articles: true,
        }
    }
}

impl DisplayConfig {
    /// Parse from the host application's settings JSON. Missing fields fall
    /// back to their defaults.
    pub fn from_json(json_str: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
