//! Runtime configuration, read from the environment with defaults.

use std::env;
use std::path::PathBuf;

pub const CSV_PATH_VAR: &str = "REVIEW_EXPLORER_CSV";
pub const DEFAULT_TITLES_VAR: &str = "REVIEW_EXPLORER_DEFAULT_TITLES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Review CSV read at startup and appended to by the form.
    pub csv_path: PathBuf,
    /// How many titles the picker selects initially.
    pub default_title_count: usize,
}

impl ExplorerConfig {
    pub const DEFAULT_CSV_PATH: &'static str = "sample_pred_results10k.csv";
    pub const DEFAULT_TITLE_COUNT: usize = 5;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let csv_path = lookup(CSV_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_CSV_PATH));

        let default_title_count = lookup(DEFAULT_TITLES_VAR)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_TITLE_COUNT);

        Self {
            csv_path,
            default_title_count,
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
