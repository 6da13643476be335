//! Dashboard components. Every view reads the same filtered rows; none of
//! them talk to each other.

mod bar_chart;
pub use bar_chart::RatingBarChart;

mod form;
pub use form::{FormStatus, NewReviewForm};

mod picker;
pub use picker::TitlePicker;

mod reviews;
pub use reviews::ReviewTextPanel;

mod scatter;
pub use scatter::PlaytimeScatter;

mod table;
pub use table::ReviewTableView;

mod tooltip;

use std::sync::Arc;

use data::{ExplorerConfig, ReviewCache, ReviewTable};
use dioxus::prelude::*;

/// Data source shared with every view. Platforms provide one through
/// `use_context_provider`; without it the environment configuration is used.
#[derive(Debug, Clone)]
pub struct ExplorerContext {
    pub cache: Arc<ReviewCache>,
    pub config: ExplorerConfig,
}

impl ExplorerContext {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            cache: Arc::new(ReviewCache::new(config.csv_path.clone())),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ExplorerConfig::from_env())
    }
}

pub fn use_explorer_context() -> ExplorerContext {
    use_hook(|| try_consume_context::<ExplorerContext>().unwrap_or_else(ExplorerContext::from_env))
}

/// Loaded table or the message of the failure that prevented loading it.
#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    pub table: Option<Arc<ReviewTable>>,
    pub error: Option<String>,
}

impl ExplorerState {
    pub fn load(cache: &ReviewCache) -> Self {
        Self::from_result(cache.get(), cache)
    }

    pub fn reload(cache: &ReviewCache) -> Self {
        Self::from_result(cache.reload(), cache)
    }

    fn from_result(result: data::Result<Arc<ReviewTable>>, cache: &ReviewCache) -> Self {
        match result {
            Ok(table) => Self {
                table: Some(table),
                error: None,
            },
            Err(err) => {
                tracing::error!(path = %cache.path().display(), error = %err, "failed to load reviews");
                Self {
                    table: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}
