//! Data layer for Review Explorer: the review schema, CSV loading and caching,
//! title filtering, per-title aggregation, and the append writer used by the
//! new-review form. Nothing in here depends on the UI toolkit.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod record;
pub mod table;
pub mod writer;

pub use aggregate::{mean_ratings, melt, Metric, MetricPoint, TitleMeans};
pub use cache::ReviewCache;
pub use config::ExplorerConfig;
pub use error::{Result, ReviewError};
pub use filter::{filter_by_titles, TitleSelection};
pub use loader::{load_reviews, load_reviews_from_reader};
pub use record::{format_date, Column, NewReview, NewReviewRow, Recommendation, ReviewRecord};
pub use table::ReviewTable;
pub use writer::{append_review, today};
