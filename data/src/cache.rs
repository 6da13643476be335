//! Memoized review table with explicit invalidation.
//!
//! The table is loaded on first use and shared as an `Arc` until
//! [`ReviewCache::invalidate`] drops it. Appends go through the cache so the
//! next read always sees them.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::loader::load_reviews;
use crate::record::{NewReview, NewReviewRow};
use crate::table::ReviewTable;
use crate::writer::{append_review, today};

#[derive(Debug)]
pub struct ReviewCache {
    path: PathBuf,
    table: Mutex<Option<Arc<ReviewTable>>>,
}

impl ReviewCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached table, loading it first if needed. Failed loads are not cached.
    pub fn get(&self) -> Result<Arc<ReviewTable>> {
        let mut slot = self.slot();
        if let Some(table) = slot.as_ref() {
            tracing::debug!(path = %self.path.display(), "review cache hit");
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(load_reviews(&self.path)?);
        *slot = Some(Arc::clone(&table));
        Ok(table)
    }

    pub fn is_loaded(&self) -> bool {
        self.slot().is_some()
    }

    pub fn invalidate(&self) {
        if self.slot().take().is_some() {
            tracing::debug!(path = %self.path.display(), "review cache invalidated");
        }
    }

    /// Drop the cached table and read the file again.
    pub fn reload(&self) -> Result<Arc<ReviewTable>> {
        self.invalidate();
        self.get()
    }

    /// Append a review dated today, then invalidate so the next `get` sees it.
    pub fn append(&self, review: NewReview) -> Result<NewReviewRow> {
        let row = append_review(&self.path, review, today())?;
        self.invalidate();
        Ok(row)
    }

    fn slot(&self) -> MutexGuard<'_, Option<Arc<ReviewTable>>> {
        // A panic while holding the lock leaves at worst a stale table behind.
        self.table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HEADER: &str = "date_posted,title,review,playtime,rating,predicted_rating\n";

    fn fixture(rows: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), format!("{HEADER}{rows}")).unwrap();
        file
    }

    #[test]
    fn serves_the_memoized_table_until_invalidated() {
        let file = fixture("2020-01-01,A,ok,1,3,3\n");
        let cache = ReviewCache::new(file.path());
        assert!(!cache.is_loaded());

        let first = cache.get().unwrap();
        assert_eq!(first.len(), 1);

        fs::write(
            file.path(),
            format!("{HEADER}2020-01-01,A,ok,1,3,3\n2020-01-02,B,ok,2,4,4\n"),
        )
        .unwrap();

        let cached = cache.get().unwrap();
        assert!(Arc::ptr_eq(&first, &cached));
        assert_eq!(cached.len(), 1);

        cache.invalidate();
        assert!(!cache.is_loaded());
        assert_eq!(cache.get().unwrap().len(), 2);
    }

    #[test]
    fn append_makes_the_new_row_visible() {
        let file = fixture("2020-01-01,A,ok,1,3,3\n");
        let cache = ReviewCache::new(file.path());
        assert_eq!(cache.get().unwrap().len(), 1);

        let review = NewReview::new("X", "great", 10.0, 4).unwrap();
        let row = cache.append(review).unwrap();

        let table = cache.get().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1], row.to_record());
    }

    #[test]
    fn failed_loads_are_retried() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        let cache = ReviewCache::new(&path);
        assert!(cache.get().is_err());
        assert!(!cache.is_loaded());

        fs::write(&path, format!("{HEADER}2020-01-01,A,ok,1,3,3\n")).unwrap();
        assert_eq!(cache.get().unwrap().len(), 1);
    }
}
