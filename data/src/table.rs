//! In-memory review table, kept in file order.

use std::collections::HashSet;

use crate::record::ReviewRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewTable {
    headers: Vec<String>,
    records: Vec<ReviewRecord>,
}

impl ReviewTable {
    pub fn new(headers: Vec<String>, records: Vec<ReviewRecord>) -> Self {
        Self { headers, records }
    }

    /// Header cells exactly as found on disk.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct titles in order of first appearance.
    pub fn titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|record| record.title.as_str())
            .filter(|title| seen.insert(*title))
            .collect()
    }

    /// The first `count` distinct titles, used as the initial picker state.
    pub fn default_selection(&self, count: usize) -> Vec<String> {
        self.titles()
            .into_iter()
            .take(count)
            .map(str::to_string)
            .collect()
    }
}
