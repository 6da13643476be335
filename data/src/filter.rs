//! Title filter applied before every view.

use crate::record::ReviewRecord;
use crate::table::ReviewTable;

/// Titles picked by the user. Keeps the order titles were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleSelection {
    titles: Vec<String>,
}

impl TitleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for title in titles {
            selection.insert(title.into());
        }
        selection
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|selected| selected == title)
    }

    /// Returns `false` when the title was already selected.
    pub fn insert(&mut self, title: String) -> bool {
        if self.contains(&title) {
            return false;
        }
        self.titles.push(title);
        true
    }

    pub fn remove(&mut self, title: &str) -> bool {
        let before = self.titles.len();
        self.titles.retain(|selected| selected != title);
        self.titles.len() != before
    }

    /// Flip membership of `title`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, title: &str) -> bool {
        if self.remove(title) {
            false
        } else {
            self.titles.push(title.to_string());
            true
        }
    }

    pub fn select_all<'a>(&mut self, titles: impl IntoIterator<Item = &'a str>) {
        for title in titles {
            self.insert(title.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.titles.clear();
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }
}

/// Rows whose title is selected, in file order. An empty selection matches nothing.
pub fn filter_by_titles<'a>(
    table: &'a ReviewTable,
    selection: &TitleSelection,
) -> Vec<&'a ReviewRecord> {
    if selection.is_empty() {
        return Vec::new();
    }
    table
        .records()
        .iter()
        .filter(|record| selection.contains(&record.title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn table(titles: &[&str]) -> ReviewTable {
        let records = titles
            .iter()
            .enumerate()
            .map(|(i, title)| ReviewRecord {
                date_posted: datetime!(2021-01-01 0:00),
                title: title.to_string(),
                review: format!("review {i}"),
                playtime: Some(i as f64),
                rating: Some(3.0),
                predicted_rating: Some(3.0),
            })
            .collect();
        ReviewTable::new(Vec::new(), records)
    }

    #[test]
    fn keeps_selected_rows_in_file_order() {
        let table = table(&["A", "B", "A", "C", "B"]);
        let selection = TitleSelection::from_titles(["B", "A"]);

        let rows = filter_by_titles(&table, &selection);
        let reviews: Vec<&str> = rows.iter().map(|r| r.review.as_str()).collect();
        assert_eq!(reviews, ["review 0", "review 1", "review 2", "review 4"]);
    }

    #[test]
    fn empty_selection_yields_nothing() {
        let table = table(&["A", "B"]);
        assert!(filter_by_titles(&table, &TitleSelection::new()).is_empty());
    }

    #[test]
    fn unknown_titles_match_nothing() {
        let table = table(&["A", "B"]);
        let selection = TitleSelection::from_titles(["Z"]);
        assert!(filter_by_titles(&table, &selection).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = table(&["A", "B", "C", "A"]);
        let selection = TitleSelection::from_titles(["A", "C"]);
        let first = filter_by_titles(&table, &selection);
        let second = filter_by_titles(&table, &selection);
        assert_eq!(first, second);
    }

    #[test]
    fn toggle_and_dedup() {
        let mut selection = TitleSelection::from_titles(["A", "A", "B"]);
        assert_eq!(selection.len(), 2);
        assert!(!selection.toggle("A"));
        assert!(!selection.contains("A"));
        assert!(selection.toggle("A"));
        assert_eq!(selection.iter().collect::<Vec<_>>(), ["B", "A"]);

        selection.clear();
        selection.select_all(["C", "D", "C"]);
        assert_eq!(selection.iter().collect::<Vec<_>>(), ["C", "D"]);
    }
}
