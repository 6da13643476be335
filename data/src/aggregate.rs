//! Per-title averages and their long-form reshape for the grouped bar chart.

use std::collections::BTreeMap;

use crate::record::ReviewRecord;

/// The two averaged columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    Rating,
    PredictedRating,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Rating, Metric::PredictedRating];

    /// Column name the metric is computed from.
    pub fn id(self) -> &'static str {
        match self {
            Metric::Rating => "rating",
            Metric::PredictedRating => "predicted_rating",
        }
    }
}

/// Mean rating and predicted rating of one title. `None` when the group has no values.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleMeans {
    pub title: String,
    pub rating: Option<f64>,
    pub predicted_rating: Option<f64>,
}

impl TitleMeans {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Rating => self.rating,
            Metric::PredictedRating => self.predicted_rating,
        }
    }
}

/// One `(title, metric, value)` row.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricPoint {
    pub title: String,
    pub metric: Metric,
    pub value: f64,
}

#[derive(Default)]
struct Accumulator {
    rating: (f64, usize),
    predicted: (f64, usize),
}

impl Accumulator {
    fn push(&mut self, record: &ReviewRecord) {
        add(&mut self.rating, record.rating);
        add(&mut self.predicted, record.predicted_rating);
    }
}

fn add(slot: &mut (f64, usize), value: Option<f64>) {
    if let Some(value) = value.filter(|v| !v.is_nan()) {
        slot.0 += value;
        slot.1 += 1;
    }
}

fn mean((sum, count): (f64, usize)) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

/// Group rows by title (sorted) and average both ratings, skipping missing values.
pub fn mean_ratings<'a, I>(rows: I) -> Vec<TitleMeans>
where
    I: IntoIterator<Item = &'a ReviewRecord>,
{
    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for record in rows {
        groups.entry(record.title.as_str()).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(title, acc)| TitleMeans {
            title: title.to_string(),
            rating: mean(acc.rating),
            predicted_rating: mean(acc.predicted),
        })
        .collect()
}

/// Reshape to long form, one row per title and metric. Metrics without a mean are skipped.
pub fn melt(means: &[TitleMeans]) -> Vec<MetricPoint> {
    means
        .iter()
        .flat_map(|group| {
            Metric::ALL.into_iter().filter_map(move |metric| {
                group.get(metric).map(|value| MetricPoint {
                    title: group.title.clone(),
                    metric,
                    value,
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn record(title: &str, rating: Option<f64>, predicted: Option<f64>) -> ReviewRecord {
        ReviewRecord {
            date_posted: datetime!(2022-02-02 0:00),
            title: title.into(),
            review: String::new(),
            playtime: Some(1.0),
            rating,
            predicted_rating: predicted,
        }
    }

    #[test]
    fn averages_per_title() {
        let rows = [
            record("A", Some(3.0), Some(2.5)),
            record("B", Some(1.0), Some(1.0)),
            record("A", Some(5.0), Some(4.5)),
        ];
        let means = mean_ratings(&rows);
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].title, "A");
        assert_eq!(means[0].rating, Some(4.0));
        assert_eq!(means[0].predicted_rating, Some(3.5));
        assert_eq!(means[1].title, "B");
        assert_eq!(means[1].rating, Some(1.0));
    }

    #[test]
    fn groups_come_out_sorted_by_title() {
        let rows = [
            record("Zelda", Some(5.0), Some(5.0)),
            record("Anno", Some(3.0), Some(3.0)),
            record("Mario", Some(4.0), Some(4.0)),
        ];
        let titles: Vec<String> = mean_ratings(&rows).into_iter().map(|m| m.title).collect();
        assert_eq!(titles, ["Anno", "Mario", "Zelda"]);
    }

    #[test]
    fn missing_values_are_ignored() {
        let rows = [
            record("A", Some(2.0), None),
            record("A", None, None),
            record("A", Some(4.0), None),
        ];
        let means = mean_ratings(&rows);
        assert_eq!(means[0].rating, Some(3.0));
        assert_eq!(means[0].predicted_rating, None);

        let points = melt(&means);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].metric, Metric::Rating);
    }

    #[test]
    fn melt_emits_one_row_per_title_and_metric() {
        let rows = [
            record("B", Some(2.0), Some(2.2)),
            record("A", Some(3.0), Some(3.1)),
            record("A", Some(5.0), Some(4.9)),
        ];
        let points = melt(&mean_ratings(&rows));
        let keys: Vec<(&str, &str)> = points
            .iter()
            .map(|p| (p.title.as_str(), p.metric.id()))
            .collect();
        assert_eq!(
            keys,
            [
                ("A", "rating"),
                ("A", "predicted_rating"),
                ("B", "rating"),
                ("B", "predicted_rating"),
            ]
        );
        assert_eq!(points[0].value, 4.0);
        assert!((points[1].value - 4.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let rows: Vec<ReviewRecord> = Vec::new();
        assert!(mean_ratings(&rows).is_empty());
        assert!(melt(&[]).is_empty());
    }
}
