//! CSV loader. Reads the whole file or fails; there is no partial load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime, Time, UtcOffset,
};

use crate::error::{Result, ReviewError};
use crate::record::{Column, ReviewRecord};
use crate::table::ReviewTable;

/// Load every review in `path`.
pub fn load_reviews(path: impl AsRef<Path>) -> Result<ReviewTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| ReviewError::io(path, err))?;
    let table = load_reviews_from_reader(file)?;
    tracing::info!(path = %path.display(), rows = table.len(), "loaded reviews");
    Ok(table)
}

/// Load reviews from any UTF-8 CSV source with a header row.
pub fn load_reviews_from_reader<R: Read>(reader: R) -> Result<ReviewTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let layout = ColumnLayout::resolve(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(layout.parse(&row)?);
    }

    Ok(ReviewTable::new(headers, records))
}

/// Header positions of the columns the loader reads.
struct ColumnLayout {
    date_posted: usize,
    title: usize,
    review: usize,
    playtime: usize,
    rating: usize,
    predicted_rating: usize,
}

impl ColumnLayout {
    fn resolve(headers: &[String]) -> Result<Self> {
        let find = |column: Column| {
            headers
                .iter()
                .position(|header| Column::from_header(header) == Some(column))
                .ok_or(ReviewError::MissingColumn(column.name()))
        };

        Ok(Self {
            date_posted: find(Column::DatePosted)?,
            title: find(Column::Title)?,
            review: find(Column::Review)?,
            playtime: find(Column::Playtime)?,
            rating: find(Column::Rating)?,
            predicted_rating: find(Column::PredictedRating)?,
        })
    }

    fn parse(&self, row: &StringRecord) -> Result<ReviewRecord> {
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();
        let cell = |index: usize| row.get(index).unwrap_or("");

        let raw_date = cell(self.date_posted);
        let date_posted = parse_date_posted(raw_date).ok_or_else(|| ReviewError::InvalidDate {
            line,
            value: raw_date.to_string(),
        })?;

        Ok(ReviewRecord {
            date_posted,
            title: cell(self.title).to_string(),
            review: cell(self.review).to_string(),
            playtime: parse_number(cell(self.playtime), Column::Playtime, line)?,
            rating: parse_number(cell(self.rating), Column::Rating, line)?,
            predicted_rating: parse_number(
                cell(self.predicted_rating),
                Column::PredictedRating,
                line,
            )?,
        })
    }
}

/// Empty cells are missing values; anything else must parse.
fn parse_number(raw: &str, column: Column, line: u64) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ReviewError::InvalidNumber {
            line,
            column: column.name(),
            value: raw.to_string(),
        })
}

/// Accepts plain dates, space- or `T`-separated date-times, and RFC 3339.
/// Offsets are normalized to UTC and then dropped.
pub(crate) fn parse_date_posted(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = Date::parse(raw, format_description!("[year]-[month]-[day]")) {
        return Some(PrimitiveDateTime::new(date, Time::MIDNIGHT));
    }

    let date_time_formats = [
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    ];
    for format in date_time_formats {
        if let Ok(parsed) = PrimitiveDateTime::parse(raw, format) {
            return Some(parsed);
        }
    }

    OffsetDateTime::parse(raw, &Rfc3339).ok().map(|ts| {
        let utc = ts.to_offset(UtcOffset::UTC);
        PrimitiveDateTime::new(utc.date(), utc.time())
    })
}
