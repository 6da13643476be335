//! Typed review schema shared by the loader and the append writer.

use time::{macros::format_description, Date, PrimitiveDateTime, Time};

use crate::error::{Result, ReviewError};

/// Every column the review CSV is known to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    DatePosted,
    Funny,
    Helpful,
    HourPlayed,
    Recommendation,
    Review,
    Title,
    Rating,
    Playtime,
    ReviewLength,
    WordCount,
    PredictedRating,
}

impl Column {
    /// Canonical column order, used when seeding an empty file.
    pub const ALL: [Column; 12] = [
        Column::DatePosted,
        Column::Funny,
        Column::Helpful,
        Column::HourPlayed,
        Column::Recommendation,
        Column::Review,
        Column::Title,
        Column::Rating,
        Column::Playtime,
        Column::ReviewLength,
        Column::WordCount,
        Column::PredictedRating,
    ];

    /// Columns the dashboard reads back. A file without any of these fails to load.
    pub const REQUIRED: [Column; 6] = [
        Column::DatePosted,
        Column::Title,
        Column::Review,
        Column::Playtime,
        Column::Rating,
        Column::PredictedRating,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::DatePosted => "date_posted",
            Column::Funny => "funny",
            Column::Helpful => "helpful",
            Column::HourPlayed => "hour_played",
            Column::Recommendation => "recommendation",
            Column::Review => "review",
            Column::Title => "title",
            Column::Rating => "rating",
            Column::Playtime => "playtime",
            Column::ReviewLength => "review_length",
            Column::WordCount => "word_count",
            Column::PredictedRating => "predicted_rating",
        }
    }

    /// Resolve a header cell. Surrounding whitespace is ignored; case is not.
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Column::ALL.into_iter().find(|column| column.name() == header)
    }
}

/// One review as read from the CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub date_posted: PrimitiveDateTime,
    pub title: String,
    pub review: String,
    /// Hours played. Empty cells load as `None`, as do the two ratings.
    pub playtime: Option<f64>,
    /// User rating, 1–5.
    pub rating: Option<f64>,
    /// Rating produced upstream by the prediction model.
    pub predicted_rating: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Recommended,
    NotRecommended,
}

impl Recommendation {
    pub fn from_rating(rating: u8) -> Self {
        if rating >= 3 {
            Self::Recommended
        } else {
            Self::NotRecommended
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::NotRecommended => "Not Recommended",
        }
    }
}

/// A review submitted through the form, validated on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    title: String,
    review: String,
    playtime: f64,
    rating: u8,
}

impl NewReview {
    pub const MIN_RATING: i64 = 1;
    pub const MAX_RATING: i64 = 5;

    /// Title and review text are taken as-is, empty strings included.
    pub fn new(
        title: impl Into<String>,
        review: impl Into<String>,
        playtime: f64,
        rating: i64,
    ) -> Result<Self> {
        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&rating) {
            return Err(ReviewError::InvalidRating(rating));
        }
        if !playtime.is_finite() || playtime < 0.0 {
            return Err(ReviewError::InvalidPlaytime(playtime));
        }

        Ok(Self {
            title: title.into(),
            review: review.into(),
            playtime,
            rating: rating as u8,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    pub fn playtime(&self) -> f64 {
        self.playtime
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Expand into the full on-disk row for the given posting date.
    ///
    /// No model runs for new entries: the predicted rating mirrors the
    /// submitted rating.
    pub fn into_row(self, date_posted: Date) -> NewReviewRow {
        let review_length = self.review.chars().count();
        let word_count = self.review.split_whitespace().count();
        NewReviewRow {
            date_posted,
            funny: 0,
            helpful: 0,
            hour_played: self.playtime,
            recommendation: Recommendation::from_rating(self.rating),
            review_length,
            word_count,
            predicted_rating: f64::from(self.rating),
            rating: self.rating,
            playtime: self.playtime,
            review: self.review,
            title: self.title,
        }
    }
}

/// Every field written for a new review, including the derived write-only ones.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReviewRow {
    pub date_posted: Date,
    pub funny: u32,
    pub helpful: u32,
    pub hour_played: f64,
    pub recommendation: Recommendation,
    pub review: String,
    pub title: String,
    pub rating: u8,
    pub playtime: f64,
    pub review_length: usize,
    pub word_count: usize,
    pub predicted_rating: f64,
}

impl NewReviewRow {
    /// Cell text for `column`, formatted the way the loader reads it back.
    pub fn field(&self, column: Column) -> String {
        match column {
            Column::DatePosted => format_date(self.date_posted),
            Column::Funny => self.funny.to_string(),
            Column::Helpful => self.helpful.to_string(),
            Column::HourPlayed => self.hour_played.to_string(),
            Column::Recommendation => self.recommendation.as_str().to_string(),
            Column::Review => self.review.clone(),
            Column::Title => self.title.clone(),
            Column::Rating => self.rating.to_string(),
            Column::Playtime => self.playtime.to_string(),
            Column::ReviewLength => self.review_length.to_string(),
            Column::WordCount => self.word_count.to_string(),
            Column::PredictedRating => self.predicted_rating.to_string(),
        }
    }

    /// The record the loader will produce for this row.
    pub fn to_record(&self) -> ReviewRecord {
        ReviewRecord {
            date_posted: PrimitiveDateTime::new(self.date_posted, Time::MIDNIGHT),
            title: self.title.clone(),
            review: self.review.clone(),
            playtime: Some(self.playtime),
            rating: Some(f64::from(self.rating)),
            predicted_rating: Some(self.predicted_rating),
        }
    }
}

/// `YYYY-MM-DD`, the form the loader parses and the UI displays.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}
