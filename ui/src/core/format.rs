//! Formatting helpers for presenting review fields.

use time::PrimitiveDateTime;

/// Placeholder shown for missing values.
pub const MISSING: &str = "—";

/// Playtime hours without trailing zeros: `12`, `12.5`, `0.25`.
pub fn format_hours(value: Option<f64>) -> String {
    format_optional(value, 2)
}

/// Ratings and averages, trimmed to at most `decimals` places.
pub fn format_score(value: f64, decimals: usize) -> String {
    format_trimmed(value, decimals)
}

pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format_trimmed(v, decimals),
        _ => MISSING.to_string(),
    }
}

/// Calendar date only, `YYYY-MM-DD`.
pub fn format_date(value: PrimitiveDateTime) -> String {
    data::format_date(value.date())
}

fn format_trimmed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    let fixed = format!("{value:.decimals$}");
    if fixed.contains('.') {
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_hours(Some(12.0)), "12");
        assert_eq!(format_hours(Some(12.50)), "12.5");
        assert_eq!(format_hours(Some(0.254)), "0.25");
        assert_eq!(format_hours(None), MISSING);
        assert_eq!(format_score(3.6666, 2), "3.67");
        assert_eq!(format_score(4.0, 0), "4");
    }

    #[test]
    fn missing_values_use_placeholder() {
        assert_eq!(format_optional(None, 2), MISSING);
        assert_eq!(format_optional(Some(f64::NAN), 2), MISSING);
        assert_eq!(format_optional(Some(4.26), 1), "4.3");
    }

    #[test]
    fn dates_drop_the_time() {
        assert_eq!(format_date(datetime!(2019-02-03 14:30)), "2019-02-03");
        assert_eq!(format_date(datetime!(987-11-30 00:00)), "0987-11-30");
    }
}
