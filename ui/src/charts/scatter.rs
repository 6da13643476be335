//! Scatter layout: playtime on x, rating on y, one color per title.

use std::collections::BTreeMap;

use data::ReviewRecord;

use super::{
    axis_ticks, palette_color, AxisTick, ChartFrame, LinearScale, TooltipField, TooltipLine,
    Viewport,
};
use crate::core::format;

/// Mark area in square pixels.
pub const POINT_AREA: f64 = 60.0;
const TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Index of the source row in the slice passed to [`ScatterLayout::build`].
    pub row: usize,
    pub cx: f64,
    pub cy: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub title: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayout {
    pub frame: ChartFrame,
    pub radius: f64,
    pub points: Vec<ScatterPoint>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub legend: Vec<LegendEntry>,
}

impl ScatterPoint {
    /// Top of the mark, where the tooltip points.
    pub fn anchor(&self, radius: f64) -> (f64, f64) {
        (self.cx, self.cy - radius)
    }
}

impl ScatterLayout {
    /// Rows missing playtime or rating are not plotted; neither are rows outside `viewport`.
    pub fn build(rows: &[ReviewRecord], viewport: &Viewport, frame: ChartFrame) -> Self {
        let colors = title_colors(rows);
        let x_scale = LinearScale::new(viewport.x, (frame.plot_left(), frame.plot_right()));
        let y_scale = LinearScale::new(viewport.y, (frame.plot_bottom(), frame.plot_top()));

        let points = rows
            .iter()
            .enumerate()
            .filter_map(|(row, record)| {
                let (x, y) = coordinates(record)?;
                if !viewport.contains(x, y) {
                    return None;
                }
                Some(ScatterPoint {
                    row,
                    cx: x_scale.map(x),
                    cy: y_scale.map(y),
                    color: colors.get(record.title.as_str()).copied()?,
                })
            })
            .collect();

        let legend = colors
            .into_iter()
            .map(|(title, color)| LegendEntry {
                title: title.to_string(),
                color,
            })
            .collect();

        Self {
            frame,
            radius: (POINT_AREA / std::f64::consts::PI).sqrt(),
            points,
            x_ticks: axis_ticks(&x_scale, TICKS),
            y_ticks: axis_ticks(&y_scale, TICKS),
            legend,
        }
    }
}

/// Every field of the hovered review.
pub fn tooltip_lines(row: &ReviewRecord) -> Vec<TooltipLine> {
    vec![
        TooltipLine::new(TooltipField::Title, row.title.as_str()),
        TooltipLine::new(TooltipField::Review, row.review.as_str()),
        TooltipLine::new(TooltipField::Playtime, format::format_hours(row.playtime)),
        TooltipLine::new(
            TooltipField::Rating,
            format::format_optional(row.rating, 2),
        ),
        TooltipLine::new(
            TooltipField::PredictedRating,
            format::format_optional(row.predicted_rating, 2),
        ),
    ]
}

/// `(playtime, rating)` when both are present.
pub(crate) fn coordinates(record: &ReviewRecord) -> Option<(f64, f64)> {
    let x = record.playtime.filter(|v| v.is_finite())?;
    let y = record.rating.filter(|v| v.is_finite())?;
    Some((x, y))
}

/// Titles sorted alphabetically, each assigned the next palette color.
fn title_colors(rows: &[ReviewRecord]) -> BTreeMap<&str, &'static str> {
    let mut titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    titles.sort_unstable();
    titles.dedup();
    titles
        .into_iter()
        .enumerate()
        .map(|(i, title)| (title, palette_color(i)))
        .collect()
}

impl Viewport {
    /// Fit the viewport to the plottable rows.
    pub fn fit_rows(rows: &[ReviewRecord]) -> Self {
        Self::fit(rows.iter().filter_map(coordinates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn record(title: &str, playtime: Option<f64>, rating: Option<f64>) -> ReviewRecord {
        ReviewRecord {
            date_posted: datetime!(2020-01-01 0:00),
            title: title.into(),
            review: String::new(),
            playtime,
            rating,
            predicted_rating: rating,
        }
    }

    #[test]
    fn one_point_per_plottable_row() {
        let rows = vec![
            record("B", Some(10.0), Some(4.0)),
            record("A", Some(0.0), Some(1.0)),
            record("A", None, Some(3.0)),
            record("B", Some(5.0), None),
        ];
        let viewport = Viewport::fit_rows(&rows);
        let layout = ScatterLayout::build(&rows, &viewport, ChartFrame::default());

        assert_eq!(layout.points.len(), 2);
        assert_eq!(layout.points[0].row, 0);
        assert_eq!(layout.points[1].row, 1);
        assert_eq!(
            layout.legend.iter().map(|l| l.title.as_str()).collect::<Vec<_>>(),
            ["A", "B"]
        );
        assert_eq!(layout.points[1].color, layout.legend[0].color);
        assert!((layout.radius * layout.radius * std::f64::consts::PI - POINT_AREA).abs() < 1e-9);
    }

    #[test]
    fn origin_maps_to_the_bottom_left_corner() {
        let rows = vec![record("A", Some(0.0), Some(0.0)), record("A", Some(10.0), Some(5.0))];
        let frame = ChartFrame::default();
        let layout = ScatterLayout::build(&rows, &Viewport::fit_rows(&rows), frame);
        assert_eq!(layout.points[0].cx, frame.plot_left());
        assert_eq!(layout.points[0].cy, frame.plot_bottom());
        assert_eq!(layout.points[1].cx, frame.plot_right());
        assert_eq!(layout.points[1].cy, frame.plot_top());
    }

    #[test]
    fn zoomed_out_points_are_clipped() {
        let rows = vec![record("A", Some(1.0), Some(1.0)), record("A", Some(90.0), Some(5.0))];
        let viewport = Viewport {
            x: (0.0, 50.0),
            y: (0.0, 5.0),
        };
        let layout = ScatterLayout::build(&rows, &viewport, ChartFrame::default());
        assert_eq!(layout.points.len(), 1);
        assert_eq!(layout.points[0].row, 0);
    }

    #[test]
    fn tooltip_carries_every_review_field() {
        let mut row = record("Celeste", Some(12.5), Some(5.0));
        row.review = "tight controls".into();
        row.predicted_rating = Some(4.333);

        let lines = tooltip_lines(&row);
        let fields: Vec<TooltipField> = lines.iter().map(|line| line.field).collect();
        let values: Vec<&str> = lines.iter().map(|line| line.value.as_str()).collect();

        assert_eq!(
            fields,
            [
                TooltipField::Title,
                TooltipField::Review,
                TooltipField::Playtime,
                TooltipField::Rating,
                TooltipField::PredictedRating,
            ]
        );
        assert_eq!(values, ["Celeste", "tight controls", "12.5", "5", "4.33"]);
    }

    #[test]
    fn tooltip_marks_missing_numbers() {
        let row = record("A", None, None);
        let lines = tooltip_lines(&row);
        assert_eq!(lines[2].value, format::MISSING);
        assert_eq!(lines[3].value, format::MISSING);
    }
}
