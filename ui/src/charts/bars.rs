//! Grouped bar chart layout: one band per title, one bar per metric inside it.

use data::{Metric, MetricPoint};

use super::{
    axis_ticks, nice_upper, palette_color, AxisTick, BandScale, ChartFrame, LinearScale,
    TooltipField, TooltipLine,
};
use crate::core::format;

const BAND_PADDING: f64 = 0.2;
const Y_TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub title: String,
    pub metric: Metric,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

impl Bar {
    /// Top center, where the tooltip points.
    pub fn anchor(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y)
    }
}

/// Title, then the metric with its mean.
pub fn tooltip_lines(bar: &Bar) -> Vec<TooltipLine> {
    vec![
        TooltipLine::new(TooltipField::Title, bar.title.as_str()),
        TooltipLine::new(
            TooltipField::Metric(bar.metric),
            format::format_score(bar.value, 2),
        ),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub frame: ChartFrame,
    pub bars: Vec<Bar>,
    /// Title and the x position of its band center.
    pub categories: Vec<(String, f64)>,
    pub y_ticks: Vec<AxisTick>,
}

/// Color channel of the bar chart.
pub fn metric_color(metric: Metric) -> &'static str {
    let index = Metric::ALL
        .iter()
        .position(|m| *m == metric)
        .unwrap_or_default();
    palette_color(index)
}

impl BarLayout {
    pub fn build(points: &[MetricPoint], frame: ChartFrame) -> Self {
        let mut titles: Vec<String> = Vec::new();
        for point in points {
            if !titles.contains(&point.title) {
                titles.push(point.title.clone());
            }
        }

        let band = BandScale::new(
            titles,
            (frame.plot_left(), frame.plot_right()),
            BAND_PADDING,
        );

        let max_value = points
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .fold(1.0f64, f64::max);
        let y_scale = LinearScale::new(
            (0.0, nice_upper(max_value, Y_TICKS)),
            (frame.plot_bottom(), frame.plot_top()),
        );

        let slots = Metric::ALL.len() as f64;
        let bar_width = band.bandwidth() / slots;

        let bars = points
            .iter()
            .filter(|p| p.value.is_finite())
            .filter_map(|point| {
                let left = band.position(&point.title)?;
                let slot = Metric::ALL.iter().position(|m| *m == point.metric)? as f64;
                let top = y_scale.map(point.value.max(0.0));
                Some(Bar {
                    title: point.title.clone(),
                    metric: point.metric,
                    value: point.value,
                    x: left + slot * bar_width,
                    y: top,
                    width: bar_width,
                    height: frame.plot_bottom() - top,
                    color: metric_color(point.metric),
                })
            })
            .collect();

        let categories = band
            .categories()
            .iter()
            .filter_map(|title| band.center(title).map(|x| (title.clone(), x)))
            .collect();

        Self {
            frame,
            bars,
            categories,
            y_ticks: axis_ticks(&y_scale, Y_TICKS),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
