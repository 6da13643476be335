//! Chart geometry for the explorer: scales, pan/zoom state and the layouts
//! of the grouped bar chart and the playtime scatter. Everything here is pure
//! so it can be tested without a renderer; the SVG markup lives in
//! `crate::explorer`.

pub mod bars;
mod scale;
pub mod scatter;
mod viewport;

pub use bars::{metric_color, Bar, BarLayout};
pub use scale::{nice_step, nice_upper, BandScale, LinearScale};
pub use scatter::{LegendEntry, ScatterLayout, ScatterPoint, POINT_AREA};
pub use viewport::Viewport;

use data::Metric;

use crate::core::format;

/// Categorical color scheme (the Tableau 10 palette used by Vega-Lite).
pub const PALETTE: [&str; 10] = [
    "#4c78a8", "#f58518", "#e45756", "#72b7b2", "#54a24b", "#eeca3b", "#b279a2", "#ff9da6",
    "#9d755d", "#bab0ac",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Default chart size in SVG user units. Charts scale to their container width.
pub const CHART_WIDTH: f64 = 720.0;
pub const CHART_HEIGHT: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Outer size of a chart plus the margins reserved for axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin {
                top: 16.0,
                right: 16.0,
                bottom: 72.0,
                left: 56.0,
            },
        }
    }

    pub fn plot_left(&self) -> f64 {
        self.margin.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin.right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin.bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.plot_right() - self.plot_left()).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.plot_bottom() - self.plot_top()).max(1.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Position as percentages of the chart size, for HTML overlays.
    pub fn percent(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x / self.width * 100.0, y / self.height * 100.0)
    }

    /// Convert an offset inside the element drawn at `rendered` CSS pixels into
    /// user units. The view box is letterboxed as with the default
    /// `xMidYMid meet`.
    pub fn to_user_units(&self, offset: (f64, f64), rendered: (f64, f64)) -> (f64, f64) {
        let scale = (rendered.0 / self.width).min(rendered.1 / self.height);
        if !scale.is_finite() || scale <= 0.0 {
            return offset;
        }
        let pad_x = (rendered.0 - self.width * scale) / 2.0;
        let pad_y = (rendered.1 - self.height * scale) / 2.0;
        ((offset.0 - pad_x) / scale, (offset.1 - pad_y) / scale)
    }
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self::new(CHART_WIDTH, CHART_HEIGHT)
    }
}

/// What a tooltip line shows. The value is preformatted; the label is left to
/// the view so it follows the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipField {
    Title,
    Metric(Metric),
    Review,
    Playtime,
    Rating,
    PredictedRating,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine {
    pub field: TooltipField,
    pub value: String,
}

impl TooltipLine {
    fn new(field: TooltipField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// A labelled tick on a quantitative axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    /// Pixel position along the axis.
    pub position: f64,
    pub label: String,
}

pub(crate) fn axis_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: scale.map(value),
            label: format::format_score(value, 2),
        })
        .collect()
}
