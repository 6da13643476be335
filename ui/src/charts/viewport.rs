//! Pan/zoom state of the scatter chart, in data units.

use super::{nice_upper, ChartFrame, LinearScale};

const MIN_SPAN: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Viewport {
    /// Default domains when there is nothing to show.
    pub const EMPTY: Viewport = Viewport {
        x: (0.0, 1.0),
        y: (0.0, 5.0),
    };

    /// Domains starting at zero (or the smallest negative value) and ending at a
    /// round number above the largest value on each axis.
    pub fn fit(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut x = (0.0f64, f64::NEG_INFINITY);
        let mut y = (0.0f64, f64::NEG_INFINITY);
        for (px, py) in points {
            if !px.is_finite() || !py.is_finite() {
                continue;
            }
            x = (x.0.min(px), x.1.max(px));
            y = (y.0.min(py), y.1.max(py));
        }

        if !x.1.is_finite() {
            return Self::EMPTY;
        }

        Self {
            x: (x.0, nice_upper(x.1, 5).max(x.0 + MIN_SPAN)),
            y: (y.0, nice_upper(y.1, 5).max(y.0 + MIN_SPAN)),
        }
    }

    pub fn span_x(&self) -> f64 {
        self.x.1 - self.x.0
    }

    pub fn span_y(&self) -> f64 {
        self.y.1 - self.y.0
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x.0 + self.x.1) / 2.0, (self.y.0 + self.y.1) / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x.0 && x <= self.x.1 && y >= self.y.0 && y <= self.y.1
    }

    /// Scale both spans by `factor` (< 1 zooms in) keeping `anchor` in place.
    pub fn zoom(&mut self, factor: f64, anchor: (f64, f64)) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let scale = |(lo, hi): (f64, f64), a: f64| {
            let next = (a + (lo - a) * factor, a + (hi - a) * factor);
            if next.1 - next.0 < MIN_SPAN {
                (lo, hi)
            } else {
                next
            }
        };
        self.x = scale(self.x, anchor.0);
        self.y = scale(self.y, anchor.1);
    }

    /// Shift both domains by a data-space offset.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.x = (self.x.0 + dx, self.x.1 + dx);
        self.y = (self.y.0 + dy, self.y.1 + dy);
    }

    /// Data coordinates under `position` (SVG user units), clamped to the
    /// viewport so a pointer over the axes still anchors inside the plot.
    pub fn point_at(&self, position: (f64, f64), frame: &ChartFrame) -> (f64, f64) {
        let x_scale = LinearScale::new(self.x, (frame.plot_left(), frame.plot_right()));
        let y_scale = LinearScale::new(self.y, (frame.plot_bottom(), frame.plot_top()));
        (
            x_scale.invert(position.0).clamp(self.x.0, self.x.1),
            y_scale.invert(position.1).clamp(self.y.0, self.y.1),
        )
    }

    /// Pan by a pointer drag measured in SVG user units. Dragging right or down
    /// moves the content with the pointer.
    pub fn drag(&mut self, dx_px: f64, dy_px: f64, frame: &ChartFrame) {
        let dx = -dx_px * self.span_x() / frame.plot_width();
        let dy = dy_px * self.span_y() / frame.plot_height();
        self.pan(dx, dy);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_starts_at_zero_and_rounds_up() {
        let viewport = Viewport::fit([(12.0, 3.0), (578.0, 5.0), (40.0, 1.0)]);
        assert_eq!(viewport.x, (0.0, 600.0));
        assert_eq!(viewport.y, (0.0, 5.0));
    }

    #[test]
    fn fit_skips_non_finite_points() {
        let viewport = Viewport::fit([(f64::NAN, 3.0)]);
        assert_eq!(viewport, Viewport::EMPTY);
        assert_eq!(Viewport::fit(Vec::<(f64, f64)>::new()), Viewport::EMPTY);
    }

    #[test]
    fn zoom_keeps_the_anchor_fixed() {
        let mut viewport = Viewport {
            x: (0.0, 100.0),
            y: (0.0, 10.0),
        };
        viewport.zoom(0.5, (20.0, 4.0));
        assert_eq!(viewport.x, (10.0, 60.0));
        assert_eq!(viewport.y, (2.0, 7.0));

        viewport.zoom(2.0, (20.0, 4.0));
        assert_eq!(viewport.x, (0.0, 100.0));
        assert_eq!(viewport.y, (0.0, 10.0));
    }

    #[test]
    fn pointer_position_maps_to_data_space() {
        let frame = ChartFrame::default();
        let viewport = Viewport {
            x: (0.0, 100.0),
            y: (0.0, 10.0),
        };
        let plot_mid = (
            frame.plot_left() + frame.plot_width() / 2.0,
            frame.plot_top() + frame.plot_height() / 2.0,
        );

        assert_eq!(viewport.point_at(plot_mid, &frame), (50.0, 5.0));
        assert_eq!(
            viewport.point_at((frame.plot_left(), frame.plot_bottom()), &frame),
            (0.0, 0.0)
        );
        assert_eq!(viewport.point_at((0.0, frame.height), &frame), (0.0, 0.0));
    }

    #[test]
    fn zooming_at_the_pointer_keeps_it_over_the_same_data() {
        let frame = ChartFrame::default();
        let mut viewport = Viewport {
            x: (0.0, 100.0),
            y: (0.0, 10.0),
        };
        let pointer = (
            frame.plot_left() + frame.plot_width() / 4.0,
            frame.plot_bottom() - frame.plot_height() / 4.0,
        );
        let before = viewport.point_at(pointer, &frame);

        viewport.zoom(0.5, before);

        let after = viewport.point_at(pointer, &frame);
        assert!((after.0 - before.0).abs() < 1e-9);
        assert!((after.1 - before.1).abs() < 1e-9);
        assert_eq!(viewport.span_x(), 50.0);
    }

    #[test]
    fn zoom_ignores_invalid_factors() {
        let mut viewport = Viewport::EMPTY;
        viewport.zoom(0.0, (0.5, 2.5));
        viewport.zoom(f64::NAN, (0.5, 2.5));
        assert_eq!(viewport, Viewport::EMPTY);
    }

    #[test]
    fn pan_shifts_both_bounds() {
        let mut viewport = Viewport {
            x: (0.0, 100.0),
            y: (0.0, 5.0),
        };
        viewport.pan(10.0, -1.0);
        assert_eq!(viewport.x, (10.0, 110.0));
        assert_eq!(viewport.y, (-1.0, 4.0));
        assert_eq!(viewport.span_x(), 100.0);
    }

    #[test]
    fn drag_moves_content_with_the_pointer() {
        let frame = ChartFrame::default();
        let mut viewport = Viewport {
            x: (0.0, frame.plot_width()),
            y: (0.0, frame.plot_height()),
        };
        viewport.drag(10.0, 20.0, &frame);
        assert!((viewport.x.0 + 10.0).abs() < 1e-9);
        assert!((viewport.y.0 - 20.0).abs() < 1e-9);
    }
}
