use data::ReviewRecord;
use dioxus::prelude::*;

use super::tooltip::ChartTooltip;
use crate::{
    charts::{scatter, ChartFrame, ScatterLayout, ScatterPoint, Viewport},
    i18n, t,
};

const ZOOM_STEP: f64 = 1.15;

/// A user-adjusted viewport, remembered together with the fitted viewport it
/// started from. When the rows change and the fit moves, the adjustment is
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Adjusted {
    fitted: Viewport,
    current: Viewport,
}

/// Playtime against rating, one point per row, colored by title.
#[component]
pub fn PlaytimeScatter(rows: Vec<ReviewRecord>) -> Element {
    let _language = i18n::use_language();
    let frame = ChartFrame::default();
    let fitted = Viewport::fit_rows(&rows);

    let mut adjusted = use_signal(|| None::<Adjusted>);
    let mut drag_from = use_signal(|| None::<(f64, f64)>);
    // Size and client position of the svg element, for pointer math.
    let mut rendered = use_signal(|| (frame.width, frame.height));
    let mut origin = use_signal(|| (0.0, 0.0));
    let hovered = use_signal(|| None::<usize>);
    let to_user_units = move |(x, y): (f64, f64)| {
        let (left, top) = origin();
        frame.to_user_units((x - left, y - top), rendered())
    };

    let viewport = current_viewport(adjusted(), fitted);
    let layout = ScatterLayout::build(&rows, &viewport, frame);
    let hovered_point = hovered().and_then(|row| {
        let point = layout.points.iter().find(|point| point.row == row)?;
        Some((rows.get(row)?, point))
    });

    let left = frame.plot_left();
    let right = frame.plot_right();
    let top = frame.plot_top();
    let bottom = frame.plot_bottom();
    let tick_x = left - 8.0;
    let tick_y = bottom + 18.0;
    let axis_x_pos = (left + frame.plot_width() / 2.0, frame.height - 24.0);
    let axis_y_mid = top + frame.plot_height() / 2.0;
    let axis_x = t!("scatter-axis-x");
    let axis_y = t!("scatter-axis-y");

    rsx! {
        section { class: "explorer-card explorer-chart",
            div { class: "explorer-card__header",
                h2 { class: "explorer-chart__title", {t!("scatter-title")} }
                span { class: "explorer-card__meta", {t!("scatter-hint")} }
            }

            if rows.is_empty() {
                p { class: "explorer-card__placeholder", {t!("chart-empty")} }
            } else {
                div { class: "explorer-chart__frame",
                    svg {
                        class: "explorer-chart__canvas explorer-chart__canvas--interactive",
                        view_box: "{frame.view_box()}",
                        onresize: move |evt| {
                            if let Ok(size) = evt.get_border_box_size() {
                                rendered.set((size.width, size.height));
                            }
                        },
                        onmouseenter: move |evt| {
                            let client = evt.client_coordinates();
                            let element = evt.element_coordinates();
                            origin.set((client.x - element.x, client.y - element.y));
                        },
                        onwheel: move |evt| {
                            evt.prevent_default();
                            let delta = evt.delta().strip_units().y;
                            if delta == 0.0 {
                                return;
                            }
                            let factor = if delta > 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
                            let client = evt.client_coordinates();
                            let pointer = to_user_units((client.x, client.y));
                            adjust(adjusted, fitted, |view| {
                                let anchor = view.point_at(pointer, &frame);
                                view.zoom(factor, anchor);
                            });
                        },
                        onmousedown: move |evt| {
                            let client = evt.client_coordinates();
                            drag_from.set(Some(to_user_units((client.x, client.y))));
                        },
                        onmousemove: move |evt| {
                            let Some((x0, y0)) = drag_from() else {
                                return;
                            };
                            let client = evt.client_coordinates();
                            let (x, y) = to_user_units((client.x, client.y));
                            drag_from.set(Some((x, y)));
                            adjust(adjusted, fitted, |view| view.drag(x - x0, y - y0, &frame));
                        },
                        onmouseup: move |_| drag_from.set(None),
                        onmouseleave: move |_| drag_from.set(None),
                        ondoubleclick: move |_| adjusted.set(None),

                        for tick in layout.y_ticks.iter() {
                            g { key: "y{tick.label}",
                                line {
                                    class: "explorer-chart__grid",
                                    x1: "{left}",
                                    x2: "{right}",
                                    y1: "{tick.position}",
                                    y2: "{tick.position}",
                                }
                                text {
                                    class: "explorer-chart__tick",
                                    x: "{tick_x}",
                                    y: "{tick.position}",
                                    text_anchor: "end",
                                    dominant_baseline: "middle",
                                    "{tick.label}"
                                }
                            }
                        }
                        for tick in layout.x_ticks.iter() {
                            g { key: "x{tick.label}",
                                line {
                                    class: "explorer-chart__grid",
                                    x1: "{tick.position}",
                                    x2: "{tick.position}",
                                    y1: "{top}",
                                    y2: "{bottom}",
                                }
                                text {
                                    class: "explorer-chart__tick",
                                    x: "{tick.position}",
                                    y: "{tick_y}",
                                    text_anchor: "middle",
                                    "{tick.label}"
                                }
                            }
                        }

                        for point in layout.points.iter() {
                            {render_point(point, layout.radius, hovered)}
                        }

                        line {
                            class: "explorer-chart__axis",
                            x1: "{left}",
                            x2: "{right}",
                            y1: "{bottom}",
                            y2: "{bottom}",
                        }
                        line {
                            class: "explorer-chart__axis",
                            x1: "{left}",
                            x2: "{left}",
                            y1: "{top}",
                            y2: "{bottom}",
                        }
                        text {
                            class: "explorer-chart__axis-label",
                            x: "{axis_x_pos.0}",
                            y: "{axis_x_pos.1}",
                            text_anchor: "middle",
                            "{axis_x}"
                        }
                        text {
                            class: "explorer-chart__axis-label",
                            x: "14",
                            y: "{axis_y_mid}",
                            text_anchor: "middle",
                            transform: "rotate(-90 14 {axis_y_mid})",
                            "{axis_y}"
                        }
                    }
                    if let Some((row, point)) = hovered_point {
                        ChartTooltip {
                            lines: scatter::tooltip_lines(row),
                            anchor: point.anchor(layout.radius),
                            frame,
                        }
                    }
                }

                ul { class: "explorer-chart__legend",
                    for entry in layout.legend.iter() {
                        li { key: "{entry.title}",
                            span {
                                class: "explorer-chart__legend-swatch",
                                style: "background: {entry.color}",
                            }
                            "{entry.title}"
                        }
                    }
                }
            }
        }
    }
}

fn current_viewport(adjusted: Option<Adjusted>, fitted: Viewport) -> Viewport {
    match adjusted {
        Some(view) if view.fitted == fitted => view.current,
        _ => fitted,
    }
}

/// Apply `change` to the viewport as it is now, which may be ahead of the
/// last render while a drag is in progress.
fn adjust(
    mut adjusted: Signal<Option<Adjusted>>,
    fitted: Viewport,
    change: impl FnOnce(&mut Viewport),
) {
    let mut current = current_viewport(*adjusted.peek(), fitted);
    change(&mut current);
    adjusted.set(Some(Adjusted { fitted, current }));
}

fn render_point(point: &ScatterPoint, radius: f64, mut hovered: Signal<Option<usize>>) -> Element {
    let row = point.row;
    rsx! {
        circle {
            key: "{row}",
            class: "explorer-chart__point",
            cx: "{point.cx}",
            cy: "{point.cy}",
            r: "{radius}",
            fill: "{point.color}",
            onmouseenter: move |_| hovered.set(Some(row)),
            onmouseleave: move |_| hovered.set(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_is_dropped_when_the_fit_changes() {
        let fitted = Viewport::EMPTY;
        let mut zoomed = fitted;
        zoomed.zoom(0.5, fitted.center());
        let adjusted = Some(Adjusted {
            fitted,
            current: zoomed,
        });

        assert_eq!(current_viewport(adjusted, fitted), zoomed);
        assert_eq!(current_viewport(None, fitted), fitted);

        let refitted = Viewport {
            x: (0.0, 100.0),
            y: (0.0, 5.0),
        };
        assert_eq!(current_viewport(adjusted, refitted), refitted);
    }
}
