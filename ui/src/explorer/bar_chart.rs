use data::{Metric, MetricPoint};
use dioxus::prelude::*;

use super::tooltip::ChartTooltip;
use crate::{
    charts::{bars, metric_color, BarLayout, ChartFrame},
    i18n, t,
};

pub(crate) fn metric_label(metric: Metric) -> String {
    match metric {
        Metric::Rating => t!("metric-rating"),
        Metric::PredictedRating => t!("metric-predicted-rating"),
    }
}

/// Grouped bars of the mean rating and mean predicted rating per title.
#[component]
pub fn RatingBarChart(points: Vec<MetricPoint>) -> Element {
    let _language = i18n::use_language();
    let frame = ChartFrame::default();
    let layout = BarLayout::build(&points, frame);
    let mut hovered = use_signal(|| None::<usize>);
    let hovered_bar = hovered().and_then(|index| layout.bars.get(index));
    let axis_x = t!("bar-axis-x");
    let axis_y = t!("bar-axis-y");

    let left = frame.plot_left();
    let right = frame.plot_right();
    let bottom = frame.plot_bottom();
    let tick_x = left - 8.0;
    let label_y = bottom + 14.0;
    let axis_x_pos = (left + frame.plot_width() / 2.0, frame.height - 6.0);
    let axis_y_mid = frame.plot_top() + frame.plot_height() / 2.0;

    rsx! {
        section { class: "explorer-card explorer-chart",
            div { class: "explorer-card__header",
                h2 { class: "explorer-chart__title", {t!("bar-title")} }
            }

            if layout.is_empty() {
                p { class: "explorer-card__placeholder", {t!("chart-empty")} }
            } else {
                div { class: "explorer-chart__frame",
                    svg {
                        class: "explorer-chart__canvas",
                        view_box: "{frame.view_box()}",

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

                        for (index, bar) in layout.bars.iter().enumerate() {
                            rect {
                                key: "{bar.title}-{bar.metric.id()}",
                                class: "explorer-chart__bar",
                                x: "{bar.x}",
                                y: "{bar.y}",
                                width: "{bar.width}",
                                height: "{bar.height}",
                                fill: "{bar.color}",
                                onmouseenter: move |_| hovered.set(Some(index)),
                                onmouseleave: move |_| hovered.set(None),
                            }
                        }

                        line {
                            class: "explorer-chart__axis",
                            x1: "{left}",
                            x2: "{right}",
                            y1: "{bottom}",
                            y2: "{bottom}",
                        }

                        for (title, center) in layout.categories.iter() {
                            text {
                                key: "x{title}",
                                class: "explorer-chart__tick",
                                x: "{center}",
                                y: "{label_y}",
                                text_anchor: "end",
                                transform: "rotate(-30 {center} {label_y})",
                                "{title}"
                            }
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
                    if let Some(bar) = hovered_bar {
                        ChartTooltip {
                            lines: bars::tooltip_lines(bar),
                            anchor: bar.anchor(),
                            frame,
                        }
                    }
                }

                ul { class: "explorer-chart__legend",
                    for metric in Metric::ALL {
                        li { key: "{metric.id()}",
                            span {
                                class: "explorer-chart__legend-swatch",
                                style: "background: {metric_color(metric)}",
                            }
                            "{metric_label(metric)}"
                        }
                    }
                }
            }
        }
    }
}
