use dioxus::prelude::*;

use crate::{
    charts::{ChartFrame, TooltipField, TooltipLine},
    i18n, t,
};

use super::bar_chart::metric_label;

/// Hover card drawn over a chart. `anchor` is in SVG user units of `frame`;
/// the chart wrapper keeps the aspect ratio so percentages line up.
#[component]
pub(crate) fn ChartTooltip(
    lines: Vec<TooltipLine>,
    anchor: (f64, f64),
    frame: ChartFrame,
) -> Element {
    let _language = i18n::use_language();
    let (left, top) = frame.percent(anchor);

    rsx! {
        div {
            class: "explorer-chart__tooltip",
            style: "left: {left}%; top: {top}%;",
            for (index, line) in lines.iter().enumerate() {
                div { key: "{index}", class: "{line_class(line.field)}", "{line_text(line)}" }
            }
        }
    }
}

fn field_label(field: TooltipField) -> Option<String> {
    match field {
        TooltipField::Title | TooltipField::Review => None,
        TooltipField::Metric(metric) => Some(metric_label(metric)),
        TooltipField::Playtime => Some(t!("col-playtime")),
        TooltipField::Rating => Some(t!("col-rating")),
        TooltipField::PredictedRating => Some(t!("col-predicted-rating")),
    }
}

fn line_text(line: &TooltipLine) -> String {
    match field_label(line.field) {
        Some(label) => format!("{label}: {}", line.value),
        None => line.value.clone(),
    }
}

fn line_class(field: TooltipField) -> &'static str {
    match field {
        TooltipField::Title => "explorer-chart__tooltip-title",
        TooltipField::Review => "explorer-chart__tooltip-review",
        _ => "explorer-chart__tooltip-line",
    }
}
