use data::ReviewRecord;
use dioxus::prelude::*;

use crate::{core::format, i18n, t};

/// Rows rendered at most; the rest is summarized below the table.
pub const MAX_TABLE_ROWS: usize = 500;

#[component]
pub fn ReviewTableView(rows: Vec<ReviewRecord>) -> Element {
    let _language = i18n::use_language();
    let total = rows.len();
    let shown = total.min(MAX_TABLE_ROWS);
    let count_label = t!("table-count", count = total.to_string());

    rsx! {
        section { class: "explorer-card review-table",
            div { class: "explorer-card__header",
                h2 { {t!("table-title")} }
                span { class: "explorer-card__meta", "{count_label}" }
            }

            if rows.is_empty() {
                p { class: "explorer-card__placeholder", {t!("table-empty")} }
            } else {
                div { class: "review-table__scroll",
                    table { class: "review-table__grid",
                        thead {
                            tr {
                                th { {t!("col-date-posted")} }
                                th { {t!("col-title")} }
                                th { {t!("col-review")} }
                                th { class: "review-table__numeric", {t!("col-playtime")} }
                                th { class: "review-table__numeric", {t!("col-rating")} }
                                th { class: "review-table__numeric", {t!("col-predicted-rating")} }
                            }
                        }
                        tbody {
                            for (index, row) in rows.iter().take(shown).enumerate() {
                                tr { key: "{index}",
                                    td { class: "review-table__date", "{format::format_date(row.date_posted)}" }
                                    td { "{row.title}" }
                                    td { class: "review-table__review", "{row.review}" }
                                    td { class: "review-table__numeric", "{format::format_hours(row.playtime)}" }
                                    td { class: "review-table__numeric", "{format::format_optional(row.rating, 2)}" }
                                    td { class: "review-table__numeric", "{format::format_optional(row.predicted_rating, 2)}" }
                                }
                            }
                        }
                    }
                }
                if shown < total {
                    p { class: "review-table__truncated",
                        {t!("table-truncated", shown = shown.to_string(), total = total.to_string())}
                    }
                }
            }
        }
    }
}
