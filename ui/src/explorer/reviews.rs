use data::ReviewRecord;
use dioxus::prelude::*;

use crate::{core::format, i18n, t};

/// Collapsible list of every filtered review with its full text.
#[component]
pub fn ReviewTextPanel(rows: Vec<ReviewRecord>) -> Element {
    let _language = i18n::use_language();
    let mut expanded = use_signal(|| false);
    let open = expanded();
    let toggle_label = if open {
        t!("reviews-hide")
    } else {
        t!("reviews-show")
    };

    rsx! {
        section { class: "explorer-card reviews",
            div { class: "explorer-card__header",
                h2 { {t!("reviews-title")} }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    aria_expanded: "{open}",
                    onclick: move |_| expanded.toggle(),
                    "{toggle_label}"
                }
            }

            if open {
                if rows.is_empty() {
                    p { class: "explorer-card__placeholder", {t!("table-empty")} }
                } else {
                    ol { class: "reviews__list",
                        for (index, row) in rows.iter().enumerate() {
                            {render_review(index, row)}
                        }
                    }
                }
            }
        }
    }
}

fn render_review(index: usize, row: &ReviewRecord) -> Element {
    let playtime = t!(
        "reviews-playtime",
        hours = format::format_hours(row.playtime)
    );
    let ratings = t!(
        "reviews-rating",
        rating = format::format_optional(row.rating, 2),
        predicted = format::format_optional(row.predicted_rating, 2)
    );

    rsx! {
        li { key: "{index}", class: "reviews__item",
            div { class: "reviews__heading",
                h3 { class: "reviews__title", "{row.title}" }
                span { class: "reviews__date", "{format::format_date(row.date_posted)}" }
            }
            div { class: "reviews__meta",
                span { "{playtime}" }
                span { "{ratings}" }
            }
            blockquote { class: "reviews__text", "{row.review}" }
        }
    }
}
