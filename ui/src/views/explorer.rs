use data::{filter_by_titles, mean_ratings, melt, ReviewRecord, TitleSelection};
use dioxus::prelude::*;

use crate::explorer::{
    use_explorer_context, ExplorerState, NewReviewForm, PlaytimeScatter, RatingBarChart,
    ReviewTableView, ReviewTextPanel, TitlePicker,
};
use crate::{i18n, t};

#[component]
pub fn Explorer() -> Element {
    let _language = i18n::use_language();

    let ctx = use_explorer_context();
    let default_count = ctx.config.default_title_count;
    let source = ctx.cache.path().display().to_string();

    let mut state = use_signal({
        let cache = ctx.cache.clone();
        move || ExplorerState::load(&cache)
    });
    let mut selection = use_signal(|| {
        state
            .peek()
            .table
            .as_ref()
            .map(|table| TitleSelection::from_titles(table.default_selection(default_count)))
            .unwrap_or_default()
    });

    let rows = use_memo(move || {
        let state = state.read();
        let selection = selection.read();
        match state.table.as_ref() {
            Some(table) => filter_by_titles(table, &selection)
                .into_iter()
                .cloned()
                .collect::<Vec<ReviewRecord>>(),
            None => Vec::new(),
        }
    });
    let points = use_memo(move || melt(&mean_ratings(rows.read().iter())));

    let reload = {
        let cache = ctx.cache.clone();
        move |_: MouseEvent| {
            let had_table = state.peek().table.is_some();
            let next = ExplorerState::reload(&cache);
            // First successful load after a failure: start from the default titles.
            if !had_table {
                if let Some(table) = next.table.as_ref() {
                    selection.set(TitleSelection::from_titles(
                        table.default_selection(default_count),
                    ));
                }
            }
            state.set(next);
        }
    };

    let snapshot = state();
    let titles: Vec<String> = snapshot
        .table
        .as_ref()
        .map(|table| table.titles().into_iter().map(String::from).collect())
        .unwrap_or_default();
    let source_label = t!("explorer-source", path = source);

    rsx! {
        section { class: "page page-explorer",
            div { class: "explorer__header",
                div {
                    h1 { {t!("explorer-title")} }
                    p { {t!("explorer-intro")} }
                    p { class: "explorer__source", "{source_label}" }
                }
                button {
                    r#type: "button",
                    class: "button button--accent",
                    onclick: reload,
                    {t!("explorer-reload")}
                }
            }

            if let Some(error) = snapshot.error.clone() {
                div { class: "explorer-card explorer-error", role: "alert",
                    h2 { {t!("explorer-load-error-title")} }
                    pre { class: "explorer-error__message", "{error}" }
                    p { {t!("explorer-load-error-hint")} }
                }
            } else {
                TitlePicker { titles: titles, selection: selection }
                ReviewTableView { rows: rows() }
                div { class: "explorer__charts",
                    RatingBarChart { points: points() }
                    PlaytimeScatter { rows: rows() }
                }
                ReviewTextPanel { rows: rows() }
                NewReviewForm {}
            }
        }
    }
}
