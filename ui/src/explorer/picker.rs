use data::TitleSelection;
use dioxus::prelude::*;

use crate::{i18n, t};

/// Checkbox list of every title in file order.
#[component]
pub fn TitlePicker(titles: Vec<String>, selection: Signal<TitleSelection>) -> Element {
    let _language = i18n::use_language();
    let selected = selection();
    let total = titles.len();
    let count_label = t!(
        "picker-count",
        selected = selected.len().to_string(),
        total = total.to_string()
    );
    let all_titles = titles.clone();

    rsx! {
        section { class: "explorer-card picker",
            div { class: "explorer-card__header",
                h2 { {t!("picker-label")} }
                span { class: "explorer-card__meta", "{count_label}" }
            }

            div { class: "picker__actions",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: selected.len() == total,
                    onclick: move |_| {
                        selection.write().select_all(all_titles.iter().map(String::as_str));
                    },
                    {t!("picker-select-all")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: selected.is_empty(),
                    onclick: move |_| selection.write().clear(),
                    {t!("picker-clear")}
                }
            }

            ul { class: "picker__options",
                for title in titles.into_iter() {
                    {render_option(title.clone(), selected.contains(&title), selection)}
                }
            }
        }
    }
}

fn render_option(title: String, checked: bool, mut selection: Signal<TitleSelection>) -> Element {
    let toggled = title.clone();
    let class = if checked {
        "picker__option picker__option--checked"
    } else {
        "picker__option"
    };
    rsx! {
        li {
            key: "{title}",
            class: "{class}",
            label {
                input {
                    r#type: "checkbox",
                    checked: checked,
                    onchange: move |_| {
                        selection.write().toggle(&toggled);
                    },
                }
                span { "{title}" }
            }
        }
    }
}
