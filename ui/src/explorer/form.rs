use data::NewReview;
use dioxus::prelude::*;

use crate::{explorer::use_explorer_context, i18n, t};

const DEFAULT_RATING: i64 = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Saved(String),
    Error(String),
}

/// Parse the raw form fields. An empty playtime counts as zero hours.
pub(crate) fn build_review(
    title: &str,
    review: &str,
    playtime: &str,
    rating: i64,
) -> data::Result<NewReview> {
    let playtime = playtime.trim();
    let hours = if playtime.is_empty() {
        0.0
    } else {
        playtime.parse::<f64>().unwrap_or(f64::NAN)
    };
    NewReview::new(title, review, hours, rating)
}

/// Form that appends a review to the CSV through the shared cache.
#[component]
pub fn NewReviewForm() -> Element {
    let _language = i18n::use_language();
    let ctx = use_explorer_context();

    let mut title = use_signal(String::new);
    let mut review = use_signal(String::new);
    let mut playtime = use_signal(|| "0".to_string());
    let mut rating = use_signal(|| DEFAULT_RATING);
    let mut status = use_signal(FormStatus::default);
    let (min_rating, max_rating) = (NewReview::MIN_RATING, NewReview::MAX_RATING);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let parsed = build_review(&title.peek(), &review.peek(), &playtime.peek(), *rating.peek());
        let submitted = match parsed {
            Ok(submitted) => submitted,
            Err(err) => {
                tracing::warn!(error = %err, "rejected review input");
                status.set(FormStatus::Error(t!("form-error", error = err.to_string())));
                return;
            }
        };

        match ctx.cache.append(submitted) {
            Ok(_) => {
                title.set(String::new());
                review.set(String::new());
                playtime.set("0".to_string());
                rating.set(DEFAULT_RATING);
                status.set(FormStatus::Saved(t!("form-saved")));
            }
            Err(err) => {
                tracing::error!(
                    path = %ctx.cache.path().display(),
                    error = %err,
                    "failed to append review"
                );
                status.set(FormStatus::Error(t!("form-error", error = err.to_string())));
            }
        }
    };

    rsx! {
        section { class: "explorer-card review-form",
            div { class: "explorer-card__header",
                h2 { {t!("form-title")} }
            }

            form { class: "review-form__fields", onsubmit: on_submit,
                label { class: "review-form__field",
                    span { {t!("form-game")} }
                    input {
                        r#type: "text",
                        value: "{title()}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                }
                label { class: "review-form__field",
                    span { {t!("form-review")} }
                    textarea {
                        rows: "4",
                        value: "{review()}",
                        oninput: move |evt| review.set(evt.value()),
                    }
                }
                label { class: "review-form__field",
                    span { {t!("form-playtime")} }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "any",
                        value: "{playtime()}",
                        oninput: move |evt| playtime.set(evt.value()),
                    }
                }
                label { class: "review-form__field",
                    span { {t!("form-rating")} }
                    div { class: "review-form__rating",
                        input {
                            r#type: "range",
                            min: "{min_rating}",
                            max: "{max_rating}",
                            step: "1",
                            value: "{rating()}",
                            oninput: move |evt| {
                                if let Ok(value) = evt.value().parse::<i64>() {
                                    rating.set(value);
                                }
                            },
                        }
                        span { class: "review-form__rating-value", "{rating()}" }
                    }
                }

                div { class: "review-form__actions",
                    button { r#type: "submit", class: "button button--primary", {t!("form-submit")} }
                }
            }

            match status() {
                FormStatus::Idle => rsx! {},
                FormStatus::Saved(message) => rsx! {
                    p { class: "review-form__status review-form__status--saved", role: "status", "{message}" }
                },
                FormStatus::Error(message) => rsx! {
                    p { class: "review-form__status review-form__status--error", role: "alert", "{message}" }
                },
            }
        }
    }
}
