//! Localized strings. Fluent files live in `i18n/<lang>/review-explorer-ui.ftl`
//! and are embedded at compile time; `en-US` is the fallback and reference.

use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::{fluent::FluentLanguageLoader, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `fl!` against the shared loader, so message ids and arguments are checked
/// at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

const DOMAIN: &str = "review-explorer-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback = FALLBACK
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default());
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Bidi isolation marks around placeables show up as stray glyphs in table cells.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Load the best match for the system languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        let requested = i18n_embed::DesktopLanguageRequester::requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(error = %err, "language selection failed, using {FALLBACK}");
        }
    });
}

/// Tag of the language strings are currently drawn from.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Switch languages at runtime. Unparsable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparsable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language folders embedded in the binary, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

/// Active language tag from the app-wide `Signal<String>`, if one is provided.
///
/// Reading it subscribes the calling component, so a switch re-renders every
/// view that calls this without remounting it.
pub fn use_language() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_languages_are_listed() {
        let langs = available_languages();
        assert_eq!(langs, ["en-US", "vi-VN"]);
    }

    #[test]
    fn placeholders_are_substituted() {
        init();
        let s = t!("table-count", count = "42");
        assert!(s.contains("42"));
    }

    #[test]
    fn unparsable_tags_leave_the_language_alone() {
        init();
        let before = current_language();
        assert!(set_language("not a tag!").is_ok());
        assert_eq!(current_language(), before);
    }
}
