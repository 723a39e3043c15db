//! Localized UI chrome for `insights-ui`.
//!
//! Chart data labels stay in English; everything around them (navbar, section
//! headings, theme toggle, placeholders) is looked up through Fluent:
//! - `i18n-embed` selects the language and loads bundles
//! - `rust-embed` embeds the `.ftl` files at compile time
//! - `i18n-embed-fl` checks keys at compile time through `fl!`
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/insights-ui.ftl   (fallback/reference)
//!   es-ES/insights-ui.ftl
//! ```
//!
//! Usage:
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let label = crate::t!("nav-factors");
//! ```
//!
//! A new locale is a copy of `en-US/insights-ui.ftl` under `i18n/<lang-id>/`
//! with every value translated; `tests/i18n_missing_keys.rs` keeps the
//! locales complete.
//!
//! Desktop builds ask the OS for preferred languages, web builds read
//! `navigator.languages`. Assets are always embedded on wasm (`debug-embed`).
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::{fluent::FluentLanguageLoader, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Translation shorthand routing through the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-factors")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "insights-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    FluentLanguageLoader::new(DOMAIN, langid!("en-US"))
});

static INIT: Once = Once::new();

/// Loads the bundles for the user's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language the loader currently resolves messages in.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Subscribes the calling component to the platform's language code signal
/// (`Signal<String>` context) and returns the active language.
///
/// Components whose localized text reaches children through props call this
/// so a language switch re-renders them in place.
pub fn use_language() -> String {
    match try_use_context::<Signal<String>>() {
        Some(code) => code(),
        None => current_language(),
    }
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
