//! Page copy translations.
//!
//! Fluent files are embedded from `i18n/<lang>/zakinadhif-ui.ftl`; `en-US` is
//! the fallback. Navigation labels are fixed text in `nav` and never pass
//! through here.
//!
//! Desktop/test builds request the OS locale list, wasm builds
//! `navigator.languages`.
use std::collections::HashMap;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

const DOMAIN: &str = "zakinadhif-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Select the languages the platform asks for. Runs once per process.
pub fn init() {
    INIT.call_once(|| select(&requested_languages()));
}

/// Load bundles for `requested`; anything not embedded falls back to en-US.
pub fn select(requested: &[LanguageIdentifier]) {
    match i18n_embed::select(&*LOADER, &Localizations, requested) {
        Ok(selected) => debug!(?selected, "selected site languages"),
        Err(err) => warn!(%err, "failed selecting languages; continuing with fallback"),
    }
}

pub fn tr(message_id: &str) -> String {
    LOADER.get(message_id)
}

/// `tr` with named Fluent arguments.
pub fn tr_args(message_id: &str, args: &[(&str, &str)]) -> String {
    let args: HashMap<&str, &str> = args.iter().copied().collect();
    LOADER.get_args(message_id, args)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
