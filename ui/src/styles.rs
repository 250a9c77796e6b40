//! Global stylesheets, registered once per process by `AppRoot`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

const BASE_CSS: Asset = asset!("/assets/styles/globals.css");
const BLOG_CSS: Asset = asset!("/assets/styles/blog.css");
const REMIXICON_CSS: &str = "https://cdn.jsdelivr.net/npm/remixicon@2.5.0/fonts/remixicon.css";
const NIGHT_OWL_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/night-owl.min.css";

#[derive(Debug, Clone, PartialEq)]
pub enum StyleSource {
    /// Shipped with the app through the asset pipeline.
    Bundled(Asset),
    /// Loaded from a CDN as-is.
    Remote(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub name: &'static str,
    pub source: StyleSource,
}

impl StyleSheet {
    pub fn href(&self) -> String {
        match &self.source {
            StyleSource::Bundled(asset) => asset.to_string(),
            StyleSource::Remote(url) => url.to_string(),
        }
    }
}

/// Base styles first; later sheets may override them.
pub static GLOBAL_STYLES: [StyleSheet; 4] = [
    StyleSheet {
        name: "base",
        source: StyleSource::Bundled(BASE_CSS),
    },
    StyleSheet {
        name: "blog",
        source: StyleSource::Bundled(BLOG_CSS),
    },
    StyleSheet {
        name: "remixicon",
        source: StyleSource::Remote(REMIXICON_CSS),
    },
    StyleSheet {
        name: "night-owl",
        source: StyleSource::Remote(NIGHT_OWL_CSS),
    },
];

static REGISTER: Once = Once::new();
static REGISTRATIONS: AtomicUsize = AtomicUsize::new(0);

/// Register the global stylesheets (idempotent) and return them in load order.
pub fn register() -> &'static [StyleSheet] {
    REGISTER.call_once(|| {
        REGISTRATIONS.fetch_add(1, Ordering::SeqCst);
        info!(count = GLOBAL_STYLES.len(), "registered global stylesheets");
    });
    &GLOBAL_STYLES
}

/// How many times registration actually ran in this process (0 or 1).
pub fn registrations() -> usize {
    REGISTRATIONS.load(Ordering::SeqCst)
}
