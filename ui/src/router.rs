//! Routing capability shared components call into.
//!
//! `ui` does not know a platform's `Route` enum. A platform crate implements
//! [`SiteRouter`] over its own routes and registers it once with
//! [`register_router`] before rendering the root. Components then use the free
//! functions below, which fall back to plain anchors (full page loads) when no
//! router has been registered.
//!
//! ```ignore
//! struct WebRouter;
//! impl ui::router::SiteRouter for WebRouter { /* Route::from_str, Link, navigator() */ }
//!
//! fn App() -> Element {
//!     ui::router::register_router(WebRouter);
//!     rsx! { Router::<Route> {} }
//! }
//! ```
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

pub trait SiteRouter: Send + Sync + 'static {
    /// Whether `path` maps to a page the platform knows about.
    fn resolve(&self, path: &str) -> bool;

    /// Client-side navigation. Must be called from within the Dioxus runtime
    /// (event handlers, effects).
    fn navigate_to(&self, path: &str);

    /// A client-side link to `path` whose only child is `label`.
    fn link(&self, path: &str, class: &str, label: &str) -> Element;
}

static ROUTER: OnceCell<Box<dyn SiteRouter>> = OnceCell::new();

/// Install the process-wide router. The first registration wins.
pub fn register_router(router: impl SiteRouter) {
    if ROUTER.set(Box::new(router)).is_err() {
        debug!("router already registered; keeping the first one");
    }
}

pub fn is_registered() -> bool {
    ROUTER.get().is_some()
}

pub fn resolve(path: &str) -> bool {
    ROUTER.get().is_some_and(|router| router.resolve(path))
}

pub fn navigate_to(path: &str) {
    match ROUTER.get() {
        Some(router) => router.navigate_to(path),
        None => warn!(path, "no router registered; navigation ignored"),
    }
}

pub fn link(path: &str, class: &str, label: &str) -> Element {
    match ROUTER.get() {
        Some(router) => router.link(path, class, label),
        None => rsx! {
            a { class: "{class}", href: "{path}", "{label}" }
        },
    }
}
