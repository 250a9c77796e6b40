use crate::i18n;
use crate::nav::{NavEntry, NavTarget, LOGO, NAV_ENTRIES, SITE_TITLE};
use crate::router;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

const LINK_CLASS: &str = "navbar__link";

/// Site header: logo, title and the fixed navigation list. Link labels are
/// not localized; only the nav's accessible name is.
///
/// Internal entries are rendered by the registered [`router::SiteRouter`] so
/// they navigate client-side; the external entry is always a plain anchor.
/// The list is always in the markup. Below the breakpoint it is hidden by
/// `globals.css` only.
#[component]
pub fn Navbar() -> Element {
    i18n::init();

    debug!(router = router::is_registered(), "Navbar render");

    rsx! {
        header { id: "navbar", class: "navbar",
            div {
                class: "navbar__logo",
                aria_hidden: "true",
                style: "background-image: url('{LOGO}')",
            }
            div { class: "navbar__title", "{SITE_TITLE}" }
            nav { class: "navbar__nav", aria_label: i18n::tr("nav-label"),
                ul { class: "navbar__links",
                    for entry in NAV_ENTRIES {
                        li { key: "{entry.label}", class: "navbar__item", {nav_link(&entry)} }
                    }
                }
            }
        }
    }
}

fn nav_link(entry: &NavEntry) -> Element {
    let label = entry.label;
    match entry.target {
        NavTarget::Internal(path) => router::link(path, LINK_CLASS, label),
        NavTarget::External(url) => rsx! {
            a { class: LINK_CLASS, href: url, "{label}" }
        },
    }
}
