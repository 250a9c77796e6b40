use dioxus::prelude::*;

use crate::i18n::{tr, tr_args};
use crate::router;

/// Catch-all page. `segments` are the unmatched path segments as parsed by the
/// platform router.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            h1 { {tr("not-found-title")} }
            p { class: "page__muted", {tr_args("not-found-path", &[("path", &path)])} }
            button {
                class: "button",
                r#type: "button",
                onclick: move |_| router::navigate_to("/"),
                {tr("not-found-home")}
            }
        }
    }
}
