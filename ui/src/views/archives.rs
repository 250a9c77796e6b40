use dioxus::prelude::*;

use crate::i18n::tr;

/// "Writing" in the navigation.
#[component]
pub fn Archives() -> Element {
    rsx! {
        section { class: "page page-archives",
            h1 { {tr("archives-title")} }
            p { class: "page__muted", {tr("archives-empty")} }
        }
    }
}
