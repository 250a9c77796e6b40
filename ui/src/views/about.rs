use dioxus::prelude::*;

use crate::i18n::tr;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { {tr("about-title")} }
            p { {tr("about-body")} }
        }
    }
}
