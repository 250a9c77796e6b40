use dioxus::prelude::*;

use crate::i18n::tr;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {tr("home-title")} }
            p { {tr("home-intro")} }
        }
    }
}
