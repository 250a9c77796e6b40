use crate::styles;
use dioxus::prelude::*;

/// Top-level wrapper around the routed page.
///
/// The global stylesheets are registered on first mount and declared ahead of
/// the page so they are in place before it paints. `children` is the page the
/// router selected, already bound to its props, and is rendered as given.
#[component]
pub fn AppRoot(children: Element) -> Element {
    let sheets = use_hook(styles::register);

    rsx! {
        for sheet in sheets {
            document::Link { key: "{sheet.name}", rel: "stylesheet", href: sheet.href() }
        }
        {children}
    }
}
