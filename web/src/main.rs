use std::str::FromStr;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use ui::components::{AppRoot, Navbar};
use ui::router::{register_router, SiteRouter};
use ui::views::{About, Archives, Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/archives")]
    Archives {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

/// `SiteRouter` over the web `Route` enum.
struct WebRouter;

impl SiteRouter for WebRouter {
    fn resolve(&self, path: &str) -> bool {
        matches!(
            Route::from_str(path),
            Ok(route) if !matches!(route, Route::NotFound { .. })
        )
    }

    fn navigate_to(&self, path: &str) {
        match Route::from_str(path) {
            Ok(route) => {
                navigator().push(route);
            }
            Err(err) => warn!(path, %err, "unroutable navigation target"),
        }
    }

    fn link(&self, path: &str, class: &str, label: &str) -> Element {
        match Route::from_str(path) {
            Ok(route) => rsx! {
                Link { class: "{class}", to: route, "{label}" }
            },
            Err(_) => rsx! {
                a { class: "{class}", href: "{path}", "{label}" }
            },
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_router(WebRouter);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }

        AppRoot {
            Router::<Route> {}
        }
    }
}

/// Header above every routed page.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        Navbar {}
        main { Outlet::<Route> {} }
    }
}
