//! The root wrapper hands the routed page its props untouched and registers the
//! global stylesheets only once.

use std::cell::RefCell;

use dioxus::prelude::*;
use ui::components::AppRoot;
use ui::styles;

#[derive(Props, Clone, PartialEq, Debug)]
struct PostProps {
    title: String,
    tags: Vec<String>,
}

thread_local! {
    static SEEN: RefCell<Vec<PostProps>> = const { RefCell::new(Vec::new()) };
}

#[allow(non_snake_case)]
fn Post(props: PostProps) -> Element {
    SEEN.with(|seen| seen.borrow_mut().push(props.clone()));
    rsx! {
        article { class: "post",
            h1 { "{props.title}" }
        }
    }
}

fn root(props: PostProps) -> Element {
    rsx! {
        AppRoot {
            Post { title: props.title.clone(), tags: props.tags.clone() }
        }
    }
}

fn render(props: PostProps) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn post(title: &str) -> PostProps {
    PostProps {
        title: title.to_string(),
        tags: vec!["rust".to_string(), "web".to_string()],
    }
}

#[test]
fn page_receives_props_exactly() {
    SEEN.with(|seen| seen.borrow_mut().clear());
    let html = render(post("X"));

    let seen = SEEN.with(|seen| seen.borrow().clone());
    assert_eq!(seen, vec![post("X")]);
    assert!(html.contains("<h1>X</h1>"), "{html}");
}

#[test]
fn page_markup_is_not_wrapped() {
    let html = render(post("Plain"));
    assert!(html.contains(r#"<article class="post"><h1>Plain</h1></article>"#), "{html}");
    assert!(!html.contains("<div"), "{html}");
}

#[test]
fn styles_register_once_across_navigations() {
    for title in ["Home", "About", "Writing", "Home"] {
        render(post(title));
    }
    assert_eq!(styles::registrations(), 1);
}

#[test]
fn stylesheets_load_in_order() {
    render(post("Ordered"));

    let sheets = styles::register();
    let names: Vec<_> = sheets.iter().map(|s| s.name).collect();
    assert_eq!(names, ["base", "blog", "remixicon", "night-owl"]);

    let hrefs: Vec<String> = sheets.iter().map(|s| s.href()).collect();
    assert!(hrefs.iter().all(|h| !h.is_empty()), "{hrefs:?}");
    assert_ne!(hrefs[0], hrefs[1]);
    assert_eq!(
        hrefs[2],
        "https://cdn.jsdelivr.net/npm/remixicon@2.5.0/fonts/remixicon.css"
    );
    assert_eq!(
        hrefs[3],
        "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/night-owl.min.css"
    );
}
