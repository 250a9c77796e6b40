//! Header labels stay fixed when the page copy is in another language.
//!
//! Language selection is process-wide, so this lives in its own test binary.

use dioxus::prelude::*;
use ui::components::Navbar;
use ui::i18n;
use unic_langid::LanguageIdentifier;

fn app() -> Element {
    rsx! { Navbar {} }
}

#[test]
fn labels_are_english_under_indonesian() {
    i18n::init();
    let indonesian: LanguageIdentifier = "id-ID".parse().unwrap();
    i18n::select(&[indonesian]);
    assert_eq!(i18n::tr("home-title"), "Hai, saya Zaki.");

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    let positions: Vec<usize> = ["Home", "About", "Writing", "Projects"]
        .iter()
        .map(|label| {
            html.find(&format!(">{label}</a>"))
                .unwrap_or_else(|| panic!("label {label} missing from {html}"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

    for translated in ["Beranda", "Tentang", "Tulisan", "Proyek"] {
        assert!(!html.contains(translated), "{translated} in {html}");
    }
    assert!(html.contains(r#"aria-label="Navigasi utama""#), "{html}");
}
