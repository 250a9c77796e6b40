//! Site identity and the fixed navigation list.

use dioxus::prelude::*;

pub const SITE_TITLE: &str = "zakinadhif.my.id";

pub const PROFILE_URL: &str = "https://github.com/zakinadhif";

/// Header logo; purely decorative.
pub const LOGO: Asset = asset!("/assets/code.svg");

/// Viewport width (px) at and above which the navigation list is shown.
/// Must match the `min-width` media query in `assets/styles/globals.css`.
pub const COLLAPSE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Path resolved by the client-side router.
    Internal(&'static str),
    /// Plain hyperlink, full navigation in the same browsing context.
    External(&'static str),
}

impl NavTarget {
    pub fn href(&self) -> &'static str {
        match self {
            NavTarget::Internal(path) => path,
            NavTarget::External(url) => url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Display text; the same in every locale.
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavEntry {
    pub const fn is_external(&self) -> bool {
        matches!(self.target, NavTarget::External(_))
    }
}

pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        label: "Home",
        target: NavTarget::Internal("/"),
    },
    NavEntry {
        label: "About",
        target: NavTarget::Internal("/about"),
    },
    NavEntry {
        label: "Writing",
        target: NavTarget::Internal("/archives"),
    },
    NavEntry {
        label: "Projects",
        target: NavTarget::External(PROFILE_URL),
    },
];
