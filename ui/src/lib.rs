//! Shared UI crate for zakinadhif.my.id: header, app root, style registry,
//! routing capability and page views. Platform crates own the `Route` enum.

pub mod i18n;
pub mod nav;
pub mod router;
pub mod styles;
pub mod views;

pub mod components {
    pub mod app_root;
    pub mod navbar;

    pub use app_root::AppRoot;
    pub use navbar::Navbar;
}
