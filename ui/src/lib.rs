//! Shared UI crate for Fuzzyhome. Navigation model, shell, pages and theme
//! live here; platform crates only own their `Route` enum and launcher.

pub mod core;
pub mod i18n;
pub mod icons;
pub mod ingredients;
pub mod theme;
pub mod views;

pub mod components {
    mod app_bar;
    pub use app_bar::AppBar;

    // Section list shared by both drawers; platforms register their links here.
    pub mod drawer_content;
    pub use drawer_content::{register_nav, MenuDrawerContent, NavBuilder, NavEntry};

    mod layout;
    pub use layout::Layout;

    mod menu_drawer;
    pub use menu_drawer::MenuDrawer;
}

pub use theme::ThemeProvider;

#[cfg(test)]
mod test_support;
