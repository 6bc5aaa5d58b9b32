//! Inline Material-style SVG icons.

use dioxus::prelude::*;

use crate::core::section::Section;

const MENU_PATH: &str = "M3 18h18v-2H3zm0-5h18v-2H3zm0-7v2h18V6z";
const RESTAURANT_MENU_PATH: &str = "m8.1 13.34 2.83-2.83L3.91 3.5c-1.56 1.56-1.56 4.09 0 5.66zm6.78-1.81c1.53.71 3.68.21 5.27-1.38 1.91-1.91 2.28-4.65.81-6.12-1.46-1.46-4.2-1.1-6.12.81-1.59 1.59-2.09 3.74-1.38 5.27L3.7 19.87l1.41 1.41L12 14.41l6.88 6.88 1.41-1.41L13.41 13z";
const APPLE_PATH: &str = "M18.71 19.5c-.83 1.24-1.71 2.45-3.05 2.47-1.34.03-1.77-.79-3.29-.79-1.53 0-2 .77-3.27.82-1.31.05-2.3-1.32-3.14-2.53C4.25 17 2.94 12.45 4.7 9.39c.87-1.52 2.43-2.48 4.12-2.51 1.28-.02 2.5.87 3.29.87.78 0 2.26-1.07 3.81-.91.65.03 2.47.26 3.64 1.98-.09.06-2.17 1.28-2.15 3.81.03 3.02 2.65 4.03 2.68 4.04-.03.07-.42 1.44-1.38 2.83M13 3.5c.73-.83 1.94-1.46 2.94-1.5.13 1.17-.34 2.35-1.04 3.19-.69.85-1.83 1.51-2.95 1.42-.15-1.15.41-2.35 1.05-3.11";

#[component]
fn SvgIcon(d: &'static str) -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d }
        }
    }
}

#[component]
pub fn MenuIcon() -> Element {
    rsx! { SvgIcon { d: MENU_PATH } }
}

/// Drawer icon for a section.
#[component]
pub fn SectionIcon(section: Section) -> Element {
    let d = match section {
        Section::Recipes => RESTAURANT_MENU_PATH,
        Section::Ingredients => APPLE_PATH,
    };
    rsx! { SvgIcon { d } }
}
