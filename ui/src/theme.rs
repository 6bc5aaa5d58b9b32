//! Dark theme wrapper.
//!
//! Everything visual is CSS custom properties in `assets/theme/main.css`; the
//! provider loads the sheet (inlined in native release builds, where there is
//! no asset server) and tags the subtree with the dark color scheme.

use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[component]
pub fn ThemeProvider(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }

        div { class: "theme theme--dark", "data-color-scheme": "dark",
            {children}
        }
    }
}
