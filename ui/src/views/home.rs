use dioxus::prelude::*;

use super::Construction;

/// `/` aliases the recipes section, which is still under construction.
#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            Construction {}
        }
    }
}
