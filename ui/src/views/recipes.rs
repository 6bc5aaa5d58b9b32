use dioxus::prelude::*;

use super::Construction;

#[component]
pub fn Recipes() -> Element {
    rsx! {
        section { class: "page page-recipes",
            Construction {}
        }
    }
}
