use dioxus::prelude::*;

/// Placeholder for sections that are not built yet.
#[component]
pub fn Construction() -> Element {
    rsx! {
        div { class: "construction",
            span { class: "chip", {crate::t!("construction-label")} }
        }
    }
}
