use dioxus::prelude::*;

use crate::core::section::Section;
use crate::t;

/// Catch-all page. No drawer entry is highlighted here unless the path still
/// falls under a section prefix (e.g. `/recipes/unknown`).
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body", path = path.clone())} }
            Link { class: "button button--primary", to: Section::Recipes.path(),
                {t!("not-found-back")}
            }
        }
    }
}
