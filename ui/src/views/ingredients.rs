use dioxus::prelude::*;

use crate::core::config::use_api_config;
use crate::ingredients::{IngredientList, IngredientsState};
use crate::t;

/// `/ingredients`: fetches the listing once per visit.
///
/// The request lives in a resource owned by this page, so leaving the page
/// drops any in-flight response. Failures stay on the page with a retry
/// button; nothing retries on its own.
#[component]
pub fn Ingredients() -> Element {
    let config = use_api_config();
    let mut listing = use_resource(move || {
        let config = config.clone();
        async move { IngredientsState::load(&config).await }
    });

    let state = listing.cloned().unwrap_or(IngredientsState::Loading);

    rsx! {
        section { class: "page page-ingredients",
            h1 { {t!("page-ingredients-title")} }
            IngredientsBody { state, on_retry: move |_| listing.restart() }
        }
    }
}

#[component]
fn IngredientsBody(state: IngredientsState, on_retry: EventHandler<MouseEvent>) -> Element {
    match state {
        IngredientsState::Loading => rsx! {
            p { class: "page__status", {t!("ingredients-loading")} }
        },
        IngredientsState::Ready(ingredients) => rsx! {
            IngredientList { ingredients }
        },
        IngredientsState::Failed(message) => rsx! {
            div { class: "page__error", role: "alert",
                p { {t!("ingredients-load-failed")} }
                p { class: "page__error-detail", "{message}" }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |evt| on_retry.call(evt),
                    {t!("ingredients-retry")}
                }
            }
        },
    }
}
