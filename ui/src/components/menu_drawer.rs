use dioxus::prelude::*;

use super::drawer_content::MenuDrawerContent;
use crate::core::drawer::{DrawerEvent, DrawerState, DrawerSurface};
use crate::core::section::Section;

/// Both drawer presentations. CSS shows the temporary one below the 600px
/// breakpoint and the permanent one above it.
///
/// Only the temporary drawer reacts to `state`: it slides in while open, emits
/// `Close` on backdrop clicks, Escape or navigation, and `TransitionEnd` once
/// the slide finishes. The permanent drawer is always visible.
#[component]
pub fn MenuDrawer(
    state: DrawerState,
    #[props(!optional)] selected: Option<Section>,
    on_event: EventHandler<DrawerEvent>,
) -> Element {
    let open = state.is_open();
    let hidden = !open;
    let temporary_class = if open {
        "drawer drawer--temporary drawer--open"
    } else {
        "drawer drawer--temporary"
    };
    let navigate = move |surface: DrawerSurface| {
        move |_: Section| {
            if let Some(event) = surface.navigate_event() {
                on_event.call(event);
            }
        }
    };

    rsx! {
        div {
            class: temporary_class,
            aria_label: "mobile-navigation",
            aria_hidden: "{hidden}",
            tabindex: "-1",
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(event) = key_event(&evt.key()) {
                    on_event.call(event);
                }
            },
            div {
                class: "drawer__backdrop",
                onclick: move |_| on_event.call(DrawerEvent::Close),
            }
            div {
                class: "drawer__paper",
                ontransitionend: move |_| on_event.call(DrawerEvent::TransitionEnd),
                div { class: "toolbar-spacer" }
                MenuDrawerContent {
                    selected,
                    on_navigate: navigate(DrawerSurface::Temporary),
                }
            }
        }
        div {
            class: "drawer drawer--permanent",
            aria_label: "desktop-navigation",
            div { class: "drawer__paper drawer__paper--elevated",
                div { class: "toolbar-spacer" }
                MenuDrawerContent {
                    selected,
                    on_navigate: navigate(DrawerSurface::Permanent),
                }
            }
        }
    }
}

fn key_event(key: &Key) -> Option<DrawerEvent> {
    matches!(key, Key::Escape).then_some(DrawerEvent::Close)
}
