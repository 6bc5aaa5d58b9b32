use dioxus::prelude::*;
use tracing::debug;

use super::app_bar::AppBar;
use super::menu_drawer::MenuDrawer;
use crate::core::drawer::{DrawerEvent, DrawerState, COLLAPSE_TIMEOUT_MS};
use crate::core::section::resolve_section;
use crate::core::timing::sleep_ms;
use crate::t;

/// Application shell: app bar, both drawers and the routed page.
///
/// `path` is the current location; platforms pass `use_route::<Route>()`
/// rendered as a string so the shell re-renders on every navigation. The
/// selected section is derived from it on each render, never stored. Drawer
/// state is local to the shell.
#[component]
pub fn Layout(path: String, children: Element) -> Element {
    let drawer = use_signal(DrawerState::default);
    let selected = resolve_section(&path);

    rsx! {
        div { class: "layout",
            AppBar { on_menu: move |_| dispatch(drawer, DrawerEvent::Toggle) }
            nav { class: "layout__nav", aria_label: t!("drawer-label"),
                MenuDrawer {
                    state: drawer(),
                    selected,
                    on_event: move |event: DrawerEvent| dispatch(drawer, event),
                }
            }
            main { class: "layout__main",
                div { class: "toolbar-spacer" }
                {children}
            }
        }
    }
}

fn dispatch(mut drawer: Signal<DrawerState>, event: DrawerEvent) {
    let current = *drawer.peek();
    let Some(next) = current.transition(event) else {
        return;
    };
    debug!(?current, ?event, ?next, "drawer transition");
    drawer.set(next);

    // A cancelled slide never fires `transitionend`.
    if next.is_closing() {
        spawn(async move {
            sleep_ms(COLLAPSE_TIMEOUT_MS).await;
            dispatch(drawer, DrawerEvent::TransitionEnd);
        });
    }
}
