//! Server-side rendering helpers for component tests.

use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Event, Mutation};
use dioxus::html::{PlatformEventData, SerializedKeyboardData, SerializedMouseData};
use dioxus::prelude::*;

/// Render a prop-free element tree (no event handlers built outside a scope).
pub(crate) fn render_element(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

/// Render a root component; use when props carry event handlers.
pub(crate) fn render_app(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// The opening tag that contains `needle`, e.g. the `<a ...>` holding an href.
pub(crate) fn start_tag<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = html
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in {html}"));
    let start = html[..at].rfind('<').unwrap_or(0);
    let end = html[at..].find('>').map(|i| at + i + 1).unwrap_or(html.len());
    &html[start..end]
}

/// A mounted app whose listeners can be fired directly, without a renderer.
pub(crate) struct Harness {
    pub dom: VirtualDom,
    listeners: Vec<(String, ElementId)>,
}

impl Harness {
    pub fn mount(app: fn() -> Element) -> Self {
        dioxus::html::set_event_converter(Box::new(dioxus::html::SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let listeners = dom
            .rebuild_to_vec()
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } => Some((name, id)),
                _ => None,
            })
            .collect();
        Self { dom, listeners }
    }

    /// Elements listening for `name`, in mount order.
    pub fn listeners(&self, name: &str) -> Vec<ElementId> {
        self.listeners
            .iter()
            .filter(|(event, _)| event == name)
            .map(|(_, id)| *id)
            .collect()
    }

    pub fn click(&self, id: ElementId) {
        self.fire("click", SerializedMouseData::default(), id);
    }

    pub fn key_down(&self, id: ElementId, key: Key, code: Code) {
        let data = SerializedKeyboardData::new(
            key,
            code,
            Location::Standard,
            false,
            Modifiers::empty(),
            false,
        );
        self.fire("keydown", data, id);
    }

    fn fire(&self, name: &str, data: impl Any, id: ElementId) {
        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::new(data))) as Rc<dyn Any>,
            true,
        );
        self.dom.runtime().handle_event(name, event, id);
    }
}
