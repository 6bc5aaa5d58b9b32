//! Section list rendered inside both drawer presentations.
//!
//! `ui` does not know each platform's `Route` enum, so platforms register a
//! [`NavBuilder`] whose functions wrap a prepared [`NavEntry`] in a router
//! `Link` (the same idea as the platform-supplied nav links of the app bar).
//!
//! Registration, once at the top of the platform's `App()`:
//! ```ignore
//! register_nav(NavBuilder {
//!     recipes: |entry| rsx!(Link {
//!         class: "{entry.class()}",
//!         to: Route::Recipes {},
//!         aria_selected: "{entry.selected}",
//!         onclick: entry.on_click,
//!         {entry.children}
//!     }),
//!     ingredients: /* same for Route::Ingredients {} */
//! });
//! ```
//!
//! Without a registered builder entries fall back to plain anchors, which is
//! what render tests and router-less previews see.

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::section::Section;
use crate::icons::SectionIcon;

/// Everything a platform needs to render one drawer entry.
pub struct NavEntry {
    pub section: Section,
    pub selected: bool,
    pub on_click: EventHandler<MouseEvent>,
    /// Icon and localized label.
    pub children: Element,
}

impl NavEntry {
    pub fn class(&self) -> String {
        if self.selected {
            "menu-list__button menu-list__button--selected".to_string()
        } else {
            "menu-list__button".to_string()
        }
    }
}

pub struct NavBuilder {
    pub recipes: fn(NavEntry) -> Element,
    pub ingredients: fn(NavEntry) -> Element,
}

impl NavBuilder {
    fn for_section(&self, section: Section) -> fn(NavEntry) -> Element {
        match section {
            Section::Recipes => self.recipes,
            Section::Ingredients => self.ingredients,
        }
    }
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn MenuDrawerContent(
    #[props(!optional)] selected: Option<Section>,
    // Called after an entry is clicked; the mobile drawer closes itself here.
    on_navigate: Option<EventHandler<Section>>,
) -> Element {
    rsx! {
        ul { class: "menu-list",
            for section in Section::ALL {
                li { key: "{section.key()}", class: "menu-list__item",
                    {nav_entry(section, selected == Some(section), on_navigate)}
                }
            }
        }
    }
}

fn nav_entry(
    section: Section,
    selected: bool,
    on_navigate: Option<EventHandler<Section>>,
) -> Element {
    let label = section.label();
    let entry = NavEntry {
        section,
        selected,
        on_click: EventHandler::new(move |_: MouseEvent| {
            if let Some(handler) = on_navigate {
                handler.call(section);
            }
        }),
        children: rsx! {
            span { class: "menu-list__icon", SectionIcon { section } }
            span { class: "menu-list__label", "{label}" }
        },
    };

    match NAV_BUILDER.get() {
        Some(builder) => (builder.for_section(section))(entry),
        None => fallback_link(entry),
    }
}

fn fallback_link(entry: NavEntry) -> Element {
    let class = entry.class();
    let href = entry.section.path();
    let on_click = entry.on_click;
    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            aria_selected: "{entry.selected}",
            onclick: move |evt| on_click.call(evt),
            {entry.children}
        }
    }
}
