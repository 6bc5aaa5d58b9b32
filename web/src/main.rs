use dioxus::prelude::*;

use ui::components::{register_nav, Layout, NavBuilder, NavEntry};
use ui::core::config::ApiConfig;
use ui::views::{Home, Ingredients, PageNotFound, Recipes};
use ui::ThemeProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/recipes")]
    Recipes {},
    #[route("/ingredients")]
    Ingredients {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn nav_link(entry: NavEntry, to: Route) -> Element {
    let class = entry.class();
    let NavEntry {
        selected,
        on_click,
        children,
        ..
    } = entry;
    rsx!(Link {
        class,
        to,
        aria_selected: "{selected}",
        onclick: on_click,
        {children}
    })
}
fn nav_recipes(entry: NavEntry) -> Element {
    nav_link(entry, Route::Recipes {})
}
fn nav_ingredients(entry: NavEntry) -> Element {
    nav_link(entry, Route::Ingredients {})
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        recipes: nav_recipes,
        ingredients: nav_ingredients,
    });

    // AppBar writes the selected locale here; the keyed wrapper remounts the
    // routed tree so every page re-renders in the new language.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(ApiConfig::from_env);

    rsx! {
        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web-specific layout route: hands the current path to the shared shell.
#[component]
fn WebShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        ThemeProvider {
            Layout { path: route.to_string(),
                Outlet::<Route> {}
            }
        }
    }
}
