#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;

use ui::components::{register_nav, Layout, NavBuilder, NavEntry};
use ui::core::config::ApiConfig;
use ui::views::{Home, Ingredients, PageNotFound, Recipes};
use ui::ThemeProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/recipes")]
    Recipes {},
    #[route("/ingredients")]
    Ingredients {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css); no separate desktop stylesheet.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Home app – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1024.0, 768.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(entry: NavEntry, to: Route) -> Element {
    let class = entry.class();
    let NavEntry {
        selected,
        on_click,
        children,
        ..
    } = entry;
    rsx!(Link { class, to, aria_selected: "{selected}", onclick: on_click, {children} })
}
fn nav_recipes(entry: NavEntry) -> Element {
    nav_link(entry, Route::Recipes {})
}
fn nav_ingredients(entry: NavEntry) -> Element {
    nav_link(entry, Route::Ingredients {})
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppBar (shared) updates this on language selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(ApiConfig::from_env);

    register_nav(NavBuilder {
        recipes: nav_recipes,
        ingredients: nav_ingredients,
    });

    rsx! {
        // Always inline the theme so packaged builds need no asset directory.
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div { key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

/// Desktop-specific layout route around the shared shell.
#[component]
fn DesktopShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        ThemeProvider {
            Layout { path: route.to_string(),
                Outlet::<Route> {}
            }
        }
    }
}
