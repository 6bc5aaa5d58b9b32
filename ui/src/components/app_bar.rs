use dioxus::prelude::*;
use tracing::info;

use crate::i18n;
use crate::icons::MenuIcon;
use crate::t;

/// Fixed top bar: drawer toggle (mobile only, via CSS), title and locale picker.
///
/// The locale picker writes through to a global `Signal<String>` language
/// code when the platform provides one, so keyed subtrees remount in the new
/// language.
#[component]
pub fn AppBar(on_menu: EventHandler<MouseEvent>) -> Element {
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            info!(lang = %val, "language switched");
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    rsx! {
        header { class: "app-bar",
            div { class: "app-bar__toolbar",
                button {
                    r#type: "button",
                    class: "app-bar__menu-button",
                    aria_label: t!("app-bar-open-drawer"),
                    onclick: move |evt| on_menu.call(evt),
                    MenuIcon {}
                }
                h1 { class: "app-bar__title", {t!("app-title")} }

                if show_switcher {
                    div { class: "app-bar__locale",
                        label { class: "visually-hidden", r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
