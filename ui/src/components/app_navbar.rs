use crate::components::ThemeToggle;
use crate::core::theme::Theme;
use crate::i18n::{self};
use crate::t;
use crate::views::sections::SectionId;
use dioxus::prelude::*;
use tracing::debug;

// Navbar stylesheet, linked on web and inlined for release desktop builds.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Fixed report navbar: brand, section anchors, language picker and theme
/// toggle.
///
/// On narrow screens the section links collapse behind a menu button; picking a
/// link closes the menu again.
///
/// The language selector updates the global language code signal when the
/// platform provides one (`Signal<String>` context), so every view that reads
/// it re-renders with fresh strings.
#[component]
pub fn AppNavbar(theme: Theme, on_toggle_theme: EventHandler<()>) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let mut menu_open = use_signal(|| false);
    // Obtain global language code signal if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reading it subscribes this component to language changes.
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    debug!(lang = %lang_marker, "navbar render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let links_class = if menu_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };
    let toggle_class = if menu_open() {
        "navbar__toggle navbar__toggle--active"
    } else {
        "navbar__toggle"
    };
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    a { class: "navbar__brand-link", href: "#top",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", {t!("brand-name")} }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                button {
                    id: "navToggle",
                    class: "{toggle_class}",
                    r#type: "button",
                    aria_label: t!("nav-menu-toggle"),
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                }

                nav { id: "navMenu", class: "{links_class}",
                    for section in SectionId::ALL {
                        a {
                            key: "{section.anchor()}",
                            class: "navbar__link nav-link",
                            href: "#{section.anchor()}",
                            onclick: move |_| menu_open.set(false),
                            {section.nav_label()}
                        }
                    }
                }

                div { class: "navbar__actions",
                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                    ThemeToggle { theme, on_toggle: on_toggle_theme }
                }
            }
        }
    }
}
