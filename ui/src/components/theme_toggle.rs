use dioxus::prelude::*;

use crate::core::theme::Theme;
use crate::{i18n, t};

/// Moon/sun button switching between the light and dark theme.
#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    i18n::use_language();
    let label = if theme.is_dark() {
        t!("theme-toggle-light")
    } else {
        t!("theme-toggle-dark")
    };

    rsx! {
        button {
            id: "darkModeToggle",
            class: "theme-toggle",
            r#type: "button",
            title: "{label}",
            aria_label: "{label}",
            aria_pressed: "{theme.is_dark()}",
            onclick: move |_| on_toggle.call(()),
            span { aria_hidden: "true", "{theme.icon()}" }
        }
    }
}
