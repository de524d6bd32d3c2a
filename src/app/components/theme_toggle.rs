use dioxus::prelude::*;
use crate::shared::hooks::{use_theme, UseThemeReturn};

/// Light/dark toggle. Records a manual choice in the theme store; whether it
/// survives the next OS preference change depends on the configured precedence.
/// While a manual choice is active a second button hands control back to the OS.
#[component]
pub fn ThemeToggle() -> Element {
    let UseThemeReturn {
        scheme,
        has_override,
        set_manual,
        follow_system,
    } = use_theme();

    let current = scheme();
    let target = current.toggled();
    let tooltip = format!("Switch to {} mode", target.display_name().to_lowercase());
    let icon = target.icon();
    let scheme_name = current.as_str();

    rsx! {
        div { class: "c-theme-toggle__group",
            button {
                class: "c-theme-toggle",
                r#type: "button",
                title: "{tooltip}",
                aria_label: "Toggle dark mode",
                "data-scheme": "{scheme_name}",
                onclick: move |_| set_manual.call(target),
                "{icon}"
            }
            if has_override() {
                button {
                    class: "c-theme-toggle c-theme-toggle__reset",
                    r#type: "button",
                    title: "Follow system theme",
                    aria_label: "Follow system theme",
                    onclick: move |_| follow_system.call(()),
                    "🖥️"
                }
            }
        }
    }
}
