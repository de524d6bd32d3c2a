use dioxus::prelude::*;

use crate::app::components::ThemeToggle;
use crate::domain::models::{NavPresentation, SectionId};
use crate::shared::hooks::{use_nav_config, use_nav_lifecycle, use_section_navigator};

/// Fixed site header: brand, theme toggle, call-to-action and section menu.
/// Turns compact once the page scrolls past the configured threshold.
#[component]
pub fn Nav() -> Element {
    let config = use_nav_config();
    let scroll_state = use_nav_lifecycle();
    let navigator = use_section_navigator();
    let mut menu_open = use_signal(|| false);

    let navigate = use_callback({
        let navigator = navigator.clone();
        move |target: String| {
            navigator.navigate(&target);
        }
    });
    let navigate_section = use_callback(move |section: SectionId| {
        navigator.navigate_to(section);
    });

    let NavPresentation { bar, logo, title, cta, item } = NavPresentation::for_state(scroll_state());
    let menu_class = NavPresentation::menu(menu_open());
    let expanded = menu_open().to_string();

    let brand_name = config.brand_name.clone();
    let logo_src = config.logo_src.clone();
    let logo_alt = format!("{} Logo", config.brand_name);
    let cta_label = config.cta_label.clone();
    let cta_target = config.cta_target.clone();
    let items: Vec<(SectionId, String)> = config
        .sections
        .iter()
        .map(|section| (*section, section.label()))
        .collect();

    rsx! {
        nav { class: "{bar}",
            a { class: "c-navbar__brand", href: "/",
                img { class: "{logo}", src: "{logo_src}", alt: "{logo_alt}" }
                span { class: "{title}", "{brand_name}" }
            }

            div { class: "c-navbar__actions",
                ThemeToggle {}
                button {
                    class: "{cta}",
                    r#type: "button",
                    onclick: move |_| navigate.call(cta_target.clone()),
                    "{cta_label}"
                }
                button {
                    class: "c-navbar__collapse-toggle",
                    r#type: "button",
                    aria_label: "Open main menu",
                    aria_expanded: "{expanded}",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    "☰"
                }
            }

            div { class: "{menu_class}",
                for (section, label) in items {
                    button {
                        key: "{section}",
                        class: "{item}",
                        r#type: "button",
                        onclick: move |_| navigate_section.call(section),
                        "{label}"
                    }
                }
            }
        }
    }
}
