use dioxus::prelude::*;

use crate::app::layouts::Nav;
use crate::config::NavConfig;
use crate::shared::hooks::use_nav_provider;

/// Single-page portfolio: the navbar over one full-height block per section
#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let (config, _host, _store) = use_nav_provider(NavConfig::load());

    use_effect(|| {
        tracing::info!("Portfolio navbar mounted");
    });

    let sections: Vec<(String, String)> = config
        .sections
        .iter()
        .map(|section| (section.as_str().to_string(), section.label()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Nav {}
        main { class: "c-landing",
            for (id, label) in sections {
                section { key: "{id}", id: "{id}", class: "c-section",
                    h2 { class: "c-section__title", "{label}" }
                }
            }
        }
    }
}
