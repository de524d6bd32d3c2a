use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::NavConfig;
use crate::domain::models::ScrollState;
use crate::domain::services::{NavLifecycle, SectionNavigator, ThemeStore};
use crate::infrastructure::{default_host, SharedHost};

/// Install the navbar context: configuration, host page and the theme store.
/// Call once at the root; the store is shared by the watcher and the toggle.
pub fn use_nav_provider(config: NavConfig) -> (NavConfig, SharedHost, ThemeStore) {
    let config = use_context_provider(|| config);
    let host = use_context_provider({
        let config = config.clone();
        move || default_host(&config)
    });
    let store = use_context_provider({
        let host = host.clone();
        let config = config.clone();
        move || ThemeStore::new(host, config.dark_class, config.theme_precedence)
    });
    (config, host, store)
}

pub fn use_nav_config() -> NavConfig {
    use_hook(|| try_consume_context::<NavConfig>().unwrap_or_else(NavConfig::load))
}

pub fn use_host() -> SharedHost {
    let config = use_nav_config();
    use_hook(move || try_consume_context::<SharedHost>().unwrap_or_else(|| default_host(&config)))
}

/// Shared theme store, or a private one when no provider is mounted
pub fn use_theme_store() -> ThemeStore {
    let host = use_host();
    let config = use_nav_config();
    use_hook(move || {
        try_consume_context::<ThemeStore>()
            .unwrap_or_else(|| ThemeStore::new(host, config.dark_class, config.theme_precedence))
    })
}

pub fn use_section_navigator() -> SectionNavigator {
    let host = use_host();
    use_hook(move || SectionNavigator::new(host))
}

/// Mount the scroll observer and OS theme watcher for this component.
/// Both listeners are released when the component unmounts.
pub fn use_nav_lifecycle() -> Signal<ScrollState> {
    let host = use_host();
    let store = use_theme_store();
    let config = use_nav_config();
    let mut scroll_state = use_signal({
        let host = host.clone();
        let threshold = config.scroll_threshold_px;
        move || ScrollState::from_offset(host.scroll_offset().unwrap_or_default(), threshold)
    });

    let lifecycle = use_hook(move || {
        let lifecycle = NavLifecycle::mount(&host, &store, &config, move |state| {
            scroll_state.set(state);
        });
        Rc::new(RefCell::new(Some(lifecycle)))
    });

    use_drop(move || {
        if let Some(lifecycle) = lifecycle.borrow_mut().take() {
            lifecycle.unmount();
        }
    });

    scroll_state
}
