use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::models::{ColorScheme, ThemeIntent};
use super::use_nav::use_theme_store;

#[derive(Clone, Copy)]
pub struct UseThemeReturn {
    /// Effective color scheme
    pub scheme: Signal<ColorScheme>,
    /// Whether a manual choice currently overrides the OS preference
    pub has_override: Signal<bool>,
    /// Record a manual choice
    pub set_manual: Callback<ColorScheme>,
    /// Drop the manual choice and follow the OS again
    pub follow_system: Callback<()>,
}

/// Theme state from the shared store, kept in sync for the lifetime of the component
pub fn use_theme() -> UseThemeReturn {
    let store = use_theme_store();
    let scheme = use_signal({
        let store = store.clone();
        move || store.effective()
    });
    let has_override = use_signal({
        let store = store.clone();
        move || store.has_manual_override()
    });

    let subscription = use_hook({
        let store = store.clone();
        move || {
            let sub = store.subscribe(move |state| {
                let mut scheme = scheme;
                let mut has_override = has_override;
                scheme.set(state.effective());
                has_override.set(state.manual.is_some());
            });
            Rc::new(RefCell::new(Some(sub)))
        }
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    let set_manual = use_callback({
        let store = store.clone();
        move |next: ColorScheme| {
            store.dispatch(ThemeIntent::Manual(next));
        }
    });

    let follow_system = use_callback(move |_: ()| {
        store.dispatch(ThemeIntent::ClearManual);
    });

    UseThemeReturn {
        scheme,
        has_override,
        set_manual,
        follow_system,
    }
}
