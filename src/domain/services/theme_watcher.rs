use crate::domain::models::{ColorScheme, ThemeIntent};
use crate::infrastructure::{SharedHost, Subscription};
use crate::shared::errors::Result;

use super::theme_store::ThemeStore;

/// Follows the OS color-scheme preference. It only reads the media query
/// and dispatches `ThemeIntent::System`; the store owns the root class.
#[derive(Debug)]
pub struct ThemePreferenceWatcher {
    subscription: Subscription,
}

impl ThemePreferenceWatcher {
    /// Apply the current OS preference immediately, then follow changes
    pub fn attach(host: &SharedHost, store: &ThemeStore, query: &str) -> Result<Self> {
        let prefers_dark = host.prefers_dark(query)?;
        store.dispatch(ThemeIntent::System(ColorScheme::from_prefers_dark(prefers_dark)));

        let store = store.clone();
        let subscription = host.on_color_scheme_change(
            query,
            Box::new(move |prefers_dark: bool| {
                store.dispatch(ThemeIntent::System(ColorScheme::from_prefers_dark(prefers_dark)));
            }),
        )?;

        Ok(ThemePreferenceWatcher { subscription })
    }

    /// Stop following the OS preference. The root class keeps its last value.
    pub fn detach(self) {
        self.subscription.unsubscribe();
    }
}
