//! Mount/unmount of the navbar listeners
//!
//! Both listeners are acquired in `mount` and released together in
//! `unmount` or on drop. A listener that fails to attach is logged and left
//! out; the navbar still renders and navigates.

use crate::config::NavConfig;
use crate::domain::models::ScrollState;
use crate::infrastructure::SharedHost;
use crate::shared::logging::{log_mount, log_mount_error};

use super::scroll_observer::ScrollObserver;
use super::theme_store::ThemeStore;
use super::theme_watcher::ThemePreferenceWatcher;

pub struct NavLifecycle {
    scroll: Option<ScrollObserver>,
    theme: Option<ThemePreferenceWatcher>,
}

impl NavLifecycle {
    pub fn mount(
        host: &SharedHost,
        store: &ThemeStore,
        config: &NavConfig,
        on_scroll_change: impl FnMut(ScrollState) + 'static,
    ) -> Self {
        let theme = match ThemePreferenceWatcher::attach(host, store, &config.color_scheme_query) {
            Ok(watcher) => {
                log_mount("color_scheme");
                Some(watcher)
            }
            Err(e) => {
                log_mount_error("color_scheme", &e.to_string());
                None
            }
        };

        let scroll = match ScrollObserver::attach(host, config.scroll_threshold_px, on_scroll_change) {
            Ok(observer) => {
                log_mount("scroll");
                Some(observer)
            }
            Err(e) => {
                log_mount_error("scroll", &e.to_string());
                None
            }
        };

        NavLifecycle { scroll, theme }
    }

    /// Current scroll state; `TOP` when scroll tracking is unavailable
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
            .as_ref()
            .map(ScrollObserver::state)
            .unwrap_or_default()
    }

    pub fn is_tracking_scroll(&self) -> bool {
        self.scroll.is_some()
    }

    pub fn is_following_system_theme(&self) -> bool {
        self.theme.is_some()
    }

    /// Release both listeners
    pub fn unmount(mut self) {
        if let Some(scroll) = self.scroll.take() {
            scroll.detach();
        }
        if let Some(theme) = self.theme.take() {
            theme.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ColorScheme;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::infrastructure::InMemoryHost;

    struct Fixture {
        host: InMemoryHost,
        store: ThemeStore,
        scroll_changes: Rc<RefCell<Vec<ScrollState>>>,
        lifecycle: NavLifecycle,
    }

    fn mount(prefers_dark: bool, config: NavConfig) -> Fixture {
        let host = InMemoryHost::new();
        host.set_prefers_dark(prefers_dark);
        let shared: SharedHost = Rc::new(host.clone());
        let store = ThemeStore::new(shared.clone(), config.dark_class.clone(), config.theme_precedence);
        let scroll_changes = Rc::new(RefCell::new(Vec::new()));
        let sink = scroll_changes.clone();
        let lifecycle = NavLifecycle::mount(&shared, &store, &config, move |s| sink.borrow_mut().push(s));
        Fixture {
            host,
            store,
            scroll_changes,
            lifecycle,
        }
    }

    #[test]
    fn test_mount_applies_dark_preference_without_interaction() {
        let f = mount(true, NavConfig::default());
        assert!(f.host.has_root_class("dark"));
        assert_eq!(f.store.effective(), ColorScheme::Dark);
        assert!(f.lifecycle.is_tracking_scroll());
        assert!(f.lifecycle.is_following_system_theme());
    }

    #[test]
    fn test_mount_with_light_preference() {
        let f = mount(false, NavConfig::default());
        assert!(!f.host.has_root_class("dark"));
    }

    #[test]
    fn test_os_toggle_after_mount_updates_root() {
        let f = mount(false, NavConfig::default());
        f.host.emit_color_scheme_change(true);
        assert!(f.host.has_root_class("dark"));
    }

    #[test]
    fn test_unmount_detaches_both_listeners() {
        let f = mount(false, NavConfig::default());
        assert_eq!(f.host.scroll_listener_count(), 1);
        assert_eq!(f.host.color_scheme_listener_count(), 1);

        f.lifecycle.unmount();
        assert_eq!(f.host.scroll_listener_count(), 0);
        assert_eq!(f.host.color_scheme_listener_count(), 0);

        f.host.scroll_to(400.0);
        f.host.emit_color_scheme_change(true);
        assert!(f.scroll_changes.borrow().is_empty());
        assert!(!f.host.has_root_class("dark"));
        assert_eq!(f.store.effective(), ColorScheme::Light);
    }

    #[test]
    fn test_drop_detaches_both_listeners() {
        let f = mount(true, NavConfig::default());
        drop(f.lifecycle);
        assert_eq!(f.host.scroll_listener_count(), 0);
        assert_eq!(f.host.color_scheme_listener_count(), 0);
    }

    #[test]
    fn test_custom_threshold_and_class() {
        let config = NavConfig {
            scroll_threshold_px: 100.0,
            dark_class: "theme-dark".to_string(),
            ..NavConfig::default()
        };
        let f = mount(true, config);
        assert!(f.host.has_root_class("theme-dark"));

        f.host.scroll_to(80.0);
        assert_eq!(f.lifecycle.scroll_state(), ScrollState::TOP);
        f.host.scroll_to(101.0);
        assert_eq!(f.lifecycle.scroll_state(), ScrollState::SCROLLED);
        assert_eq!(*f.scroll_changes.borrow(), vec![ScrollState::SCROLLED]);
    }

    #[test]
    fn test_broken_media_query_degrades_to_scroll_only() {
        let config = NavConfig {
            color_scheme_query: String::new(),
            ..NavConfig::default()
        };
        let f = mount(true, config);
        assert!(!f.lifecycle.is_following_system_theme());
        assert!(f.lifecycle.is_tracking_scroll());
        assert!(!f.host.has_root_class("dark"));
    }
}
