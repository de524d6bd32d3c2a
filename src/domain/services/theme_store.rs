//! Theme store
//!
//! Single owner of the color-scheme state and the only writer of the
//! document-root dark class. The OS watcher and the toggle widget both
//! dispatch intents here; `ThemePrecedence` decides who wins.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::domain::models::{ColorScheme, ThemeIntent, ThemePrecedence, ThemeState};
use crate::infrastructure::{SharedHost, Subscription};
use crate::shared::logging::{log_theme_applied, log_theme_apply_error, log_theme_intent};

type Listener = Rc<dyn Fn(ThemeState)>;

struct StoreInner {
    host: SharedHost,
    dark_class: String,
    precedence: ThemePrecedence,
    state: Cell<ThemeState>,
    effective: Cell<Option<ColorScheme>>,
    next_listener_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

/// Cheap to clone; clones share one store
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<StoreInner>,
}

impl ThemeStore {
    pub fn new(host: SharedHost, dark_class: impl Into<String>, precedence: ThemePrecedence) -> Self {
        ThemeStore {
            inner: Rc::new(StoreInner {
                host,
                dark_class: dark_class.into(),
                precedence,
                state: Cell::new(ThemeState::default()),
                effective: Cell::new(None),
                next_listener_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Fold an intent into the state. The root class is written when the
    /// effective scheme changes; listeners run on any state change.
    /// Returns the effective scheme.
    pub fn dispatch(&self, intent: ThemeIntent) -> ColorScheme {
        log_theme_intent(intent);

        let previous = self.inner.state.get();
        let next = previous.reduce(intent, self.inner.precedence);
        self.inner.state.set(next);

        let scheme = next.effective();
        if self.inner.effective.get() != Some(scheme) {
            self.inner.effective.set(Some(scheme));
            self.apply(scheme);
        }
        if next != previous {
            self.notify(next);
        }
        scheme
    }

    /// Effective scheme; light until the first intent
    pub fn effective(&self) -> ColorScheme {
        self.inner.state.get().effective()
    }

    pub fn has_manual_override(&self) -> bool {
        self.inner.state.get().manual.is_some()
    }

    /// Call `listener` with every new state until the returned subscription is dropped
    pub fn subscribe(&self, listener: impl Fn(ThemeState) + 'static) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak: Weak<StoreInner> = Rc::downgrade(&self.inner);
        Subscription::new("theme_store", move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
            }
        })
    }

    fn apply(&self, scheme: ColorScheme) {
        match self
            .inner
            .host
            .set_root_class(&self.inner.dark_class, scheme.is_dark())
        {
            Ok(()) => log_theme_applied(scheme, &self.inner.dark_class),
            Err(e) => log_theme_apply_error(scheme, &e.to_string()),
        }
    }

    fn notify(&self, state: ThemeState) {
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryHost;

    fn store(host: &InMemoryHost, precedence: ThemePrecedence) -> ThemeStore {
        ThemeStore::new(Rc::new(host.clone()), "dark", precedence)
    }

    #[test]
    fn test_system_dark_sets_root_class() {
        let host = InMemoryHost::new();
        let store = store(&host, ThemePrecedence::System);

        assert_eq!(store.dispatch(ThemeIntent::System(ColorScheme::Dark)), ColorScheme::Dark);
        assert!(host.has_root_class("dark"));

        store.dispatch(ThemeIntent::System(ColorScheme::Light));
        assert!(!host.has_root_class("dark"));
    }

    #[test]
    fn test_manual_toggle_overridden_by_os_change() {
        let host = InMemoryHost::new();
        let store = store(&host, ThemePrecedence::System);

        store.dispatch(ThemeIntent::System(ColorScheme::Light));
        store.dispatch(ThemeIntent::Manual(ColorScheme::Dark));
        assert!(host.has_root_class("dark"));
        assert!(store.has_manual_override());

        store.dispatch(ThemeIntent::System(ColorScheme::Dark));
        store.dispatch(ThemeIntent::System(ColorScheme::Light));
        assert!(!host.has_root_class("dark"));
        assert!(!store.has_manual_override());
    }

    #[test]
    fn test_manual_toggle_sticky_under_manual_precedence() {
        let host = InMemoryHost::new();
        let store = store(&host, ThemePrecedence::Manual);

        store.dispatch(ThemeIntent::System(ColorScheme::Dark));
        store.dispatch(ThemeIntent::Manual(ColorScheme::Light));
        store.dispatch(ThemeIntent::System(ColorScheme::Light));
        store.dispatch(ThemeIntent::System(ColorScheme::Dark));
        assert!(!host.has_root_class("dark"));

        store.dispatch(ThemeIntent::ClearManual);
        assert!(host.has_root_class("dark"));
    }

    #[test]
    fn test_listeners_notified_only_on_change() {
        let host = InMemoryHost::new();
        let store = store(&host, ThemePrecedence::System);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = store.subscribe(move |state| sink.borrow_mut().push(state.effective()));

        store.dispatch(ThemeIntent::System(ColorScheme::Dark));
        store.dispatch(ThemeIntent::System(ColorScheme::Dark));
        store.dispatch(ThemeIntent::Manual(ColorScheme::Light));
        drop(sub);
        store.dispatch(ThemeIntent::ClearManual);

        assert_eq!(*seen.borrow(), vec![ColorScheme::Dark, ColorScheme::Light]);
    }

    #[test]
    fn test_listener_may_dispatch() {
        let host = InMemoryHost::new();
        let store = store(&host, ThemePrecedence::System);
        let reentrant = store.clone();
        let _sub = store.subscribe(move |state| {
            if state.effective().is_dark() {
                reentrant.dispatch(ThemeIntent::Manual(ColorScheme::Light));
            }
        });

        store.dispatch(ThemeIntent::System(ColorScheme::Dark));
        assert_eq!(store.effective(), ColorScheme::Light);
        assert!(!host.has_root_class("dark"));
    }

    #[test]
    fn test_clearing_override_follows_os_again() {
        let host = InMemoryHost::new();
        let store = store(&host, ThemePrecedence::Manual);

        store.dispatch(ThemeIntent::System(ColorScheme::Light));
        store.dispatch(ThemeIntent::Manual(store.effective().toggled()));
        store.dispatch(ThemeIntent::Manual(store.effective().toggled()));
        assert!(store.has_manual_override());

        store.dispatch(ThemeIntent::System(ColorScheme::Dark));
        assert!(!host.has_root_class("dark"));

        store.dispatch(ThemeIntent::ClearManual);
        assert!(host.has_root_class("dark"));

        store.dispatch(ThemeIntent::System(ColorScheme::Light));
        assert!(!host.has_root_class("dark"));
        store.dispatch(ThemeIntent::System(ColorScheme::Dark));
        assert!(host.has_root_class("dark"));
    }

    #[test]
    fn test_listeners_see_override_cleared_without_scheme_change() {
        let host = InMemoryHost::new();
        let store = store(&host, ThemePrecedence::Manual);
        let overrides = Rc::new(RefCell::new(Vec::new()));
        let sink = overrides.clone();
        let _sub = store.subscribe(move |state| sink.borrow_mut().push(state.manual.is_some()));

        store.dispatch(ThemeIntent::System(ColorScheme::Dark));
        store.dispatch(ThemeIntent::Manual(ColorScheme::Dark));
        store.dispatch(ThemeIntent::ClearManual);

        assert_eq!(*overrides.borrow(), vec![false, true, false]);
    }
}
