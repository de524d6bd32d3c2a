//! In-memory host page
//!
//! Stands in for the browser on native targets and in tests. Synthetic
//! scroll and color-scheme events are delivered synchronously, in order,
//! to the listeners attached at that moment.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use super::host::{HostPage, SchemeHandler, ScrollHandler, Subscription};
use crate::shared::errors::{NavError, Result};

type Handler<T> = Rc<RefCell<Box<dyn FnMut(T)>>>;

struct Listeners<T> {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(u64, Handler<T>)>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Listeners {
            next_id: Cell::new(0),
            handlers: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Copy> Listeners<T> {
    fn add(&self, handler: Box<dyn FnMut(T)>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.handlers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(handler))));
        id
    }

    fn remove(&self, id: u64) {
        self.handlers.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    // Snapshot first so handlers may attach/detach or touch the page while running
    fn dispatch(&self, value: T) {
        let snapshot: Vec<Handler<T>> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in snapshot {
            let mut handler = handler.borrow_mut();
            (*handler)(value);
        }
    }
}

#[derive(Default)]
struct PageState {
    scroll_y: f64,
    prefers_dark: bool,
    root_classes: BTreeSet<String>,
    elements: BTreeSet<String>,
    scrolled_to: Vec<String>,
}

#[derive(Default)]
struct Inner {
    page: RefCell<PageState>,
    scroll_listeners: Listeners<f64>,
    scheme_listeners: Listeners<bool>,
}

/// Deterministic page model. Clones share the same page.
#[derive(Clone, Default)]
pub struct InMemoryHost {
    inner: Rc<Inner>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page containing an element for every id
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let host = Self::new();
        for id in ids {
            host.add_element(id);
        }
        host
    }

    pub fn add_element(&self, id: impl Into<String>) {
        self.inner.page.borrow_mut().elements.insert(id.into());
    }

    /// Set the OS preference without firing a change event
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.inner.page.borrow_mut().prefers_dark = prefers_dark;
    }

    /// Flip the OS preference and notify color-scheme listeners
    pub fn emit_color_scheme_change(&self, prefers_dark: bool) {
        self.set_prefers_dark(prefers_dark);
        self.inner.scheme_listeners.dispatch(prefers_dark);
    }

    /// Move the viewport and notify scroll listeners
    pub fn scroll_to(&self, offset: f64) {
        self.inner.page.borrow_mut().scroll_y = offset;
        self.inner.scroll_listeners.dispatch(offset);
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.inner.page.borrow().root_classes.contains(class)
    }

    /// Ids passed to successful scroll-into-view calls, oldest first
    pub fn scrolled_to(&self) -> Vec<String> {
        self.inner.page.borrow().scrolled_to.clone()
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.inner.scroll_listeners.len()
    }

    pub fn color_scheme_listener_count(&self) -> usize {
        self.inner.scheme_listeners.len()
    }
}

impl HostPage for InMemoryHost {
    fn scroll_offset(&self) -> Result<f64> {
        Ok(self.inner.page.borrow().scroll_y)
    }

    fn prefers_dark(&self, query: &str) -> Result<bool> {
        if query.trim().is_empty() {
            return Err(NavError::MediaQueryUnsupported(query.to_string()));
        }
        Ok(self.inner.page.borrow().prefers_dark)
    }

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<()> {
        let mut page = self.inner.page.borrow_mut();
        if enabled {
            page.root_classes.insert(class.to_string());
        } else {
            page.root_classes.remove(class);
        }
        Ok(())
    }

    fn scroll_into_view(&self, id: &str) -> Result<bool> {
        let mut page = self.inner.page.borrow_mut();
        if page.elements.contains(id) {
            page.scrolled_to.push(id.to_string());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn on_scroll(&self, handler: ScrollHandler) -> Result<Subscription> {
        let id = self.inner.scroll_listeners.add(handler);
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        Ok(Subscription::new("scroll", move || {
            if let Some(inner) = weak.upgrade() {
                inner.scroll_listeners.remove(id);
            }
        }))
    }

    fn on_color_scheme_change(&self, query: &str, handler: SchemeHandler) -> Result<Subscription> {
        if query.trim().is_empty() {
            return Err(NavError::MediaQueryUnsupported(query.to_string()));
        }
        let id = self.inner.scheme_listeners.add(handler);
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        Ok(Subscription::new("color_scheme", move || {
            if let Some(inner) = weak.upgrade() {
                inner.scheme_listeners.remove(id);
            }
        }))
    }
}
