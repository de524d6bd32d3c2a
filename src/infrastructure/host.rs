//! Host page abstraction
//!
//! Everything the navbar needs from the page it is mounted in. The browser
//! implementation lives in `browser.rs` (wasm32 only); `memory.rs` provides
//! a deterministic page for native builds and tests.

use std::rc::Rc;

use crate::shared::errors::Result;
use crate::shared::logging::log_unmount;

/// Receives the new vertical scroll offset
pub type ScrollHandler = Box<dyn FnMut(f64)>;

/// Receives whether the color-scheme media query now matches
pub type SchemeHandler = Box<dyn FnMut(bool)>;

/// Page services used by the navbar. Single-threaded: implementations are
/// driven from the UI event loop only.
pub trait HostPage {
    /// Current vertical scroll offset in px
    fn scroll_offset(&self) -> Result<f64>;

    /// Whether `query` (e.g. `(prefers-color-scheme: dark)`) matches right now
    fn prefers_dark(&self, query: &str) -> Result<bool>;

    /// Add or remove `class` on the document root element
    fn set_root_class(&self, class: &str, enabled: bool) -> Result<()>;

    /// Smooth-scroll the element with this id into view.
    /// Returns `Ok(false)` when no such element exists.
    fn scroll_into_view(&self, id: &str) -> Result<bool>;

    /// Listen to viewport scroll events
    fn on_scroll(&self, handler: ScrollHandler) -> Result<Subscription>;

    /// Listen to changes of the color-scheme media query
    fn on_color_scheme_change(&self, query: &str, handler: SchemeHandler) -> Result<Subscription>;
}

/// Shared handle used by hooks and services
pub type SharedHost = Rc<dyn HostPage>;

/// Attached event listener. Dropping it detaches the listener.
pub struct Subscription {
    label: &'static str,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(label: &'static str, detach: impl FnOnce() + 'static) -> Self {
        Subscription {
            label,
            detach: Some(Box::new(detach)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    /// Detach now instead of at drop
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
            log_unmount(self.label);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}
