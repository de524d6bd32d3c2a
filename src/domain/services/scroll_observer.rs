use std::cell::Cell;
use std::rc::Rc;

use crate::domain::models::ScrollState;
use crate::infrastructure::{SharedHost, Subscription};
use crate::shared::errors::Result;
use crate::shared::logging::log_scroll_state_change;

/// Tracks whether the viewport is past the scroll threshold.
///
/// Every scroll event recomputes the state; `on_change` only runs when it flips.
#[derive(Debug)]
pub struct ScrollObserver {
    state: Rc<Cell<ScrollState>>,
    subscription: Subscription,
}

impl ScrollObserver {
    /// Seed from the current offset and start listening.
    pub fn attach(
        host: &SharedHost,
        threshold: f64,
        mut on_change: impl FnMut(ScrollState) + 'static,
    ) -> Result<Self> {
        let initial = ScrollState::from_offset(host.scroll_offset()?, threshold);
        let state = Rc::new(Cell::new(initial));

        let tracked = state.clone();
        let subscription = host.on_scroll(Box::new(move |offset: f64| {
            let next = ScrollState::from_offset(offset, threshold);
            if tracked.get() != next {
                tracked.set(next);
                log_scroll_state_change(offset, threshold, next);
                on_change(next);
            }
        }))?;

        Ok(ScrollObserver { state, subscription })
    }

    pub fn state(&self) -> ScrollState {
        self.state.get()
    }

    pub fn detach(self) {
        self.subscription.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryHost;
    use std::cell::RefCell;

    fn observe(host: &InMemoryHost) -> (ScrollObserver, Rc<RefCell<Vec<ScrollState>>>) {
        let shared: SharedHost = Rc::new(host.clone());
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        let observer = ScrollObserver::attach(&shared, 50.0, move |s| sink.borrow_mut().push(s)).unwrap();
        (observer, changes)
    }

    #[test]
    fn test_boundary_50_and_51() {
        let host = InMemoryHost::new();
        let (observer, _) = observe(&host);

        host.scroll_to(50.0);
        assert!(!observer.state().is_scrolled());
        host.scroll_to(51.0);
        assert!(observer.state().is_scrolled());
        host.scroll_to(50.0);
        assert!(!observer.state().is_scrolled());
    }

    #[test]
    fn test_change_reported_only_on_crossing() {
        let host = InMemoryHost::new();
        let (_observer, changes) = observe(&host);

        for offset in [10.0, 30.0, 60.0, 200.0, 400.0, 20.0, 0.0] {
            host.scroll_to(offset);
        }

        assert_eq!(*changes.borrow(), vec![ScrollState::SCROLLED, ScrollState::TOP]);
    }

    #[test]
    fn test_seeded_from_current_offset() {
        let host = InMemoryHost::new();
        host.scroll_to(300.0);
        let (observer, changes) = observe(&host);

        assert!(observer.state().is_scrolled());
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_detach_ignores_later_events() {
        let host = InMemoryHost::new();
        let (observer, changes) = observe(&host);
        assert_eq!(host.scroll_listener_count(), 1);

        observer.detach();
        host.scroll_to(500.0);

        assert_eq!(host.scroll_listener_count(), 0);
        assert!(changes.borrow().is_empty());
    }
}
