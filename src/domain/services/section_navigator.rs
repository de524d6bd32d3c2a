use crate::domain::models::SectionId;
use crate::infrastructure::SharedHost;
use crate::shared::logging::{log_navigation_error, log_navigation_missing, log_navigation_scrolled};

/// Result of a navigation request. None of these is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The element was found and scrolled into view
    Scrolled,
    /// No element with that id on the page; nothing happened
    Missing,
    /// The page could not be queried; logged and ignored
    Failed,
}

/// Smooth-scrolls the viewport to in-page sections
#[derive(Clone)]
pub struct SectionNavigator {
    host: SharedHost,
}

impl SectionNavigator {
    pub fn new(host: SharedHost) -> Self {
        SectionNavigator { host }
    }

    /// Scroll to the element whose id is `target`. Unknown ids are a no-op.
    pub fn navigate(&self, target: &str) -> NavigationOutcome {
        match self.host.scroll_into_view(target) {
            Ok(true) => {
                log_navigation_scrolled(target);
                NavigationOutcome::Scrolled
            }
            Ok(false) => {
                log_navigation_missing(target);
                NavigationOutcome::Missing
            }
            Err(e) => {
                log_navigation_error(target, &e.to_string());
                NavigationOutcome::Failed
            }
        }
    }

    pub fn navigate_to(&self, section: SectionId) -> NavigationOutcome {
        self.navigate(section.as_str())
    }
}
