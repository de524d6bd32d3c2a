// Navbar behaviors
// Framework-agnostic, testable against InMemoryHost

pub mod theme_store;
pub mod theme_watcher;
pub mod scroll_observer;
pub mod section_navigator;
pub mod lifecycle;

pub use theme_store::ThemeStore;
pub use theme_watcher::ThemePreferenceWatcher;
pub use scroll_observer::ScrollObserver;
pub use section_navigator::{NavigationOutcome, SectionNavigator};
pub use lifecycle::NavLifecycle;
