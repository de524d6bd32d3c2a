// Domain models
// Pure Rust, no framework dependencies

pub mod section;
pub mod scroll;
pub mod theme;
pub mod presentation;

pub use section::{capitalize, SectionId};
pub use scroll::{ScrollState, DEFAULT_SCROLL_THRESHOLD_PX};
pub use theme::{ColorScheme, ThemeIntent, ThemePrecedence, ThemeState};
pub use presentation::NavPresentation;
