// Custom Dioxus hooks
pub mod use_nav;
pub mod use_theme;

pub use use_nav::{
    use_host, use_nav_config, use_nav_lifecycle, use_nav_provider, use_section_navigator, use_theme_store,
};
pub use use_theme::{use_theme, UseThemeReturn};
