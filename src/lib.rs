// Public API exports
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Dioxus components
pub mod app;
