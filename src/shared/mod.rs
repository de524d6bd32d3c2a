pub mod errors;
pub mod logging;

// Dioxus hooks (need a component scope)
pub mod hooks;
