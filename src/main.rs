//! Portfolio navbar - Main Entry Point
//!
//! Launches the single-page site with the Dioxus renderer selected by feature
//! (`web` by default, `desktop` for a native window).

use portfolio_navbar::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] Portfolio navbar - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The launcher may already have installed a subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();

    tracing::info!("Starting portfolio navbar...");
    dioxus::launch(App);
}
