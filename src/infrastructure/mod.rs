// Page access behind the HostPage trait

pub mod host;
pub mod memory;

// Browser-only (web-sys closures and DOM)
#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use host::{HostPage, SchemeHandler, ScrollHandler, SharedHost, Subscription};
pub use memory::InMemoryHost;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHost;

use std::rc::Rc;

use crate::config::NavConfig;

/// Host for the current target: the real page in the browser, elsewhere an
/// in-memory page holding the configured sections and call-to-action target
/// (no live scroll or OS theme events there)
pub fn default_host(config: &NavConfig) -> SharedHost {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        Rc::new(BrowserHost)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let host = InMemoryHost::with_elements(config.sections.iter().map(|section| section.as_str()));
        host.add_element(config.cta_target.clone());
        Rc::new(host)
    }
}
