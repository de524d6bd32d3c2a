//! Browser host page over web-sys (wasm32 only)

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MediaQueryList, MediaQueryListEvent, ScrollBehavior, ScrollIntoViewOptions, Window};

use super::host::{HostPage, SchemeHandler, ScrollHandler, Subscription};
use crate::shared::errors::{NavError, Result};

/// The page the WASM bundle runs in
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

fn window() -> Result<Window> {
    web_sys::window().ok_or(NavError::WindowUnavailable)
}

fn document() -> Result<Document> {
    window()?.document().ok_or(NavError::DocumentUnavailable)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn media_query(query: &str) -> Result<MediaQueryList> {
    window()?
        .match_media(query)
        .map_err(|e| NavError::MediaQueryUnsupported(format!("{}: {}", query, describe(&e))))?
        .ok_or_else(|| NavError::MediaQueryUnsupported(query.to_string()))
}

impl HostPage for BrowserHost {
    fn scroll_offset(&self) -> Result<f64> {
        window()?
            .scroll_y()
            .map_err(|e| NavError::DomError(describe(&e)))
    }

    fn prefers_dark(&self, query: &str) -> Result<bool> {
        Ok(media_query(query)?.matches())
    }

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<()> {
        let root = document()?
            .document_element()
            .ok_or(NavError::DocumentUnavailable)?;
        root.class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(|e| NavError::DomError(describe(&e)))
    }

    fn scroll_into_view(&self, id: &str) -> Result<bool> {
        let Some(element) = document()?.get_element_by_id(id) else {
            return Ok(false);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }

    fn on_scroll(&self, mut handler: ScrollHandler) -> Result<Subscription> {
        let window = window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                handler(offset);
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|e| NavError::ListenerError(describe(&e)))?;

        Ok(Subscription::new("scroll", move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }))
    }

    fn on_color_scheme_change(&self, query: &str, mut handler: SchemeHandler) -> Result<Subscription> {
        let list = media_query(query)?;
        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            handler(event.matches());
        });
        list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(|e| NavError::ListenerError(describe(&e)))?;

        Ok(Subscription::new("color_scheme", move || {
            let _ = list.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
        }))
    }
}
