//! Structured logging module for the portfolio navbar
//!
//! Provides consistent, contextual logging across the component.
//! Every event carries an `operation` field so browser and native logs can be filtered.

use crate::domain::models::{ColorScheme, ScrollState, ThemeIntent};

/// Log operations for the navbar behaviors
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ScrollObserve,
    ThemeSync,
    SectionNavigate,
    Lifecycle,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ScrollObserve => "scroll_observe",
            LogOperation::ThemeSync => "theme_sync",
            LogOperation::SectionNavigate => "section_navigate",
            LogOperation::Lifecycle => "lifecycle",
            LogOperation::Config => "config",
        }
    }
}

/// Log a scroll state flip across the threshold
pub fn log_scroll_state_change(offset: f64, threshold: f64, state: ScrollState) {
    tracing::debug!(
        operation = LogOperation::ScrollObserve.as_str(),
        offset = offset,
        threshold = threshold,
        is_scrolled = state.is_scrolled(),
        "Scroll state changed"
    );
}

/// Log an intent received by the theme store
pub fn log_theme_intent(intent: ThemeIntent) {
    tracing::trace!(
        operation = LogOperation::ThemeSync.as_str(),
        intent = ?intent,
        "Theme intent dispatched"
    );
}

/// Log the effective scheme being written to the document root
pub fn log_theme_applied(scheme: ColorScheme, class: &str) {
    tracing::info!(
        operation = LogOperation::ThemeSync.as_str(),
        scheme = scheme.as_str(),
        root_class = class,
        "Color scheme applied to document root"
    );
}

/// Log a failure to write the document root class
pub fn log_theme_apply_error(scheme: ColorScheme, error: &str) {
    tracing::warn!(
        operation = LogOperation::ThemeSync.as_str(),
        scheme = scheme.as_str(),
        error = error,
        "Failed to apply color scheme"
    );
}

/// Log a successful scroll-into-view
pub fn log_navigation_scrolled(target: &str) {
    tracing::debug!(
        operation = LogOperation::SectionNavigate.as_str(),
        target = target,
        "Scrolled section into view"
    );
}

/// Log a navigation to an id that is not on the page (silent no-op)
pub fn log_navigation_missing(target: &str) {
    tracing::debug!(
        operation = LogOperation::SectionNavigate.as_str(),
        target = target,
        "Section not found - navigation skipped"
    );
}

/// Log a host failure during navigation
pub fn log_navigation_error(target: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::SectionNavigate.as_str(),
        target = target,
        error = error,
        "Section navigation failed"
    );
}

/// Log listener acquisition on mount
pub fn log_mount(listener: &str) {
    tracing::debug!(
        operation = LogOperation::Lifecycle.as_str(),
        listener = listener,
        "Listener attached"
    );
}

/// Log a listener that could not be attached; the navbar keeps working without it
pub fn log_mount_error(listener: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Lifecycle.as_str(),
        listener = listener,
        error = error,
        "Failed to attach listener - feature disabled"
    );
}

/// Log listener release on unmount
pub fn log_unmount(listener: &str) {
    tracing::debug!(
        operation = LogOperation::Lifecycle.as_str(),
        listener = listener,
        "Listener detached"
    );
}

/// Log a configuration fallback to defaults
pub fn log_config_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        error = error,
        "Invalid navbar configuration, using defaults"
    );
}
