//! Navbar configuration
//!
//! Every field has a default, so a partial JSON document only overrides
//! what it names. The app embeds `assets/nav.json` at compile time.

use serde::{Deserialize, Serialize};

use crate::domain::models::{SectionId, ThemePrecedence, DEFAULT_SCROLL_THRESHOLD_PX};
use crate::shared::errors::{NavError, Result};
use crate::shared::logging::log_config_fallback;

pub const DEFAULT_COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Embedded configuration file
pub const EMBEDDED_CONFIG: &str = include_str!("../assets/nav.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Offset (px) past which the navbar turns compact
    pub scroll_threshold_px: f64,
    /// Class toggled on the document root for dark mode
    pub dark_class: String,
    pub color_scheme_query: String,
    pub theme_precedence: ThemePrecedence,
    /// Menu entries, in display order
    pub sections: Vec<SectionId>,
    pub brand_name: String,
    pub logo_src: String,
    pub cta_label: String,
    /// Element id the call-to-action scrolls to
    pub cta_target: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            color_scheme_query: DEFAULT_COLOR_SCHEME_QUERY.to_string(),
            theme_precedence: ThemePrecedence::default(),
            sections: SectionId::ALL.to_vec(),
            brand_name: "Daryl Gatt".to_string(),
            logo_src: "./assets/images/hacker.png".to_string(),
            cta_label: "Contact Me!".to_string(),
            cta_target: SectionId::Contact.as_str().to_string(),
        }
    }
}

impl NavConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded configuration, or defaults when it is invalid
    pub fn load() -> Self {
        Self::from_json(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            log_config_fallback(&e.to_string());
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "scroll_threshold_px must be a non-negative number, got {}",
                self.scroll_threshold_px
            )));
        }
        if self.dark_class.trim().is_empty() || self.dark_class.contains(char::is_whitespace) {
            return Err(NavError::InvalidConfig(
                "dark_class must be a single non-empty class name".to_string(),
            ));
        }
        if self.color_scheme_query.trim().is_empty() {
            return Err(NavError::InvalidConfig(
                "color_scheme_query must not be empty".to_string(),
            ));
        }
        if self.sections.is_empty() {
            return Err(NavError::InvalidConfig(
                "at least one section is required".to_string(),
            ));
        }
        if self.cta_target.trim().is_empty() {
            return Err(NavError::InvalidConfig(
                "cta_target must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
