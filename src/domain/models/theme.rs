use serde::{Deserialize, Serialize};

/// Color scheme applied to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ColorScheme::Light => "Light",
            ColorScheme::Dark => "Dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ColorScheme::Light => "☀️",
            ColorScheme::Dark => "🌙",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// Map a `prefers-color-scheme: dark` match result
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// Request sent to the theme store. The store is the only writer of the root flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIntent {
    /// OS preference observed (at mount or on change)
    System(ColorScheme),
    /// User picked a scheme with the toggle widget
    Manual(ColorScheme),
    /// Drop the manual override and follow the OS again
    ClearManual,
}

/// Who wins when the OS preference changes after a manual toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePrecedence {
    /// An OS change event discards the manual override
    #[default]
    System,
    /// A manual override survives OS change events until cleared
    Manual,
}

/// Reconciled theme state owned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub system: Option<ColorScheme>,
    pub manual: Option<ColorScheme>,
}

impl ThemeState {
    /// Fold an intent into the state
    pub fn reduce(self, intent: ThemeIntent, precedence: ThemePrecedence) -> ThemeState {
        match intent {
            ThemeIntent::System(scheme) => {
                let manual = match precedence {
                    ThemePrecedence::System if self.system != Some(scheme) => None,
                    _ => self.manual,
                };
                ThemeState {
                    system: Some(scheme),
                    manual,
                }
            }
            ThemeIntent::Manual(scheme) => ThemeState {
                manual: Some(scheme),
                ..self
            },
            ThemeIntent::ClearManual => ThemeState {
                manual: None,
                ..self
            },
        }
    }

    /// Manual override first, then the OS, then light
    pub fn effective(&self) -> ColorScheme {
        self.manual.or(self.system).unwrap_or_default()
    }
}
