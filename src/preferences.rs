//! Process-wide display preferences (language and theme) with explicit
//! read/write accessors. Components still take the language as a plain
//! argument; this is only where the user's choice lives between calls.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::i18n::SupportedLanguage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: SupportedLanguage,
    pub theme: Theme,
}

static PREFERENCES: Lazy<RwLock<Preferences>> = Lazy::new(|| RwLock::new(Preferences::default()));

pub fn current() -> Preferences {
    *PREFERENCES.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn set_language(language: SupportedLanguage) {
    PREFERENCES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .language = language;
}

pub fn set_theme(theme: Theme) {
    PREFERENCES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .theme = theme;
}

/// Flip between light and dark, returning the new theme.
pub fn toggle_theme() -> Theme {
    let mut prefs = PREFERENCES.write().unwrap_or_else(PoisonError::into_inner);
    prefs.theme = prefs.theme.toggled();
    prefs.theme
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test on purpose: the preference store is process-wide.
    #[test]
    fn accessors_round_trip() {
        assert_eq!(current().language, SupportedLanguage::English);
        assert_eq!(current().theme, Theme::Light);

        set_language(SupportedLanguage::Marathi);
        assert_eq!(current().language, SupportedLanguage::Marathi);

        assert_eq!(toggle_theme(), Theme::Dark);
        assert_eq!(current().theme, Theme::Dark);
        set_theme(Theme::Light);
        assert_eq!(current().theme, Theme::Light);

        set_language(SupportedLanguage::English);
    }
}
