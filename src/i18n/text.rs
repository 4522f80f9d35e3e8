use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::i18n::SupportedLanguage;

/// A text field that may arrive either as a plain string or as a
/// language-code-to-string map.
///
/// Resolution order: requested language, then English, then whatever
/// translation exists first. Older catalog rows predate the multilingual
/// editor and still carry plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Map(BTreeMap<String, String>),
}

impl LocalizedText {
    pub fn resolve(&self, language: SupportedLanguage) -> &str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::Map(map) => map
                .get(language.code())
                .or_else(|| map.get(SupportedLanguage::default().code()))
                .or_else(|| map.values().next())
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LocalizedText::Plain(text) => text.is_empty(),
            LocalizedText::Map(map) => map.values().all(|v| v.is_empty()),
        }
    }
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        LocalizedText::Plain(text.to_string())
    }
}
