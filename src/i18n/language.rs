use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedLanguage {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "mr")]
    Marathi,
    #[serde(rename = "hi")]
    Hindi,
}

impl SupportedLanguage {
    /// Get all supported languages
    pub fn all() -> &'static [SupportedLanguage] {
        &[
            SupportedLanguage::English,
            SupportedLanguage::Marathi,
            SupportedLanguage::Hindi,
        ]
    }

    /// Get the language code as a string
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "en",
            SupportedLanguage::Marathi => "mr",
            SupportedLanguage::Hindi => "hi",
        }
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "English",
            SupportedLanguage::Marathi => "मराठी",
            SupportedLanguage::Hindi => "हिन्दी",
        }
    }

    /// Parse from a locale tag such as "mr-IN" or "en_US"
    pub fn from_locale_tag(tag: &str) -> Self {
        let lang = tag.trim().to_lowercase();

        if lang.starts_with("mr") {
            SupportedLanguage::Marathi
        } else if lang.starts_with("hi") {
            SupportedLanguage::Hindi
        } else {
            Self::default()
        }
    }
}

impl Default for SupportedLanguage {
    fn default() -> Self {
        SupportedLanguage::English
    }
}

impl Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SupportedLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" | "en-us" => Ok(SupportedLanguage::English),
            "mr" | "marathi" | "मराठी" => Ok(SupportedLanguage::Marathi),
            "hi" | "hindi" | "हिन्दी" => Ok(SupportedLanguage::Hindi),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
