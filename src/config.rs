use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::i18n::SupportedLanguage;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the public API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, including the version prefix.
    pub base_url: String,
    /// Single request-level timeout applied to every call.
    pub timeout: Duration,
    /// Language used when no explicit preference is given.
    pub default_language: SupportedLanguage,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("MITRA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match env::var("MITRA_API_TIMEOUT_SECS") {
            Ok(val) => val
                .parse::<u64>()
                .context("Failed to parse MITRA_API_TIMEOUT_SECS")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let default_language = match env::var("MITRA_DEFAULT_LANGUAGE") {
            Ok(val) => val
                .parse::<SupportedLanguage>()
                .map_err(anyhow::Error::msg)
                .context("Failed to parse MITRA_DEFAULT_LANGUAGE")?,
            Err(_) => SupportedLanguage::default(),
        };

        Ok(ClientConfig {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            default_language,
        })
    }

    /// Origin of the API with the version prefix stripped, used to
    /// absolutize asset paths returned by the settings endpoint.
    pub fn api_root(&self) -> &str {
        self.base_url
            .strip_suffix("/api/v1")
            .unwrap_or(&self.base_url)
            .trim_end_matches('/')
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_language: SupportedLanguage::default(),
        }
    }
}

// Use once_cell for a global config instance that's initialized once
use once_cell::sync::OnceCell;

static CONFIG: OnceCell<ClientConfig> = OnceCell::new();

pub fn init() -> Result<&'static ClientConfig> {
    CONFIG.get_or_try_init(ClientConfig::from_env)
}

pub fn get() -> &'static ClientConfig {
    CONFIG.get().expect("Config is not initialized")
}
