use serde::{Deserialize, Serialize};

use crate::i18n::LocalizedText;

/// A catalog entry. Created and edited by the admin panel; read-only
/// from this client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub overview: LocalizedText,
    #[serde(default)]
    pub pricing: LocalizedText,
    #[serde(default)]
    pub documents: LocalizedText,
    #[serde(default)]
    pub timeline: LocalizedText,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    /// Inactive services are excluded from public listings but remain
    /// fetchable by identifier. Older backends emit this as `status`.
    #[serde(default, alias = "status")]
    pub is_active: bool,
}

impl Service {
    /// wa.me link for the service's messaging handle, digits only.
    pub fn whatsapp_link(&self) -> Option<String> {
        let handle = self.whatsapp.as_deref()?;
        let digits: String = handle.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            None
        } else {
            Some(format!("https://wa.me/{}", digits))
        }
    }
}
