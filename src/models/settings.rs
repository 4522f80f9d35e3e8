use serde::{Deserialize, Serialize};

/// Site configuration served by `GET /settings`. Sections the backend
/// omits fall back to the defaults below, field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub general: GeneralSettings,
    pub branding: BrandingSettings,
    pub homepage: HomepageSettings,
    pub seo: SeoSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub site_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        GeneralSettings {
            site_name: "CIDCO Mitra".to_string(),
            contact_email: "info@cidcomitra.gov.in".to_string(),
            contact_phone: "+91 1234567890".to_string(),
            address: "Mumbai, Maharashtra, India".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
}

impl Default for BrandingSettings {
    fn default() -> Self {
        BrandingSettings {
            primary_color: "#ca8a04".to_string(),
            secondary_color: "#64748b".to_string(),
            font_family: "Inter".to_string(),
            logo_url: None,
            favicon_url: None,
        }
    }
}

impl BrandingSettings {
    /// Asset paths come back relative to the API origin.
    pub fn absolute_logo_url(&self, api_root: &str) -> Option<String> {
        self.logo_url.as_deref().map(|path| join_asset(api_root, path))
    }

    pub fn absolute_favicon_url(&self, api_root: &str) -> Option<String> {
        self.favicon_url
            .as_deref()
            .map(|path| join_asset(api_root, path))
    }
}

fn join_asset(api_root: &str, path: &str) -> String {
    format!("{}{}", api_root.trim_end_matches('/'), path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomepageSettings {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta_text: String,
    pub hero_cta_link: String,
    pub about_title: String,
    pub about_description: String,
    pub features: Vec<serde_json::Value>,
}

impl Default for HomepageSettings {
    fn default() -> Self {
        HomepageSettings {
            hero_title: "Welcome to CIDCO Mitra".to_string(),
            hero_subtitle: "Your trusted partner for urban development".to_string(),
            hero_cta_text: "Get Started".to_string(),
            hero_cta_link: "/contact".to_string(),
            about_title: "About Us".to_string(),
            about_description: "We are committed to excellence".to_string(),
            features: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSettings {
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: Option<String>,
}

impl Default for SeoSettings {
    fn default() -> Self {
        SeoSettings {
            meta_title: "CIDCO Mitra - Official Website".to_string(),
            meta_description: "CIDCO Mitra official website".to_string(),
            meta_keywords: String::new(),
            og_title: String::new(),
            og_description: String::new(),
            og_image: None,
        }
    }
}
