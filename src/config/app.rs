//! Marketing app configuration

use serde::{Deserialize, Serialize};

/// Settings of the marketing app that hosts the guides collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Public site URL
    pub site: String,
    /// Base path the app is served under
    pub base: String,
    pub build: BuildConfig,
    pub integrations: Vec<Integration>,
    /// Directory holding the guides collection, relative to the site root
    pub guides_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site: "https://example.com".to_string(),
            base: "/".to_string(),
            build: BuildConfig::default(),
            integrations: vec![Integration::Tailwind, Integration::Sitemap, Integration::Mdx],
            guides_dir: "src/content/guides".to_string(),
        }
    }
}

impl AppConfig {
    /// Public URL of a page of the app
    pub fn page_url(&self, path: &str) -> String {
        let site = self.site.trim_end_matches('/');
        let base = self.base.trim_matches('/');
        let path = path.trim_start_matches('/');

        if base.is_empty() {
            format!("{}/{}", site, path)
        } else {
            format!("{}/{}/{}", site, base, path)
        }
    }

    pub fn has_integration(&self, integration: Integration) -> bool {
        self.integrations.contains(&integration)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BuildConfig {
    pub inline_stylesheets: InlineStylesheets,
}

/// When stylesheets are inlined into pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InlineStylesheets {
    #[default]
    Always,
    Auto,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integration {
    Tailwind,
    Sitemap,
    Mdx,
}
