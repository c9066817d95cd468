//! Site configuration (garden.yml)

use anyhow::{bail, Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::app::AppConfig;
use super::layout::LayoutConfig;
use super::plugins::PluginsConfig;

/// Main site configuration
///
/// Loaded once and passed by reference to everything that needs it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub configuration: GlobalConfig,
    pub plugins: PluginsConfig,
    pub layout: LayoutConfig,
    pub homepage: HomePageConfig,
    pub recent_notes: RecentNotesConfig,
    pub app: AppConfig,
    pub directories: DirectoryConfig,
}

impl SiteConfig {
    /// Load configuration from a YAML, TOML or JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;

        let config: SiteConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML in {:?}", path))?,
            Some("toml") => {
                toml::from_str(&content).with_context(|| format!("Invalid TOML in {:?}", path))?
            }
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in {:?}", path))?,
            other => bail!("Unsupported config format: {:?}", other),
        };

        if let Some(tz) = &config.configuration.timezone {
            if tz.parse::<Tz>().is_err() {
                tracing::warn!("Unknown timezone {:?}, dates will be shown in UTC", tz);
            }
        }

        Ok(config)
    }

    /// Find the config file in a site directory
    pub fn find<P: AsRef<Path>>(base_dir: P) -> Option<std::path::PathBuf> {
        ["garden.yml", "garden.yaml", "garden.toml", "garden.json"]
            .iter()
            .map(|name| base_dir.as_ref().join(name))
            .find(|p| p.exists())
    }
}

/// Directory layout of the site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub content: String,
    pub output: String,
    /// Locale overrides, one `<locale>.yml` per language
    pub i18n: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            output: "public".to_string(),
            i18n: "i18n".to_string(),
        }
    }
}

/// Global configuration shared by every component
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub page_title: String,
    pub page_title_suffix: String,
    pub enable_spa: bool,
    pub enable_popovers: bool,
    pub analytics: Option<Analytics>,
    pub locale: String,
    pub base_url: String,
    pub ignore_patterns: Vec<String>,
    pub default_date_type: DateType,
    /// IANA timezone used when displaying dates, UTC when unset
    pub timezone: Option<String>,
    /// Path prefixes that never show up in page lists
    pub list_exclusions: Vec<String>,
    pub theme: ThemeConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            page_title: "Garden".to_string(),
            page_title_suffix: String::new(),
            enable_spa: true,
            enable_popovers: true,
            analytics: Some(Analytics::Plausible { host: None }),
            locale: "en-US".to_string(),
            base_url: "example.com".to_string(),
            ignore_patterns: vec![
                "private".to_string(),
                "templates".to_string(),
                ".obsidian".to_string(),
            ],
            default_date_type: DateType::Created,
            timezone: None,
            list_exclusions: Vec::new(),
            theme: ThemeConfig::default(),
        }
    }
}

impl GlobalConfig {
    /// Parsed display timezone
    pub fn tz(&self) -> Tz {
        self.timezone
            .as_deref()
            .and_then(|tz| tz.parse().ok())
            .unwrap_or(Tz::UTC)
    }

    /// Full page title including the suffix
    pub fn full_title(&self, title: &str) -> String {
        format!("{}{}", title, self.page_title_suffix)
    }
}

/// Which of an entry's dates lists sort and display by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    #[default]
    Created,
    Modified,
    Published,
}

/// Analytics provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum Analytics {
    Plausible {
        #[serde(default)]
        host: Option<String>,
    },
    Google {
        tag_id: String,
    },
    Umami {
        website_id: String,
        #[serde(default)]
        host: Option<String>,
    },
}

/// Theme tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub font_origin: FontOrigin,
    pub cdn_caching: bool,
    pub typography: Typography,
    pub colors: Colors,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            font_origin: FontOrigin::GoogleFonts,
            cdn_caching: true,
            typography: Typography::default(),
            colors: Colors::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontOrigin {
    GoogleFonts,
    Local,
}

/// Font families
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub header: String,
    pub body: String,
    pub code: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            header: "Inter".to_string(),
            body: "Georgia".to_string(),
            code: "JetBrains Mono".to_string(),
        }
    }
}

/// Light and dark color palettes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub light_mode: Palette,
    pub dark_mode: Palette,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            light_mode: Palette {
                light: "#ffffff".to_string(),
                lightgray: "#f5f5f5".to_string(),
                gray: "#9ca3af".to_string(),
                darkgray: "#374151".to_string(),
                dark: "#141414".to_string(),
                secondary: "#53c257".to_string(),
                tertiary: "#2f9e35".to_string(),
                highlight: "rgba(83, 194, 87, 0.1)".to_string(),
                text_highlight: "#fbbf2488".to_string(),
            },
            dark_mode: Palette {
                light: "#0f172a".to_string(),
                lightgray: "#1e293b".to_string(),
                gray: "#64748b".to_string(),
                darkgray: "#cbd5e1".to_string(),
                dark: "#f1f5f9".to_string(),
                secondary: "#53c257".to_string(),
                tertiary: "#2f9e35".to_string(),
                highlight: "rgba(83, 194, 87, 0.15)".to_string(),
                text_highlight: "#fbbf2488".to_string(),
            },
        }
    }
}

/// One color palette
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Palette {
    pub light: String,
    pub lightgray: String,
    pub gray: String,
    pub darkgray: String,
    pub dark: String,
    pub secondary: String,
    pub tertiary: String,
    pub highlight: String,
    pub text_highlight: String,
}

impl Palette {
    /// CSS custom properties for this palette
    pub fn css_variables(&self) -> String {
        [
            ("light", &self.light),
            ("lightgray", &self.lightgray),
            ("gray", &self.gray),
            ("darkgray", &self.darkgray),
            ("dark", &self.dark),
            ("secondary", &self.secondary),
            ("tertiary", &self.tertiary),
            ("highlight", &self.highlight),
            ("textHighlight", &self.text_highlight),
        ]
        .iter()
        .map(|(name, value)| format!("--{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Homepage text
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HomePageConfig {
    /// Intro heading, falls back to the page title
    pub title: Option<String>,
    pub description: Option<String>,
    /// Heading above the article list
    pub section_title: Option<String>,
    pub limit: Option<usize>,
}

/// Recent notes widget settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentNotesConfig {
    pub title: Option<String>,
    pub limit: usize,
    pub link_to_more: Option<String>,
    pub show_tags: bool,
}

impl Default for RecentNotesConfig {
    fn default() -> Self {
        Self {
            title: None,
            limit: 3,
            link_to_more: None,
            show_tags: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.configuration.locale, "en-US");
        assert_eq!(config.configuration.default_date_type, DateType::Created);
        assert_eq!(config.recent_notes.limit, 3);
        assert_eq!(config.directories.content, "content");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
configuration:
  page_title: Здоровье и Нутрициология
  locale: ru-RU
  default_date_type: modified
  analytics:
    provider: plausible
  list_exclusions:
    - SEO для инфобизнеса
  theme:
    typography:
      header: Inter
homepage:
  section_title: Последние статьи
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.configuration.page_title, "Здоровье и Нутрициология");
        assert_eq!(config.configuration.locale, "ru-RU");
        assert_eq!(config.configuration.default_date_type, DateType::Modified);
        assert_eq!(
            config.configuration.analytics,
            Some(Analytics::Plausible { host: None })
        );
        assert_eq!(config.configuration.list_exclusions, vec!["SEO для инфобизнеса"]);
        assert_eq!(config.configuration.theme.typography.body, "Georgia");
        assert_eq!(
            config.homepage.section_title.as_deref(),
            Some("Последние статьи")
        );
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.toml");
        fs::write(
            &path,
            r#"
[configuration]
page_title = "Notes"
timezone = "Europe/Moscow"
"#,
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.configuration.page_title, "Notes");
        assert_eq!(config.configuration.tz(), chrono_tz::Europe::Moscow);
        assert_eq!(SiteConfig::find(dir.path()), Some(path));
    }

    #[test]
    fn test_sample_site_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("site/garden.yml");
        let config = SiteConfig::load(path).unwrap();
        assert_eq!(config.configuration.locale, "ru-RU");
        assert_eq!(config.configuration.tz(), chrono_tz::Europe::Moscow);
        assert_eq!(config.recent_notes.link_to_more.as_deref(), Some("index"));
        let recent = &config.layout.content_page.after_body[0];
        assert_eq!(recent.component, "RecentNotes");
        assert_eq!(
            recent.condition,
            Some(crate::config::SlugCondition::SlugIsNot("index".to_string()))
        );
        assert!(!recent.applies_to("index"));
        // sections left out keep their defaults
        assert_eq!(config.plugins, PluginsConfig::default());
    }

    #[test]
    fn test_unknown_timezone_falls_back_to_utc() {
        let config = GlobalConfig {
            timezone: Some("Mars/Olympus".to_string()),
            ..Default::default()
        };
        assert_eq!(config.tz(), Tz::UTC);
    }

    #[test]
    fn test_palette_css_variables() {
        let colors = Colors::default();
        let css = colors.light_mode.css_variables();
        assert!(css.starts_with("--light: #ffffff;"));
        assert!(css.contains("--textHighlight: #fbbf2488;"));
    }
}
