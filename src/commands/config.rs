//! Print the effective configuration

use anyhow::{Context, Result};

use crate::Garden;

pub fn run(garden: &Garden, format: &str) -> Result<()> {
    print!("{}", dump(garden, format)?);
    Ok(())
}

/// Serialize the loaded configuration, defaults included
pub fn dump(garden: &Garden, format: &str) -> Result<String> {
    let config = &garden.config;
    let mut out = match format {
        "yaml" | "yml" => serde_yaml::to_string(config).context("Failed to serialize YAML")?,
        "json" => serde_json::to_string_pretty(config).context("Failed to serialize JSON")?,
        "toml" => toml::to_string_pretty(config).context("Failed to serialize TOML")?,
        _ => anyhow::bail!("Unknown format: {}. Available: yaml, json, toml", format),
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_dump_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.configuration.locale = "ru-RU".to_string();
        config.configuration.list_exclusions = vec!["SEO для инфобизнеса".to_string()];
        let garden = Garden::with_config(dir.path(), config);

        let yaml = dump(&garden, "yaml").unwrap();
        let back: SiteConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.configuration.locale, "ru-RU");
        assert_eq!(back.layout, garden.config.layout);

        let json = dump(&garden, "json").unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.configuration.list_exclusions, vec!["SEO для инфобизнеса"]);

        assert!(dump(&garden, "ini").is_err());
    }
}
