//! Internationalization (i18n) support

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::helpers::language;

/// Locale every lookup falls back to
pub const FALLBACK_LOCALE: &str = "en-US";

const BUILTIN: [(&str, &str); 2] = [
    ("en-US", include_str!("../../locales/en-US.yml")),
    ("ru-RU", include_str!("../../locales/ru-RU.yml")),
];

/// Internationalization handler
pub struct I18n {
    /// Locale asked for by the site
    requested: String,
    /// Loaded locale serving lookups
    locale: String,
    /// Locale data: locale -> key -> translation
    translations: HashMap<String, HashMap<String, serde_yaml::Value>>,
}

impl I18n {
    /// Create a handler for a locale with the built-in translations loaded
    pub fn new(locale: &str) -> Self {
        let mut translations = HashMap::new();
        for (name, content) in BUILTIN {
            match serde_yaml::from_str(content) {
                Ok(data) => {
                    translations.insert(name.to_string(), data);
                }
                Err(e) => tracing::warn!("Failed to parse built-in locale {}: {}", name, e),
            }
        }

        let mut i18n = Self {
            requested: locale.to_string(),
            locale: FALLBACK_LOCALE.to_string(),
            translations,
        };
        i18n.locale = i18n.resolve_locale(locale);
        i18n
    }

    /// Load locale override files from a directory
    ///
    /// Top-level keys of a file replace those of the same locale.
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("yml") | Some("yaml") | Some("json")) {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path)?;
            let data: Option<HashMap<String, serde_yaml::Value>> = if ext == Some("json") {
                match serde_json::from_str::<serde_json::Value>(&content) {
                    Ok(json) => Some(convert_json_to_yaml(json)),
                    Err(e) => {
                        tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                        None
                    }
                }
            } else {
                match serde_yaml::from_str(&content) {
                    Ok(data) => Some(data),
                    Err(e) => {
                        tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                        None
                    }
                }
            };

            if let Some(data) = data {
                self.translations
                    .entry(locale.to_string())
                    .or_default()
                    .extend(data);
                tracing::debug!("Loaded language file: {:?}", path);
            }
        }

        self.locale = self.resolve_locale(&self.requested);
        Ok(())
    }

    /// Get the current locale
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Get a translation by key, nested keys use dots: `components.recentNotes.title`
    pub fn get(&self, key: &str) -> String {
        self.lookup(key)
            .map(yaml_value_to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Get a pluralized translation with `{count}` replaced
    ///
    /// The key holds one entry per plural category of the locale.
    /// A missing category falls back to `other`, then `many`.
    pub fn get_plural(&self, key: &str, count: usize) -> String {
        let category = plural_category(&self.locale, count);
        let translation = [category, "other", "many"]
            .iter()
            .find_map(|c| self.lookup(&format!("{}.{}", key, c)))
            .or_else(|| self.lookup(key).filter(|v| !v.is_mapping()))
            .map(yaml_value_to_string)
            .unwrap_or_else(|| key.to_string());

        translation.replace("{count}", &count.to_string())
    }

    /// Check if a translation exists for the current locale or the fallback
    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn lookup(&self, key: &str) -> Option<&serde_yaml::Value> {
        [self.locale.as_str(), FALLBACK_LOCALE]
            .iter()
            .filter_map(|locale| self.translations.get(*locale))
            .find_map(|data| get_nested_value(data, key))
    }

    /// Exact locale if loaded, else one with the same language, else the fallback
    fn resolve_locale(&self, locale: &str) -> String {
        if self.translations.contains_key(locale) {
            return locale.to_string();
        }
        let lang = language(locale);
        let mut candidates: Vec<&String> = self
            .translations
            .keys()
            .filter(|name| language(name) == lang)
            .collect();
        candidates.sort();
        candidates
            .first()
            .map(|name| name.to_string())
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE)
    }
}

/// CLDR plural category of a count
fn plural_category(locale: &str, count: usize) -> &'static str {
    match language(locale) {
        "ru" | "uk" => {
            let (m10, m100) = (count % 10, count % 100);
            if m10 == 1 && m100 != 11 {
                "one"
            } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                "few"
            } else {
                "many"
            }
        }
        _ if count == 1 => "one",
        _ => "other",
    }
}

/// Get a nested value from a YAML map using dot notation
fn get_nested_value<'a>(
    data: &'a HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<&'a serde_yaml::Value> {
    let mut parts = key.split('.');
    let mut current = data.get(parts.next()?);

    for part in parts {
        current = current?.as_mapping()?.get(part);
    }

    current
}

/// Convert a YAML value to a string
fn yaml_value_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => String::new(),
        _ => format!("{:?}", value),
    }
}

/// Convert JSON value to YAML HashMap
fn convert_json_to_yaml(json: serde_json::Value) -> HashMap<String, serde_yaml::Value> {
    let mut result = HashMap::new();

    if let serde_json::Value::Object(obj) = json {
        for (key, value) in obj {
            result.insert(key, json_value_to_yaml(value));
        }
    }

    result
}

fn json_value_to_yaml(json: serde_json::Value) -> serde_yaml::Value {
    match json {
        serde_json::Value::Null => serde_yaml::Value::Null,
        serde_json::Value::Bool(b) => serde_yaml::Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_yaml::Value::Number(i.into())
            } else if let Some(f) = n.as_f64() {
                serde_yaml::Value::Number(serde_yaml::Number::from(f))
            } else {
                serde_yaml::Value::Null
            }
        }
        serde_json::Value::String(s) => serde_yaml::Value::String(s),
        serde_json::Value::Array(arr) => {
            serde_yaml::Value::Sequence(arr.into_iter().map(json_value_to_yaml).collect())
        }
        serde_json::Value::Object(obj) => {
            let mut map = serde_yaml::Mapping::new();
            for (k, v) in obj {
                map.insert(serde_yaml::Value::String(k), json_value_to_yaml(v));
            }
            serde_yaml::Value::Mapping(map)
        }
    }
}
