//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect())
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<serde_yaml::Value>()? {
                match item {
                    serde_yaml::Value::String(s) => vec.push(s),
                    serde_yaml::Value::Number(n) => vec.push(n.to_string()),
                    serde_yaml::Value::Bool(b) => vec.push(b.to_string()),
                    _ => {}
                }
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Accepts `true`, `false` and their string spellings
fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::Bool(b) => Ok(b),
        serde_yaml::Value::String(s) => Ok(s.trim().eq_ignore_ascii_case("true")),
        _ => Ok(false),
    }
}

/// Accepts strings and scalars for fields that are text in practice
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_yaml::Value::Bool(b)) => Ok(Some(b.to_string())),
        _ => Ok(None),
    }
}

/// Front-matter data of a note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(alias = "tag", deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(alias = "alias", deserialize_with = "string_or_vec")]
    pub aliases: Vec<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub description: Option<String>,
    pub image: Option<String>,
    pub cover: Option<String>,
    #[serde(deserialize_with = "bool_or_string")]
    pub draft: bool,
    #[serde(deserialize_with = "bool_or_string")]
    pub publish: bool,

    // Dates, kept as written
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub created: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub modified: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub lastmod: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub updated: Option<String>,
    #[serde(rename = "last-modified", deserialize_with = "scalar_string")]
    pub last_modified: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub published: Option<String>,
    #[serde(rename = "publishDate", deserialize_with = "scalar_string")]
    pub publish_date: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// Front-matter block syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `---` fenced YAML
    Yaml,
    /// `+++` fenced TOML
    Toml,
}

/// Split a document into its raw front-matter block and body
///
/// Returns `None` when the document has no closed front-matter block.
pub fn split(content: &str) -> Option<(Delimiter, &str, &str)> {
    let content = content.trim_start_matches('\u{feff}');
    let (delimiter, fence) = if content.starts_with("---") {
        (Delimiter::Yaml, "---")
    } else if content.starts_with("+++") {
        (Delimiter::Toml, "+++")
    } else {
        return None;
    };

    let rest = &content[3..];
    // the opening fence must be alone on its line
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let closing = format!("\n{}", fence);
    if let Some(body) = rest.strip_prefix(fence) {
        // empty block
        return Some((delimiter, "", body.trim_start_matches(['\n', '\r'])));
    }
    let end_pos = rest.find(&closing)?;
    let raw = &rest[..end_pos];
    let body = &rest[end_pos + closing.len()..];
    Some((delimiter, raw, body.trim_start_matches(['\n', '\r'])))
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let Some((delimiter, raw, body)) = split(content) else {
            return Ok((FrontMatter::default(), content));
        };

        if raw.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = match delimiter {
            Delimiter::Yaml => serde_yaml::from_str::<FrontMatter>(raw)
                .map_err(|e| anyhow!("Failed to parse YAML front-matter: {}", e))?,
            Delimiter::Toml => {
                let table: toml::Table = toml::from_str(raw)
                    .map_err(|e| anyhow!("Failed to parse TOML front-matter: {}", e))?;
                serde_yaml::from_value(toml_to_yaml(toml::Value::Table(table)))
                    .map_err(|e| anyhow!("Invalid TOML front-matter: {}", e))?
            }
        };

        Ok((fm.normalized(), body))
    }

    /// Trim tags, drop a leading `#` and duplicates
    fn normalized(mut self) -> Self {
        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            let tag = tag.trim().trim_start_matches('#').trim();
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        self.tags = tags;
        self.title = self.title.map(|t| t.trim().to_string());
        self
    }

    /// Creation date (`created`, then `date`)
    pub fn created_date(&self) -> Option<DateTime<Utc>> {
        first_date(&[&self.created, &self.date])
    }

    /// Last modification date (`modified`, `lastmod`, `updated`, `last-modified`)
    pub fn modified_date(&self) -> Option<DateTime<Utc>> {
        first_date(&[
            &self.modified,
            &self.lastmod,
            &self.updated,
            &self.last_modified,
        ])
    }

    /// Publication date (`published`, `publishDate`, then `date`)
    pub fn published_date(&self) -> Option<DateTime<Utc>> {
        first_date(&[&self.published, &self.publish_date, &self.date])
    }
}

fn first_date(candidates: &[&Option<String>]) -> Option<DateTime<Utc>> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find_map(parse_date_string)
}

/// Parse a date string in various formats
///
/// Dates without an offset are read as UTC.
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    // Try RFC 3339 / ISO 8601 with offset first
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

/// Convert a TOML value into the YAML value model
fn toml_to_yaml(value: toml::Value) -> serde_yaml::Value {
    match value {
        toml::Value::String(s) => serde_yaml::Value::String(s),
        toml::Value::Integer(i) => serde_yaml::Value::Number(i.into()),
        toml::Value::Float(f) => serde_yaml::Value::Number(serde_yaml::Number::from(f)),
        toml::Value::Boolean(b) => serde_yaml::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_yaml::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_yaml::Value::Sequence(arr.into_iter().map(toml_to_yaml).collect())
        }
        toml::Value::Table(table) => {
            let mut map = serde_yaml::Mapping::new();
            for (k, v) in table {
                map.insert(serde_yaml::Value::String(k), toml_to_yaml(v));
            }
            serde_yaml::Value::Mapping(map)
        }
    }
}
