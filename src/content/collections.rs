//! The `guides` content collection of the marketing app
//!
//! Every guide carries typed front-matter. Unknown keys are ignored,
//! missing or mistyped required keys are schema errors.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::frontmatter::{split, Delimiter};
use crate::helpers::slugify_path;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("{path}: missing front-matter")]
    MissingFrontMatter { path: PathBuf },

    #[error("{path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Guide categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideCategory {
    Seo,
    Funnels,
    Monetization,
    AiTools,
}

impl GuideCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideCategory::Seo => "seo",
            GuideCategory::Funnels => "funnels",
            GuideCategory::Monetization => "monetization",
            GuideCategory::AiTools => "ai-tools",
        }
    }
}

/// Front-matter of a guide document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideData {
    pub title: String,
    pub description: String,
    pub category: GuideCategory,
    pub category_title: String,
    pub module: f64,
    pub module_title: String,
    pub order: f64,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    "📄".to_string()
}

/// One guide of the collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guide {
    /// Lowercase slug relative to the collection directory
    pub slug: String,
    pub data: GuideData,
    #[serde(skip)]
    pub body: String,
}

impl Guide {
    /// Parse a guide document
    pub fn parse(path: &Path, slug: String, content: &str) -> Result<Self, SchemaError> {
        let (delimiter, raw, body) =
            split(content).ok_or_else(|| SchemaError::MissingFrontMatter {
                path: path.to_path_buf(),
            })?;

        let invalid = |message: String| SchemaError::Invalid {
            path: path.to_path_buf(),
            message,
        };

        let data: GuideData = match delimiter {
            Delimiter::Yaml => serde_yaml::from_str(raw).map_err(|e| invalid(e.to_string()))?,
            Delimiter::Toml => toml::from_str(raw).map_err(|e| invalid(e.to_string()))?,
        };

        Ok(Self {
            slug,
            data,
            body: body.to_string(),
        })
    }

    /// Reading order: module, then order within the module
    pub fn cmp_order(&self, other: &Guide) -> Ordering {
        self.data
            .module
            .total_cmp(&other.data.module)
            .then(self.data.order.total_cmp(&other.data.order))
            .then_with(|| self.slug.cmp(&other.slug))
    }
}

/// Load and validate every guide in a directory
///
/// Valid guides are returned in reading order together with the errors
/// of the invalid ones.
pub fn load_guides(dir: &Path) -> (Vec<Guide>, Vec<SchemaError>) {
    let mut guides = Vec::new();
    let mut errors = Vec::new();

    if !dir.exists() {
        tracing::debug!("No guides directory at {:?}", dir);
        return (guides, errors);
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                errors.push(SchemaError::Io(e.into()));
                continue;
            }
        };
        let path = entry.path();
        let is_guide = path.is_file()
            && matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("md") | Some("mdx")
            );
        if !is_guide {
            continue;
        }

        let relative = path.strip_prefix(dir).unwrap_or(path);
        let relative = relative.to_string_lossy().replace('\\', "/");
        let relative = relative.strip_suffix(".mdx").unwrap_or(&relative);
        let slug = slugify_path(relative).to_lowercase();

        let result = fs::read_to_string(path)
            .map_err(SchemaError::from)
            .and_then(|content| Guide::parse(path, slug, &content));

        match result {
            Ok(guide) => guides.push(guide),
            Err(e) => errors.push(e),
        }
    }

    guides.sort_by(|a, b| a.cmp_order(b));
    (guides, errors)
}
