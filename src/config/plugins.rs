//! Content pipeline plugin lists
//!
//! The order of each list is the order the plugins run in. Only the
//! transformers and filters that shape entry metadata are executed by
//! the loader; the rest are carried for the renderer that consumes this
//! configuration.

use serde::{Deserialize, Serialize};

/// Plugins for each pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    pub transformers: Vec<Transformer>,
    pub filters: Vec<Filter>,
    pub emitters: Vec<Emitter>,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            transformers: vec![
                Transformer::FrontMatter,
                Transformer::CreatedModifiedDate {
                    priority: default_date_priority(),
                },
                Transformer::SyntaxHighlighting {
                    theme: HighlightTheme::default(),
                    keep_background: false,
                },
                Transformer::ObsidianFlavoredMarkdown {
                    enable_in_html_embed: false,
                },
                Transformer::GitHubFlavoredMarkdown,
                Transformer::TableOfContents,
                Transformer::CrawlLinks {
                    markdown_link_resolution: LinkResolution::Shortest,
                },
                Transformer::Description {
                    description_length: default_description_length(),
                },
                Transformer::Latex {
                    render_engine: LatexEngine::Katex,
                },
            ],
            filters: vec![Filter::RemoveDrafts],
            emitters: vec![
                Emitter::AliasRedirects,
                Emitter::ComponentResources,
                Emitter::ContentPage,
                Emitter::FolderPage,
                Emitter::TagPage,
                Emitter::ContentIndex {
                    enable_site_map: true,
                    enable_rss: true,
                },
                Emitter::Assets,
                Emitter::Static,
                Emitter::Favicon,
                Emitter::NotFoundPage,
                Emitter::CustomOgImages,
            ],
        }
    }
}

impl PluginsConfig {
    /// Whether front-matter is parsed at all
    pub fn parses_frontmatter(&self) -> bool {
        self.transformers
            .iter()
            .any(|t| matches!(t, Transformer::FrontMatter))
    }

    /// Date source priority, `None` when dates are not resolved
    pub fn date_priority(&self) -> Option<&[DateSource]> {
        self.transformers.iter().find_map(|t| match t {
            Transformer::CreatedModifiedDate { priority } => Some(priority.as_slice()),
            _ => None,
        })
    }

    /// Description length, `None` when descriptions are not extracted
    pub fn description_length(&self) -> Option<usize> {
        self.transformers.iter().find_map(|t| match t {
            Transformer::Description { description_length } => Some(*description_length),
            _ => None,
        })
    }
}

/// Transformer plugins, run over each entry in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum Transformer {
    FrontMatter,
    CreatedModifiedDate {
        #[serde(default = "default_date_priority")]
        priority: Vec<DateSource>,
    },
    SyntaxHighlighting {
        #[serde(default)]
        theme: HighlightTheme,
        #[serde(default)]
        keep_background: bool,
    },
    ObsidianFlavoredMarkdown {
        #[serde(default)]
        enable_in_html_embed: bool,
    },
    GitHubFlavoredMarkdown,
    TableOfContents,
    CrawlLinks {
        #[serde(default)]
        markdown_link_resolution: LinkResolution,
    },
    Description {
        #[serde(default = "default_description_length")]
        description_length: usize,
    },
    Latex {
        #[serde(default)]
        render_engine: LatexEngine,
    },
}

impl Transformer {
    /// Plugin name as written in the configuration
    pub fn name(&self) -> &'static str {
        match self {
            Transformer::FrontMatter => "FrontMatter",
            Transformer::CreatedModifiedDate { .. } => "CreatedModifiedDate",
            Transformer::SyntaxHighlighting { .. } => "SyntaxHighlighting",
            Transformer::ObsidianFlavoredMarkdown { .. } => "ObsidianFlavoredMarkdown",
            Transformer::GitHubFlavoredMarkdown => "GitHubFlavoredMarkdown",
            Transformer::TableOfContents => "TableOfContents",
            Transformer::CrawlLinks { .. } => "CrawlLinks",
            Transformer::Description { .. } => "Description",
            Transformer::Latex { .. } => "Latex",
        }
    }
}

/// Where entry dates come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateSource {
    Frontmatter,
    Git,
    Filesystem,
}

fn default_date_priority() -> Vec<DateSource> {
    vec![
        DateSource::Frontmatter,
        DateSource::Git,
        DateSource::Filesystem,
    ]
}

fn default_description_length() -> usize {
    150
}

/// Light and dark code highlighting themes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTheme {
    pub light: String,
    pub dark: String,
}

impl Default for HighlightTheme {
    fn default() -> Self {
        Self {
            light: "github-light".to_string(),
            dark: "github-dark".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkResolution {
    Absolute,
    Relative,
    #[default]
    Shortest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LatexEngine {
    #[default]
    Katex,
    Mathjax,
}

/// Filter plugins, decide which entries get published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum Filter {
    /// Drop entries with `draft: true`
    RemoveDrafts,
    /// Keep only entries with `publish: true`
    ExplicitPublish,
}

/// Emitter plugins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum Emitter {
    AliasRedirects,
    ComponentResources,
    ContentPage,
    FolderPage,
    TagPage,
    ContentIndex {
        #[serde(default = "default_true")]
        enable_site_map: bool,
        #[serde(default = "default_true")]
        enable_rss: bool,
    },
    Assets,
    Static,
    Favicon,
    NotFoundPage,
    CustomOgImages,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline_order() {
        let plugins = PluginsConfig::default();
        let names: Vec<_> = plugins.transformers.iter().map(|t| t.name()).collect();
        assert_eq!(names[0], "FrontMatter");
        assert_eq!(names[1], "CreatedModifiedDate");
        assert_eq!(names.last(), Some(&"Latex"));
        assert_eq!(plugins.filters, vec![Filter::RemoveDrafts]);
        assert_eq!(plugins.emitters.len(), 11);
    }

    #[test]
    fn test_parse_plugins() {
        let yaml = r#"
transformers:
  - name: FrontMatter
  - name: CreatedModifiedDate
    priority: [frontmatter, filesystem]
  - name: Description
filters:
  - name: ExplicitPublish
emitters:
  - name: ContentIndex
    enable_rss: false
"#;
        let plugins: PluginsConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(plugins.parses_frontmatter());
        assert_eq!(
            plugins.date_priority(),
            Some(&[DateSource::Frontmatter, DateSource::Filesystem][..])
        );
        assert_eq!(plugins.description_length(), Some(150));
        assert_eq!(plugins.filters, vec![Filter::ExplicitPublish]);
        assert_eq!(
            plugins.emitters,
            vec![Emitter::ContentIndex {
                enable_site_map: true,
                enable_rss: false
            }]
        );
    }

    #[test]
    fn test_missing_date_transformer() {
        let plugins = PluginsConfig {
            transformers: vec![Transformer::FrontMatter],
            ..Default::default()
        };
        assert_eq!(plugins.date_priority(), None);
        assert_eq!(plugins.description_length(), None);
    }
}
