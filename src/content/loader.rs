//! Content loader - loads entries from the content directory
//!
//! Runs the metadata transformers (front-matter, dates, description) and
//! the publish filters from the plugin configuration, in order.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use glob::Pattern;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::description::{describe, plain_text};
use super::{Dates, Entry, FrontMatter};
use crate::config::{DateSource, Filter, PluginsConfig, Transformer};
use crate::helpers::slugify_path;
use crate::Garden;

/// Loads entries from the content directory
pub struct ContentLoader<'a> {
    garden: &'a Garden,
    ignore: Vec<Pattern>,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(garden: &'a Garden) -> Self {
        let ignore = garden
            .config
            .configuration
            .ignore_patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!("Invalid ignore pattern {:?}: {}", p, e);
                    None
                }
            })
            .collect();

        for transformer in &garden.config.plugins.transformers {
            if !matches!(
                transformer,
                Transformer::FrontMatter
                    | Transformer::CreatedModifiedDate { .. }
                    | Transformer::Description { .. }
            ) {
                tracing::debug!("Transformer {} is left to the renderer", transformer.name());
            }
        }

        Self { garden, ignore }
    }

    fn plugins(&self) -> &PluginsConfig {
        &self.garden.config.plugins
    }

    /// Load all published entries, sorted by slug
    pub fn load(&self) -> Result<Vec<Entry>> {
        let content_dir = &self.garden.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        let walker = WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                let relative = e.path().strip_prefix(content_dir).unwrap_or(e.path());
                relative.as_os_str().is_empty() || !self.is_ignored(relative)
            });

        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_entry(path) {
                Ok(entry) => {
                    if !seen.insert(entry.slug.clone()) {
                        tracing::warn!("Duplicate slug {:?} from {:?}, skipping", entry.slug, path);
                        continue;
                    }
                    if self.is_published(&entry) {
                        entries.push(entry);
                    } else {
                        tracing::debug!("Filtered out {:?}", entry.slug);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load entry {:?}: {:#}", path, e);
                }
            }
        }

        entries.sort_by(|a, b| a.slug.cmp(&b.slug));
        tracing::debug!("Loaded {} entries", entries.len());

        Ok(entries)
    }

    /// Check a content-relative path against the ignore patterns
    ///
    /// A pattern matching a directory ignores everything below it.
    pub fn is_ignored(&self, relative: &Path) -> bool {
        let relative = relative.to_string_lossy().replace('\\', "/");
        let mut prefix = String::new();

        for segment in relative.split('/') {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            if self.ignore.iter().any(|p| p.matches(&prefix)) {
                return true;
            }
        }
        false
    }

    /// Load a single entry from a file
    fn load_entry(&self, path: &Path) -> Result<Entry> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        let relative = path
            .strip_prefix(&self.garden.content_dir)
            .unwrap_or(path)
            .to_path_buf();
        let slug = slugify_path(&relative.to_string_lossy().replace('\\', "/"));

        let (frontmatter, body) = if self.plugins().parses_frontmatter() {
            let (mut fm, body) = match FrontMatter::parse(&content) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!("{:?}: {}, using defaults", path, e);
                    (FrontMatter::default(), content.as_str())
                }
            };
            if fm.title.as_deref().map_or(true, str::is_empty) {
                fm.title = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string());
            }
            (Some(fm), body)
        } else {
            (None, content.as_str())
        };

        let dates = self
            .plugins()
            .date_priority()
            .map(|priority| resolve_dates(frontmatter.as_ref(), file_times(path), priority));

        let text = plain_text(body);
        let description = self.plugins().description_length().and_then(|len| {
            let source = frontmatter
                .as_ref()
                .and_then(|fm| fm.description.as_deref())
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(&text);
            describe(source, len)
        });

        Ok(Entry {
            slug,
            file_path: Some(relative),
            frontmatter,
            dates,
            description,
            text: Some(text),
        })
    }

    /// Apply the configured filters
    fn is_published(&self, entry: &Entry) -> bool {
        self.plugins().filters.iter().all(|filter| {
            let fm = entry.frontmatter.as_ref();
            match filter {
                Filter::RemoveDrafts => !fm.is_some_and(|fm| fm.draft),
                Filter::ExplicitPublish => fm.is_some_and(|fm| fm.publish),
            }
        })
    }
}

/// Creation and modification times from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTimes {
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

fn file_times(path: &Path) -> FileTimes {
    match fs::metadata(path) {
        Ok(metadata) => FileTimes {
            created: metadata.created().ok().map(DateTime::<Utc>::from),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        },
        Err(e) => {
            tracing::debug!("No file times for {:?}: {}", path, e);
            FileTimes::default()
        }
    }
}

/// Resolve an entry's dates from the sources in priority order
///
/// Each date takes the first source that provides it. Dates no source
/// provides are set to the current time.
pub fn resolve_dates(
    frontmatter: Option<&FrontMatter>,
    file_times: FileTimes,
    priority: &[DateSource],
) -> Dates {
    let mut created = None;
    let mut modified = None;
    let mut published = None;

    for source in priority {
        match source {
            DateSource::Frontmatter => {
                if let Some(fm) = frontmatter {
                    created = created.or_else(|| fm.created_date());
                    modified = modified.or_else(|| fm.modified_date());
                    published = published.or_else(|| fm.published_date());
                }
            }
            DateSource::Filesystem => {
                created = created.or(file_times.created);
                modified = modified.or(file_times.modified);
            }
            DateSource::Git => {
                tracing::debug!("Git dates are not resolved, skipping source");
            }
        }
    }

    let now = Utc::now();
    Dates {
        created: created.unwrap_or(now),
        modified: modified.unwrap_or(now),
        published: published.unwrap_or(now),
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use chrono::TimeZone;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join("content").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site(config: SiteConfig) -> (tempfile::TempDir, Garden) {
        let dir = tempfile::tempdir().unwrap();
        let garden = Garden::with_config(dir.path(), config);
        (dir, garden)
    }

    #[test]
    fn test_load_entries() {
        let (dir, garden) = site(SiteConfig::default());
        write(
            dir.path(),
            "index.md",
            "---\ntitle: Home\n---\nWelcome to the garden.",
        );
        write(
            dir.path(),
            "notes/Vitamin D.md",
            "---\ntitle: Витамин D\ndate: 2024-06-01\ntags: [health]\n---\nSunlight matters. A lot.",
        );
        write(dir.path(), "notes/untitled note.md", "Just text.");
        write(dir.path(), "notes/draft.md", "---\ndraft: true\n---\nWIP");
        write(dir.path(), "private/secret.md", "---\ntitle: Secret\n---\n");
        write(dir.path(), "notes/image.png", "not markdown");

        let entries = garden.load_entries().unwrap();
        let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["index", "notes/Vitamin-D", "notes/untitled-note"]);

        let vitamin = &entries[1];
        assert_eq!(vitamin.title(), Some("Витамин D"));
        assert_eq!(vitamin.tags(), ["health".to_string()]);
        assert_eq!(
            vitamin.dates.unwrap().created,
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            vitamin.description.as_deref(),
            Some("Sunlight matters. A lot.")
        );

        // title falls back to the file stem
        assert_eq!(entries[2].title(), Some("untitled note"));
    }

    #[test]
    fn test_frontmatter_description_wins() {
        let (dir, garden) = site(SiteConfig::default());
        write(
            dir.path(),
            "a.md",
            "---\ntitle: A\ndescription: Short summary\n---\nLong body text.",
        );
        let entries = garden.load_entries().unwrap();
        // sentences are closed with a period, front-matter text included
        assert_eq!(entries[0].description.as_deref(), Some("Short summary."));
        assert_eq!(entries[0].text.as_deref(), Some("Long body text."));
    }

    #[test]
    fn test_without_frontmatter_plugin() {
        let mut config = SiteConfig::default();
        config.plugins.transformers = vec![Transformer::Description {
            description_length: 150,
        }];
        config.plugins.filters = Vec::new();
        let (dir, garden) = site(config);
        write(dir.path(), "a.md", "---\ntitle: A\n---\nBody.");

        let entries = garden.load_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].frontmatter.is_none());
        assert!(entries[0].dates.is_none());
        assert_eq!(entries[0].title(), None);
    }

    #[test]
    fn test_explicit_publish() {
        let mut config = SiteConfig::default();
        config.plugins.filters = vec![Filter::ExplicitPublish];
        let (dir, garden) = site(config);
        write(dir.path(), "a.md", "---\ntitle: A\npublish: true\n---\n");
        write(dir.path(), "b.md", "---\ntitle: B\n---\n");

        let entries = garden.load_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].slug, "a");
    }

    #[test]
    fn test_malformed_frontmatter_keeps_entry() {
        let (dir, garden) = site(SiteConfig::default());
        write(dir.path(), "broken.md", "---\ntitle: [oops\n---\nbody");

        let entries = garden.load_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title(), Some("broken"));
    }

    #[test]
    fn test_ignore_patterns() {
        let mut config = SiteConfig::default();
        config.configuration.ignore_patterns = vec!["drafts".to_string(), "**/*.tmp.md".to_string()];
        let (_dir, garden) = site(config);
        let loader = ContentLoader::new(&garden);

        assert!(loader.is_ignored(Path::new("drafts/note.md")));
        assert!(loader.is_ignored(Path::new("a/b/c.tmp.md")));
        assert!(!loader.is_ignored(Path::new("notes/drafts-list.md")));
    }

    #[test]
    fn test_missing_content_dir() {
        let (_dir, garden) = site(SiteConfig::default());
        assert!(garden.load_entries().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_dates_priority() {
        let fm = FrontMatter {
            date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let fs_time = Utc.with_ymd_and_hms(2025, 5, 5, 0, 0, 0).unwrap();
        let times = FileTimes {
            created: Some(fs_time),
            modified: Some(fs_time),
        };

        let dates = resolve_dates(
            Some(&fm),
            times,
            &[DateSource::Frontmatter, DateSource::Filesystem],
        );
        assert_eq!(dates.created, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(dates.modified, fs_time);

        let dates = resolve_dates(
            Some(&fm),
            times,
            &[DateSource::Filesystem, DateSource::Frontmatter],
        );
        assert_eq!(dates.created, fs_time);
        assert_eq!(dates.published, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }
}
