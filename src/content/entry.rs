//! Content entry model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::FrontMatter;
use crate::config::DateType;
use crate::helpers::is_folder_path;

/// Resolved dates of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dates {
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub published: DateTime<Utc>,
}

impl Dates {
    /// All three dates set to the same instant
    pub fn at(date: DateTime<Utc>) -> Self {
        Self {
            created: date,
            modified: date,
            published: date,
        }
    }

    pub fn get(&self, date_type: DateType) -> DateTime<Utc> {
        match date_type {
            DateType::Created => self.created,
            DateType::Modified => self.modified,
            DateType::Published => self.published,
        }
    }
}

/// One published content item
///
/// Entries are read-only snapshots: listing and rendering never modify
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique path-like identifier, e.g. `notes/vitamin-d`
    pub slug: String,

    /// Source file, relative to the content directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,

    /// Parsed front-matter, absent when front-matter is not processed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<FrontMatter>,

    /// Resolved dates, absent when dates are not resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<Dates>,

    /// Short summary shown in lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Plain text of the body
    #[serde(skip)]
    pub text: Option<String>,
}

impl Entry {
    /// Create an entry with only a slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            file_path: None,
            frontmatter: None,
            dates: None,
            description: None,
            text: None,
        }
    }

    /// Set the front-matter title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.frontmatter
            .get_or_insert_with(FrontMatter::default)
            .title = Some(title.into());
        self
    }

    /// Set the front-matter tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frontmatter
            .get_or_insert_with(FrontMatter::default)
            .tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set all dates to midnight UTC of the given day
    ///
    /// Panics on an invalid calendar date.
    pub fn with_date(mut self, year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .unwrap_or_else(|| panic!("invalid date {}-{}-{}", year, month, day));
        self.dates = Some(Dates::at(date));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Non-empty title from the front-matter
    pub fn title(&self) -> Option<&str> {
        self.frontmatter
            .as_ref()
            .and_then(|fm| fm.title.as_deref())
            .filter(|t| !t.is_empty())
    }

    pub fn tags(&self) -> &[String] {
        self.frontmatter
            .as_ref()
            .map(|fm| fm.tags.as_slice())
            .unwrap_or_default()
    }

    /// Card image: `image`, falling back to `cover`
    pub fn image(&self) -> Option<&str> {
        let fm = self.frontmatter.as_ref()?;
        fm.image
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| fm.cover.as_deref().filter(|s| !s.is_empty()))
    }

    /// Date of the given kind, if dates are known
    pub fn date(&self, date_type: DateType) -> Option<DateTime<Utc>> {
        self.dates.map(|d| d.get(date_type))
    }

    /// Whether this entry is a folder (section) page
    pub fn is_folder(&self) -> bool {
        is_folder_path(&self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_ignores_empty() {
        assert_eq!(Entry::new("a").title(), None);
        assert_eq!(Entry::new("a").with_title("").title(), None);
        assert_eq!(Entry::new("a").with_title("Zinc").title(), Some("Zinc"));
    }

    #[test]
    fn test_image_falls_back_to_cover() {
        let mut entry = Entry::new("a").with_title("A");
        assert_eq!(entry.image(), None);

        let fm = entry.frontmatter.as_mut().unwrap();
        fm.image = Some(String::new());
        fm.cover = Some("/cover.png".to_string());
        assert_eq!(entry.image(), Some("/cover.png"));

        entry.frontmatter.as_mut().unwrap().image = Some("/image.png".to_string());
        assert_eq!(entry.image(), Some("/image.png"));
    }

    #[test]
    fn test_date_by_type() {
        let mut entry = Entry::new("a").with_date(2024, 1, 1);
        assert!(Entry::new("b").date(DateType::Created).is_none());

        let dates = entry.dates.as_mut().unwrap();
        dates.modified = dates.created + chrono::Duration::days(3);
        assert_eq!(
            entry
                .date(DateType::Modified)
                .unwrap()
                .format("%Y-%m-%d")
                .to_string(),
            "2024-01-04"
        );
    }

    #[test]
    fn test_is_folder() {
        assert!(Entry::new("notes/index").is_folder());
        assert!(!Entry::new("notes/post").is_folder());
    }
}
