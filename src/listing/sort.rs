//! Orderings of content entries

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::config::{DateType, GlobalConfig};
use crate::content::Entry;

/// Named entry orderings
///
/// Both put dated entries first, newest first, and order the rest by
/// case-insensitive title. The folder-first variant ranks folder pages
/// ahead of leaf pages before anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    DateAndAlphabetical,
    DateAndAlphabeticalFolderFirst,
}

impl SortOrder {
    /// Compare two entries using the given date type
    pub fn compare(&self, date_type: DateType, a: &Entry, b: &Entry) -> Ordering {
        match self {
            SortOrder::DateAndAlphabetical => by_date_then_title(date_type, a, b),
            SortOrder::DateAndAlphabeticalFolderFirst => b
                .is_folder()
                .cmp(&a.is_folder())
                .then_with(|| by_date_then_title(date_type, a, b)),
        }
    }

    /// Comparator bound to the site configuration
    pub fn comparator(self, cfg: &GlobalConfig) -> impl Fn(&Entry, &Entry) -> Ordering {
        let date_type = cfg.default_date_type;
        move |a, b| self.compare(date_type, a, b)
    }
}

/// Dated entries first (newest first), then by title
pub fn by_date_and_alphabetical(cfg: &GlobalConfig) -> impl Fn(&Entry, &Entry) -> Ordering {
    SortOrder::DateAndAlphabetical.comparator(cfg)
}

/// Folders first, then dated entries (newest first), then by title
pub fn by_date_and_alphabetical_folder_first(
    cfg: &GlobalConfig,
) -> impl Fn(&Entry, &Entry) -> Ordering {
    SortOrder::DateAndAlphabeticalFolderFirst.comparator(cfg)
}

fn by_date_then_title(date_type: DateType, a: &Entry, b: &Entry) -> Ordering {
    let by_date = match (a.date(date_type), b.date(date_type)) {
        // newest first
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| compare_titles(a, b))
}

/// Case-insensitive title comparison, a missing title compares as ""
fn compare_titles(a: &Entry, b: &Entry) -> Ordering {
    let ta = a.title().unwrap_or_default().to_lowercase();
    let tb = b.title().unwrap_or_default().to_lowercase();
    ta.cmp(&tb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(order: SortOrder, date_type: DateType, mut entries: Vec<Entry>) -> Vec<String> {
        entries.sort_by(|a, b| order.compare(date_type, a, b));
        entries.into_iter().map(|e| e.slug).collect()
    }

    #[test]
    fn test_later_date_first() {
        let entries = vec![
            Entry::new("old").with_title("B").with_date(2023, 5, 1),
            Entry::new("new").with_title("A").with_date(2024, 5, 1),
        ];
        assert_eq!(
            sorted(SortOrder::DateAndAlphabetical, DateType::Created, entries),
            vec!["new", "old"]
        );
    }

    #[test]
    fn test_dated_before_undated_regardless_of_title() {
        let entries = vec![
            Entry::new("undated").with_title("Aardvark"),
            Entry::new("dated").with_title("Zebra").with_date(2020, 1, 1),
        ];
        assert_eq!(
            sorted(SortOrder::DateAndAlphabetical, DateType::Created, entries),
            vec!["dated", "undated"]
        );
    }

    #[test]
    fn test_undated_by_case_insensitive_title() {
        let entries = vec![
            Entry::new("c").with_title("cherry"),
            Entry::new("a").with_title("Apple"),
            Entry::new("b").with_title("banana"),
            Entry::new("none"),
        ];
        assert_eq!(
            sorted(SortOrder::DateAndAlphabetical, DateType::Created, entries),
            vec!["none", "a", "b", "c"]
        );
    }

    #[test]
    fn test_same_date_falls_back_to_title() {
        let entries = vec![
            Entry::new("z").with_title("zinc").with_date(2024, 1, 1),
            Entry::new("a").with_title("Amino").with_date(2024, 1, 1),
        ];
        assert_eq!(
            sorted(SortOrder::DateAndAlphabetical, DateType::Created, entries),
            vec!["a", "z"]
        );
    }

    #[test]
    fn test_folder_first() {
        let entries = vec![
            Entry::new("notes/recent").with_title("Recent").with_date(2025, 1, 1),
            Entry::new("notes/index").with_title("Notes"),
            Entry::new("blog/index").with_title("Blog").with_date(2020, 1, 1),
        ];
        assert_eq!(
            sorted(
                SortOrder::DateAndAlphabeticalFolderFirst,
                DateType::Created,
                entries.clone()
            ),
            vec!["blog/index", "notes/index", "notes/recent"]
        );
        assert_eq!(
            sorted(SortOrder::DateAndAlphabetical, DateType::Created, entries),
            vec!["notes/recent", "blog/index", "notes/index"]
        );
    }

    #[test]
    fn test_uses_configured_date_type() {
        let mut older_created = Entry::new("a").with_title("A").with_date(2020, 1, 1);
        if let Some(dates) = older_created.dates.as_mut() {
            dates.modified = dates.created + chrono::Duration::days(3650);
        }
        let newer_created = Entry::new("b").with_title("B").with_date(2024, 1, 1);

        let cfg = GlobalConfig {
            default_date_type: DateType::Modified,
            ..Default::default()
        };
        let cmp = by_date_and_alphabetical(&cfg);
        assert_eq!(cmp(&older_created, &newer_created), Ordering::Less);

        let cmp = by_date_and_alphabetical(&GlobalConfig::default());
        assert_eq!(cmp(&older_created, &newer_created), Ordering::Greater);
    }
}
