//! Composable entry predicates

use serde::{Deserialize, Serialize};

use crate::content::Entry;
use crate::helpers::slugify_segments;

/// Predicate over entries, usable from configuration
///
/// Variants with data are written as single-key maps (`with_tag: health`),
/// so fields holding a filter read it with
/// `serde_yaml::with::singleton_map_recursive`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListFilter {
    /// Every entry
    #[default]
    All,
    /// Entries with a non-empty title
    HasTitle,
    /// Everything but the site index
    NotIndex,
    /// Entries whose slug does not end in `/`
    NotFolder,
    /// Entries whose slug does not end in `index`
    NotFolderIndex,
    /// Entries outside the given path prefixes
    ExcludingPrefixes(Vec<String>),
    /// Entries carrying the tag
    WithTag(String),
    /// Entries matching every filter
    And(Vec<ListFilter>),
    Not(Box<ListFilter>),
}

impl ListFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        let slug = entry.slug.as_str();
        match self {
            ListFilter::All => true,
            ListFilter::HasTitle => entry.title().is_some(),
            ListFilter::NotIndex => slug != "index",
            ListFilter::NotFolder => !slug.ends_with('/'),
            ListFilter::NotFolderIndex => !slug.is_empty() && !slug.ends_with("index"),
            ListFilter::ExcludingPrefixes(prefixes) => {
                !prefixes.iter().any(|p| is_under_prefix(slug, p))
            }
            ListFilter::WithTag(tag) => entry.tags().iter().any(|t| t == tag),
            ListFilter::And(filters) => filters.iter().all(|f| f.matches(entry)),
            ListFilter::Not(inner) => !inner.matches(entry),
        }
    }

    /// Combine with another filter, flattening nested `And`s
    pub fn and(self, other: ListFilter) -> ListFilter {
        match (self, other) {
            (ListFilter::All, f) | (f, ListFilter::All) => f,
            (ListFilter::And(mut a), ListFilter::And(b)) => {
                a.extend(b);
                ListFilter::And(a)
            }
            (ListFilter::And(mut a), f) => {
                a.push(f);
                ListFilter::And(a)
            }
            (f, ListFilter::And(mut b)) => {
                b.insert(0, f);
                ListFilter::And(b)
            }
            (a, b) => ListFilter::And(vec![a, b]),
        }
    }

    /// Closure form for use with [`super::select`]
    pub fn predicate(&self) -> impl Fn(&Entry) -> bool + '_ {
        move |entry| self.matches(entry)
    }
}

/// Whether a slug lies under a configured path prefix
///
/// The prefix may be given as written on disk (with spaces) or as a slug.
fn is_under_prefix(slug: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        return false;
    }
    slug.starts_with(prefix) || slug.starts_with(&slugify_segments(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_title() {
        assert!(ListFilter::HasTitle.matches(&Entry::new("a").with_title("A")));
        assert!(!ListFilter::HasTitle.matches(&Entry::new("a")));
    }

    #[test]
    fn test_not_folder() {
        assert!(ListFilter::NotFolder.matches(&Entry::new("notes/post")));
        assert!(!ListFilter::NotFolder.matches(&Entry::new("notes/")));
        // section pages with an index slug stay listable
        assert!(ListFilter::NotFolder.matches(&Entry::new("notes/index")));
    }

    #[test]
    fn test_not_folder_index() {
        assert!(!ListFilter::NotFolderIndex.matches(&Entry::new("index")));
        assert!(!ListFilter::NotFolderIndex.matches(&Entry::new("notes/index")));
        assert!(!ListFilter::NotFolderIndex.matches(&Entry::new("")));
        assert!(ListFilter::NotFolderIndex.matches(&Entry::new("notes/post")));
    }

    #[test]
    fn test_excluding_prefixes() {
        let filter = ListFilter::ExcludingPrefixes(vec!["SEO для инфобизнеса".to_string()]);
        assert!(!filter.matches(&Entry::new(
            "SEO-для-инфобизнеса-актуальность,-возможности,-инструменты/plan"
        )));
        assert!(filter.matches(&Entry::new("Питание/белки")));

        let filter = ListFilter::ExcludingPrefixes(vec!["drafts/".to_string(), "".to_string()]);
        assert!(!filter.matches(&Entry::new("drafts/a")));
        assert!(filter.matches(&Entry::new("notes/a")));
    }

    #[test]
    fn test_with_tag() {
        let entry = Entry::new("a").with_tags(["health", "sleep"]);
        assert!(ListFilter::WithTag("sleep".to_string()).matches(&entry));
        assert!(!ListFilter::WithTag("food".to_string()).matches(&entry));
    }

    #[test]
    fn test_and_flattens() {
        let filter = ListFilter::All
            .and(ListFilter::HasTitle)
            .and(ListFilter::NotIndex)
            .and(ListFilter::And(vec![ListFilter::NotFolder]));
        assert_eq!(
            filter,
            ListFilter::And(vec![
                ListFilter::HasTitle,
                ListFilter::NotIndex,
                ListFilter::NotFolder
            ])
        );
        assert!(!filter.matches(&Entry::new("index").with_title("Home")));
        assert!(filter.matches(&Entry::new("notes/a").with_title("A")));
    }

    #[test]
    fn test_not() {
        let filter = ListFilter::Not(Box::new(ListFilter::WithTag("private".to_string())));
        assert!(filter.matches(&Entry::new("a")));
        assert!(!filter.matches(&Entry::new("a").with_tags(["private"])));
    }

    #[test]
    fn test_parse_filter() {
        let yaml = "and:\n  - has_title\n  - with_tag: health\n";
        let filter: ListFilter = serde_yaml::with::singleton_map_recursive::deserialize(
            serde_yaml::Deserializer::from_str(yaml),
        )
        .unwrap();
        assert_eq!(
            filter,
            ListFilter::And(vec![
                ListFilter::HasTitle,
                ListFilter::WithTag("health".to_string())
            ])
        );
    }
}
