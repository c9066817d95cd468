//! Grid of article cards

use super::card::{cards_grid, CARDS_CSS};
use super::{Component, ComponentProps};
use crate::content::Entry;
use crate::listing::{ListFilter, SortOrder};

/// Lists every article of the site as cards
///
/// Folder slugs, the site index, untitled entries and configured
/// exclusions are always left out. `filter` narrows the list further.
#[derive(Debug, Clone, PartialEq)]
pub struct PageList {
    pub limit: Option<usize>,
    pub sort: SortOrder,
    pub filter: ListFilter,
}

impl Default for PageList {
    fn default() -> Self {
        Self {
            limit: None,
            sort: SortOrder::DateAndAlphabeticalFolderFirst,
            filter: ListFilter::NotFolder,
        }
    }
}

impl PageList {
    /// Entries this list shows on the page, in display order
    pub fn entries<'a>(&self, props: &ComponentProps<'a>) -> Vec<&'a Entry> {
        let ctx = props.listing();
        let filter = self.filter.clone().and(ctx.exclusions());
        ctx.select(props.all_files, &filter, self.sort, self.limit)
    }
}

impl Component for PageList {
    fn name(&self) -> &'static str {
        "PageList"
    }

    fn render(&self, props: &ComponentProps) -> String {
        let entries = self.entries(props);
        tracing::debug!("PageList on {}: {} entries", props.slug, entries.len());
        cards_grid(
            &props.listing(),
            &entries,
            true,
            &props.i18n.get("propertyDefaults.title"),
        )
    }

    fn css(&self) -> Vec<&'static str> {
        vec![CARDS_CSS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalConfig;
    use crate::i18n::I18n;

    fn site() -> Vec<Entry> {
        vec![
            Entry::new("index").with_title("Home"),
            Entry::new("a").with_title("A").with_date(2024, 1, 1),
            Entry::new("b").with_title("B").with_date(2024, 6, 1),
            Entry::new("c").with_title("Zinc"),
            Entry::new("d").with_title("Amino"),
            Entry::new("untitled").with_date(2025, 1, 1),
            Entry::new("notes/index").with_title("Notes"),
        ]
    }

    fn slugs(list: &[&Entry]) -> Vec<String> {
        list.iter().map(|e| e.slug.clone()).collect()
    }

    #[test]
    fn test_default_order_is_folder_first() {
        let entries = site();
        let cfg = GlobalConfig::default();
        let i18n = I18n::default();
        let props = ComponentProps::new(&cfg, &i18n, "index", &entries);

        let list = PageList::default().entries(&props);
        assert_eq!(slugs(&list), vec!["notes/index", "b", "a", "d", "c"]);
    }

    #[test]
    fn test_date_order_and_limit() {
        let entries = site();
        let cfg = GlobalConfig::default();
        let i18n = I18n::default();
        let props = ComponentProps::new(&cfg, &i18n, "index", &entries);

        let list = PageList {
            limit: Some(3),
            sort: SortOrder::DateAndAlphabetical,
            ..Default::default()
        };
        assert_eq!(slugs(&list.entries(&props)), vec!["b", "a", "d"]);
    }

    #[test]
    fn test_exclusions_from_config() {
        let entries = vec![
            Entry::new("SEO-для-инфобизнеса/plan").with_title("Plan"),
            Entry::new("Питание/белки").with_title("Белки"),
        ];
        let cfg = GlobalConfig {
            list_exclusions: vec!["SEO для инфобизнеса".to_string()],
            ..Default::default()
        };
        let i18n = I18n::default();
        let props = ComponentProps::new(&cfg, &i18n, "index", &entries);

        assert_eq!(
            slugs(&PageList::default().entries(&props)),
            vec!["Питание/белки"]
        );
    }

    #[test]
    fn test_render() {
        let entries = site();
        let cfg = GlobalConfig::default();
        let i18n = I18n::default();
        let props = ComponentProps::new(&cfg, &i18n, "index", &entries);

        let html = PageList::default().render(&props);
        assert!(html.starts_with(r#"<div class="blog-cards-grid">"#));
        assert_eq!(html.matches(r#"class="blog-card""#).count(), 5);
        assert!(html.contains(r#"href="./notes/""#));
        assert!(!html.contains("Untitled"));
    }
}
