//! Recent notes widget

use super::card::{cards_grid, CARDS_CSS};
use super::{Component, ComponentProps};
use crate::config::RecentNotesConfig;
use crate::content::Entry;
use crate::helpers::{class_names, html_escape, resolve_relative};
use crate::listing::{ListFilter, SortOrder};

/// The newest notes, with an optional link to the full list
///
/// Like the page list it never shows the site index, untitled entries or
/// configured exclusions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentNotes {
    /// Heading, the localized "Recent Notes" when unset
    pub title: Option<String>,
    pub limit: usize,
    /// Slug of the page listing everything
    pub link_to_more: Option<String>,
    pub show_tags: bool,
    pub filter: ListFilter,
    pub sort: SortOrder,
}

impl Default for RecentNotes {
    fn default() -> Self {
        Self::from_config(&RecentNotesConfig::default())
    }
}

impl RecentNotes {
    pub fn from_config(config: &RecentNotesConfig) -> Self {
        Self {
            title: config.title.clone(),
            limit: config.limit,
            link_to_more: config.link_to_more.clone().filter(|s| !s.is_empty()),
            show_tags: config.show_tags,
            filter: ListFilter::All,
            sort: SortOrder::DateAndAlphabetical,
        }
    }

    /// Shown notes and the number of matching notes left out
    pub fn entries<'a>(&self, props: &ComponentProps<'a>) -> (Vec<&'a Entry>, usize) {
        let ctx = props.listing();
        let filter = self.filter.clone().and(ctx.exclusions());
        let mut all = ctx.select(props.all_files, &filter, self.sort, None);
        let remaining = all.len().saturating_sub(self.limit);
        all.truncate(self.limit);
        (all, remaining)
    }
}

impl Component for RecentNotes {
    fn name(&self) -> &'static str {
        "RecentNotes"
    }

    fn render(&self, props: &ComponentProps) -> String {
        let (entries, remaining) = self.entries(props);
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| props.i18n.get("components.recentNotes.title"));

        let mut html = format!(
            r#"<div class="{}"><h2 class="section-title">{}</h2>"#,
            class_names(&[props.display.class(), Some("recent-notes")]),
            html_escape(&title)
        );
        html.push_str(&cards_grid(
            &props.listing(),
            &entries,
            self.show_tags,
            &props.i18n.get("propertyDefaults.title"),
        ));

        if let Some(more) = &self.link_to_more {
            if remaining > 0 {
                html.push_str(&format!(
                    r#"<p><a href="{}">{}</a></p>"#,
                    html_escape(&resolve_relative(props.slug, more)),
                    html_escape(
                        &props
                            .i18n
                            .get_plural("components.recentNotes.seeRemainingMore", remaining)
                    )
                ));
            }
        }

        html.push_str("</div>");
        html
    }

    fn css(&self) -> Vec<&'static str> {
        vec![CARDS_CSS]
    }
}
