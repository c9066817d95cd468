//! Listing components
//!
//! Each component renders an HTML fragment for the page at
//! [`ComponentProps::slug`] from the full entry collection. Components
//! are built from the site configuration, optionally overridden by the
//! options of a layout placement.

mod card;
mod home;
mod page_list;
mod recent_notes;

pub use home::HomePage;
pub use page_list::PageList;
pub use recent_notes::RecentNotes;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::{ComponentSpec, Display, GlobalConfig, SiteConfig};
use crate::content::Entry;
use crate::i18n::I18n;
use crate::listing::{ListFilter, ListingContext, SortOrder};

/// Everything a component sees while rendering
pub struct ComponentProps<'a> {
    pub cfg: &'a GlobalConfig,
    pub i18n: &'a I18n,
    /// Slug of the page being rendered
    pub slug: &'a str,
    pub all_files: &'a [Entry],
    pub display: Display,
}

impl<'a> ComponentProps<'a> {
    pub fn new(
        cfg: &'a GlobalConfig,
        i18n: &'a I18n,
        slug: &'a str,
        all_files: &'a [Entry],
    ) -> Self {
        Self {
            cfg,
            i18n,
            slug,
            all_files,
            display: Display::All,
        }
    }

    pub fn listing(&self) -> ListingContext<'a> {
        ListingContext::new(self.cfg, self.slug)
    }
}

/// A renderable page component
pub trait Component {
    fn name(&self) -> &'static str;

    /// Render the HTML fragment
    fn render(&self, props: &ComponentProps) -> String;

    /// Stylesheets the component needs on the page
    fn css(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// Options a layout placement may set on a listing component
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ListingOptions {
    title: Option<String>,
    limit: Option<usize>,
    link_to_more: Option<String>,
    show_tags: Option<bool>,
    sort: Option<SortOrder>,
    /// Narrows the page list or recent notes
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    filter: Option<ListFilter>,
}

impl ListingOptions {
    fn parse(spec: &ComponentSpec) -> Result<Self> {
        serde_yaml::to_value(&spec.options)
            .and_then(serde_yaml::from_value)
            .with_context(|| format!("Invalid options for component {}", spec.component))
    }
}

/// Listing components this crate renders
pub const COMPONENT_NAMES: [&str; 3] = ["page-list", "recent-notes", "home"];

/// Build a listing component from a placement
///
/// Settings come from the site configuration, then from the placement
/// options. Returns `Ok(None)` for components this crate does not render,
/// whatever options they carry.
pub fn from_spec(spec: &ComponentSpec, site: &SiteConfig) -> Result<Option<Box<dyn Component>>> {
    let component: Box<dyn Component> = match normalize(&spec.component).as_str() {
        "pagelist" => {
            let options = ListingOptions::parse(spec)?;
            let mut list = PageList::default();
            list.limit = options.limit.or(list.limit);
            list.sort = options.sort.unwrap_or(list.sort);
            if let Some(filter) = options.filter {
                list.filter = list.filter.and(filter);
            }
            Box::new(list)
        }
        "recentnotes" => {
            let options = ListingOptions::parse(spec)?;
            let mut notes = RecentNotes::from_config(&site.recent_notes);
            notes.title = options.title.or(notes.title);
            notes.limit = options.limit.unwrap_or(notes.limit);
            notes.link_to_more = options.link_to_more.or(notes.link_to_more);
            notes.show_tags = options.show_tags.unwrap_or(notes.show_tags);
            notes.sort = options.sort.unwrap_or(notes.sort);
            notes.filter = options.filter.unwrap_or(notes.filter);
            Box::new(notes)
        }
        "homepage" | "home" => {
            let options = ListingOptions::parse(spec)?;
            let mut home = HomePage::from_config(&site.homepage);
            home.section_title = options.title.or(home.section_title);
            home.limit = options.limit.or(home.limit);
            Box::new(home)
        }
        _ => return Ok(None),
    };
    Ok(Some(component))
}

/// `page-list`, `PageList` and `page_list` all name the same component
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
