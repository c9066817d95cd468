//! Content list selection
//!
//! [`select`] turns the full entry collection into the ordered,
//! optionally truncated list a listing component renders. It never
//! fails and never modifies the entries.

mod filter;
mod sort;

pub use filter::ListFilter;
pub use sort::{by_date_and_alphabetical, by_date_and_alphabetical_folder_first, SortOrder};

use std::cmp::Ordering;

use crate::config::GlobalConfig;
use crate::content::Entry;
use crate::helpers::resolve_relative;

/// Filter, order and truncate entries for a listing
///
/// Entries without a title are always dropped. The remaining ones are
/// kept when `predicate` holds, sorted with `order`, and cut to `limit`
/// when one is given.
pub fn select<'a, P, C>(
    entries: &'a [Entry],
    predicate: P,
    order: C,
    limit: Option<usize>,
) -> Vec<&'a Entry>
where
    P: Fn(&Entry) -> bool,
    C: Fn(&Entry, &Entry) -> Ordering,
{
    let mut list: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.title().is_some() && predicate(e))
        .collect();

    list.sort_by(|a, b| order(a, b));

    if let Some(limit) = limit {
        list.truncate(limit);
    }
    list
}

/// The page a list is rendered on
#[derive(Debug, Clone, Copy)]
pub struct ListingContext<'a> {
    pub cfg: &'a GlobalConfig,
    /// Slug of the page showing the list
    pub slug: &'a str,
}

impl<'a> ListingContext<'a> {
    pub fn new(cfg: &'a GlobalConfig, slug: &'a str) -> Self {
        Self { cfg, slug }
    }

    /// Filter for entries that are never listed on this site
    pub fn exclusions(&self) -> ListFilter {
        ListFilter::NotIndex.and(ListFilter::ExcludingPrefixes(
            self.cfg.list_exclusions.clone(),
        ))
    }

    /// Select with a named filter and order
    pub fn select<'e>(
        &self,
        entries: &'e [Entry],
        filter: &ListFilter,
        order: SortOrder,
        limit: Option<usize>,
    ) -> Vec<&'e Entry> {
        select(entries, filter.predicate(), order.comparator(self.cfg), limit)
    }

    /// Relative link from this page to an entry
    pub fn link_to(&self, entry: &Entry) -> String {
        resolve_relative(self.slug, &entry.slug)
    }
}
