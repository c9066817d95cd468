//! Content module - entries, front-matter, and the guides collection

pub mod collections;
mod description;
mod entry;
mod frontmatter;
pub mod loader;

pub use description::{describe, plain_text};
pub use entry::{Dates, Entry};
pub use frontmatter::{parse_date_string, split as split_frontmatter, Delimiter, FrontMatter};
