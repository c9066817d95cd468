//! Helper functions for slugs, links, dates and HTML

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
