//! List site content

use anyhow::Result;

use crate::components::{ComponentProps, HomePage, PageList, RecentNotes};
use crate::content::Entry;
use crate::helpers::format_date;
use crate::Garden;

/// List the entries a listing would show
pub fn run(garden: &Garden, kind: &str, limit: Option<usize>) -> Result<()> {
    let entries = garden.load_entries()?;
    print!("{}", listing(garden, &entries, kind, limit)?);
    Ok(())
}

/// Listing text for `pages`, `recent` or `home`
pub fn listing(
    garden: &Garden,
    entries: &[Entry],
    kind: &str,
    limit: Option<usize>,
) -> Result<String> {
    let cfg = &garden.config.configuration;
    let i18n = garden.i18n()?;
    let props = ComponentProps::new(cfg, &i18n, "index", entries);

    let (heading, selected, remaining) = match kind {
        "page" | "pages" => {
            let list = PageList {
                limit,
                ..Default::default()
            };
            ("Pages", list.entries(&props), 0)
        }
        "recent" => {
            let mut notes = RecentNotes::from_config(&garden.config.recent_notes);
            notes.limit = limit.unwrap_or(notes.limit);
            let (shown, remaining) = notes.entries(&props);
            ("Recent notes", shown, remaining)
        }
        "home" => {
            let mut home = HomePage::from_config(&garden.config.homepage);
            home.limit = limit.or(home.limit);
            ("Homepage articles", home.entries(&props), 0)
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: pages, recent, home", kind);
        }
    };

    let mut out = format!("{} ({}):\n", heading, selected.len());
    for entry in selected {
        let date = entry
            .date(cfg.default_date_type)
            .map(|d| format_date(&d, &cfg.locale, cfg.tz()))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "  {} - {} [{}]\n",
            date,
            entry.title().unwrap_or_default(),
            entry.slug
        ));
    }
    if remaining > 0 {
        out.push_str(&format!("  ... and {} more\n", remaining));
    }

    Ok(out)
}
