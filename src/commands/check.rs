//! Validate the guides collection

use anyhow::Result;

use crate::content::collections::{load_guides, Guide};
use crate::Garden;

/// Print the guides in reading order, fail when any guide is invalid
pub fn run(garden: &Garden) -> Result<()> {
    let dir = garden.guides_dir();
    let (guides, errors) = load_guides(&dir);

    print!("{}", report(garden, &guides));

    for error in &errors {
        tracing::error!("{}", error);
    }
    if !errors.is_empty() {
        anyhow::bail!("{} invalid guide(s) in {:?}", errors.len(), dir);
    }

    tracing::info!("{} guide(s) valid", guides.len());
    Ok(())
}

/// Guides grouped by module, with their public URLs
pub fn report(garden: &Garden, guides: &[Guide]) -> String {
    let mut out = format!("Guides ({}):\n", guides.len());
    let mut module = None;

    for guide in guides {
        let data = &guide.data;
        if module != Some(data.module) {
            module = Some(data.module);
            out.push_str(&format!(
                "  Module {} - {} [{}]\n",
                data.module, data.module_title, data.category_title
            ));
        }
        out.push_str(&format!(
            "    {} {} ({}) {}\n",
            data.icon,
            data.title,
            data.category.as_str(),
            garden.config.app.page_url(&format!("guides/{}", guide.slug))
        ));
    }
    out
}
