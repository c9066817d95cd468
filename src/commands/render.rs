//! Render listing components to HTML

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::components::{self, Component, ComponentProps, COMPONENT_NAMES};
use crate::config::ComponentSpec;
use crate::content::Entry;
use crate::helpers::{document, html_escape};
use crate::Garden;

/// What to render and where
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Component to render; the page's layout placements when unset
    pub component: Option<String>,
    /// Slug of the page the fragment is rendered on
    pub page: String,
    pub limit: Option<usize>,
    /// Wrap the fragment into a full HTML document
    pub standalone: bool,
    /// Output file, stdout when unset
    pub output: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            component: None,
            page: "index".to_string(),
            limit: None,
            standalone: false,
            output: None,
        }
    }
}

pub fn run(garden: &Garden, opts: &RenderOptions) -> Result<()> {
    let entries = garden.load_entries()?;
    let html = render(garden, &entries, opts)?;

    match &opts.output {
        Some(path) => {
            let path = garden.base_dir.join(path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, html).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("Wrote {:?}", path);
        }
        None => println!("{}", html),
    }
    Ok(())
}

/// Render the requested components for a page
pub fn render(garden: &Garden, entries: &[Entry], opts: &RenderOptions) -> Result<String> {
    let cfg = &garden.config.configuration;
    let i18n = garden.i18n()?;

    let placed = placements(garden, opts)?;
    let mut fragments = Vec::new();
    let mut css: Vec<&'static str> = Vec::new();

    for (spec, component) in &placed {
        let mut props = ComponentProps::new(cfg, &i18n, &opts.page, entries);
        props.display = spec.display;
        tracing::debug!("Rendering {} on {}", component.name(), opts.page);

        fragments.push(component.render(&props));
        for sheet in component.css() {
            if !css.contains(&sheet) {
                css.push(sheet);
            }
        }
    }

    let body = fragments.join("\n");
    if !opts.standalone {
        return Ok(body);
    }

    let colors = &cfg.theme.colors;
    let mut style = format!(
        ":root {{ {} }}\n:root[saved-theme=\"dark\"] {{ {} }}\nbody {{ font-family: {}; }}\n",
        colors.light_mode.css_variables(),
        colors.dark_mode.css_variables(),
        html_escape(&cfg.theme.typography.body)
    );
    for sheet in css {
        style.push_str(sheet);
    }

    let title = entries
        .iter()
        .find(|e| e.slug == opts.page)
        .and_then(|e| e.title())
        .unwrap_or(&cfg.page_title);

    Ok(document(&cfg.locale, &cfg.full_title(title), &style, &body))
}

/// Components to render with their placements
fn placements(
    garden: &Garden,
    opts: &RenderOptions,
) -> Result<Vec<(ComponentSpec, Box<dyn Component>)>> {
    let specs: Vec<ComponentSpec> = match &opts.component {
        Some(name) => vec![ComponentSpec::new(name)],
        None => {
            let layout = &garden.config.layout.content_page;
            [
                &layout.before_body,
                &layout.left,
                &layout.after_body,
                &layout.right,
            ]
            .into_iter()
            .flatten()
            .filter(|spec| spec.applies_to(&opts.page))
            .cloned()
            .collect()
        }
    };

    let mut placed = Vec::new();
    for mut spec in specs {
        if let Some(limit) = opts.limit {
            spec = spec.option("limit", limit as u64);
        }
        match components::from_spec(&spec, &garden.config)? {
            Some(component) => placed.push((spec, component)),
            None if opts.component.is_some() => anyhow::bail!(
                "Unknown component: {}. Available: {}",
                spec.component,
                COMPONENT_NAMES.join(", ")
            ),
            None => tracing::debug!("Skipping {}: not a listing component", spec.component),
        }
    }

    if placed.is_empty() {
        anyhow::bail!(
            "No listing component is placed on {:?}; name one of: {}",
            opts.page,
            COMPONENT_NAMES.join(", ")
        );
    }
    Ok(placed)
}
