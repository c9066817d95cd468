//! garden-rs: content listing and page components for a notes site
//!
//! This crate loads a directory of markdown notes into read-only entry
//! snapshots, selects and orders them for listings, and renders the
//! listing components (page list, recent notes, homepage). Site and
//! pipeline settings live in one immutable [`config::SiteConfig`].

pub mod commands;
pub mod components;
pub mod config;
pub mod content;
pub mod helpers;
pub mod i18n;
pub mod listing;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A notes site rooted at a directory
#[derive(Clone)]
pub struct Garden {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content (markdown) directory
    pub content_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
}

impl Garden {
    /// Create a new instance from a directory, reading `garden.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        let config = match config::SiteConfig::find(&base_dir) {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                config::SiteConfig::load(&path)?
            }
            None => config::SiteConfig::default(),
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.directories.content);
        let output_dir = base_dir.join(&config.directories.output);

        Self {
            config,
            base_dir,
            content_dir,
            output_dir,
        }
    }

    /// Load every published entry
    pub fn load_entries(&self) -> Result<Vec<content::Entry>> {
        content::loader::ContentLoader::new(self).load()
    }

    /// Translations for the configured locale, with the site's overrides
    pub fn i18n(&self) -> Result<i18n::I18n> {
        let mut i18n = i18n::I18n::new(&self.config.configuration.locale);
        i18n.load_languages(self.base_dir.join(&self.config.directories.i18n))?;
        Ok(i18n)
    }

    /// Directory of the marketing app's guides collection
    pub fn guides_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.app.guides_dir)
    }

    /// Remove the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
