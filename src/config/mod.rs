//! Configuration module

mod app;
mod layout;
mod plugins;
mod site;

pub use app::{AppConfig, BuildConfig, InlineStylesheets, Integration};
pub use layout::{ComponentSpec, Display, LayoutConfig, PageLayout, SharedLayout, SlugCondition};
pub use plugins::{
    DateSource, Emitter, Filter, HighlightTheme, LatexEngine, LinkResolution, PluginsConfig,
    Transformer,
};
pub use site::{
    Analytics, Colors, DateType, DirectoryConfig, FontOrigin, GlobalConfig, HomePageConfig,
    Palette, RecentNotesConfig, SiteConfig, ThemeConfig, Typography,
};
