//! Page layouts: which components are placed where
//!
//! Placement is data. A component can be limited to some pages with a
//! slug condition and to a device class with `display`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All layouts of the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Components on every page
    pub shared: SharedLayout,
    /// Pages showing a single note
    pub content_page: PageLayout,
    /// Pages listing other pages (tags, folders)
    pub list_page: PageLayout,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let breadcrumbs = ComponentSpec::new("Breadcrumbs")
            .option("spacer_symbol", "›")
            .option("root_name", "Home")
            .option("resolve_frontmatter_title", true)
            .option("show_current_page", true);

        Self {
            shared: SharedLayout {
                head: ComponentSpec::new("Head"),
                header: vec![ComponentSpec::new("PageTitle")
                    .when(SlugCondition::SlugIs("index".to_string()))],
                after_body: Vec::new(),
                footer: ComponentSpec::new("Footer"),
            },
            content_page: PageLayout {
                before_body: vec![
                    breadcrumbs
                        .clone()
                        .when(SlugCondition::SlugIsNot("index".to_string())),
                    ComponentSpec::new("ArticleTitle"),
                    ComponentSpec::new("TagList"),
                    ComponentSpec::new("TableOfContents"),
                ],
                right: vec![ComponentSpec::new("Backlinks").display(Display::DesktopOnly)],
                ..Default::default()
            },
            list_page: PageLayout {
                before_body: vec![breadcrumbs, ComponentSpec::new("ArticleTitle")],
                ..Default::default()
            },
        }
    }
}

/// Components shared across all pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedLayout {
    pub head: ComponentSpec,
    #[serde(default)]
    pub header: Vec<ComponentSpec>,
    #[serde(default)]
    pub after_body: Vec<ComponentSpec>,
    pub footer: ComponentSpec,
}

impl Default for SharedLayout {
    fn default() -> Self {
        Self {
            head: ComponentSpec::new("Head"),
            header: Vec::new(),
            after_body: Vec::new(),
            footer: ComponentSpec::new("Footer"),
        }
    }
}

/// Regions of a page layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageLayout {
    pub before_body: Vec<ComponentSpec>,
    pub after_body: Vec<ComponentSpec>,
    pub left: Vec<ComponentSpec>,
    pub right: Vec<ComponentSpec>,
}

impl PageLayout {
    /// Names of the components rendered on `slug`, region by region
    pub fn components_for(&self, slug: &str) -> Vec<(&'static str, Vec<&str>)> {
        [
            ("before_body", &self.before_body),
            ("after_body", &self.after_body),
            ("left", &self.left),
            ("right", &self.right),
        ]
        .into_iter()
        .map(|(region, specs)| {
            let names = specs
                .iter()
                .filter(|spec| spec.applies_to(slug))
                .map(|spec| spec.component.as_str())
                .collect();
            (region, names)
        })
        .collect()
    }
}

/// One component placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub component: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, serde_yaml::Value>,
    /// Written as a single-key map, e.g. `slug_is_not: index`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_yaml::with::singleton_map"
    )]
    pub condition: Option<SlugCondition>,
    #[serde(default)]
    pub display: Display,
}

impl ComponentSpec {
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            options: IndexMap::new(),
            condition: None,
            display: Display::All,
        }
    }

    pub fn option(mut self, key: &str, value: impl Into<serde_yaml::Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    pub fn when(mut self, condition: SlugCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    /// Whether the component is rendered on the page at `slug`
    pub fn applies_to(&self, slug: &str) -> bool {
        match &self.condition {
            None => true,
            Some(SlugCondition::SlugIs(s)) => slug == s,
            Some(SlugCondition::SlugIsNot(s)) => slug != s,
            Some(SlugCondition::SlugStartsWith(prefix)) => slug.starts_with(prefix.as_str()),
        }
    }
}

/// Condition on the current page's slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlugCondition {
    SlugIs(String),
    SlugIsNot(String),
    SlugStartsWith(String),
}

/// Device classes a component is shown on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    #[default]
    All,
    DesktopOnly,
    MobileOnly,
}

impl Display {
    /// CSS class added to the component's root element
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Display::All => None,
            Display::DesktopOnly => Some("desktop-only"),
            Display::MobileOnly => Some("mobile-only"),
        }
    }
}
