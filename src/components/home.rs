//! Homepage: intro plus the latest articles

use super::page_list::PageList;
use super::{Component, ComponentProps};
use crate::config::HomePageConfig;
use crate::content::Entry;
use crate::helpers::html_escape;
use crate::listing::{ListFilter, SortOrder};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomePage {
    /// Intro heading, the site title when unset
    pub title: Option<String>,
    pub description: Option<String>,
    pub section_title: Option<String>,
    pub limit: Option<usize>,
}

impl HomePage {
    pub fn from_config(config: &HomePageConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            section_title: config.section_title.clone(),
            limit: config.limit,
        }
    }

    /// Articles shown on the homepage, in display order
    pub fn entries<'a>(&self, props: &ComponentProps<'a>) -> Vec<&'a Entry> {
        self.articles().entries(props)
    }

    /// Articles only: no index pages of any folder, newest first
    fn articles(&self) -> PageList {
        PageList {
            limit: self.limit,
            sort: SortOrder::DateAndAlphabetical,
            filter: ListFilter::NotFolderIndex,
        }
    }
}

impl Component for HomePage {
    fn name(&self) -> &'static str {
        "HomePage"
    }

    fn render(&self, props: &ComponentProps) -> String {
        let title = self.title.as_deref().unwrap_or(&props.cfg.page_title);
        let section_title = self
            .section_title
            .clone()
            .unwrap_or_else(|| props.i18n.get("components.homePage.sectionTitle"));

        let mut html = String::from(r#"<div class="homepage"><article class="homepage-intro">"#);
        html.push_str(&format!("<h1>{}</h1>", html_escape(title)));
        if let Some(description) = &self.description {
            html.push_str(&format!(
                r#"<p class="homepage-description">{}</p>"#,
                html_escape(description.trim())
            ));
        }
        html.push_str("</article>");

        html.push_str(&format!(
            r#"<section class="homepage-section"><h2 class="section-title">{}</h2>"#,
            html_escape(&section_title)
        ));
        html.push_str(&self.articles().render(props));
        html.push_str("</section></div>");
        html
    }

    fn css(&self) -> Vec<&'static str> {
        let mut css = self.articles().css();
        css.push(HOMEPAGE_CSS);
        css
    }
}

const HOMEPAGE_CSS: &str = r#"
.homepage {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.homepage-intro {
  text-align: center;
  margin-bottom: 3rem;
  padding: 0 1rem;
}

.homepage-intro h1 {
  font-size: 2.5rem;
  margin-bottom: 1rem;
  color: var(--dark);
}

.homepage-description {
  font-size: 1.125rem;
  color: var(--darkgray);
  max-width: 700px;
  margin: 0 auto;
  line-height: 1.7;
}

.homepage-section {
  margin-top: 3rem;
}

.section-title {
  font-size: 1.75rem;
  font-weight: 600;
  color: var(--dark);
  margin-bottom: 2rem;
  padding-bottom: 0.75rem;
  border-bottom: 2px solid var(--secondary);
}

@media (max-width: 768px) {
  .homepage-intro h1 {
    font-size: 2rem;
  }

  .homepage-description {
    font-size: 1rem;
  }

  .section-title {
    font-size: 1.5rem;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalConfig;
    use crate::i18n::I18n;

    fn site() -> Vec<Entry> {
        vec![
            Entry::new("index").with_title("Home"),
            Entry::new("notes/index").with_title("Notes"),
            Entry::new("a").with_title("A").with_date(2024, 1, 1),
            Entry::new("b").with_title("B").with_date(2024, 6, 1),
            Entry::new("c").with_title("Zinc"),
            Entry::new("d").with_title("Amino"),
            Entry::new("SEO-для-инфобизнеса/plan").with_title("Plan"),
        ]
    }

    fn titles(html: &str) -> Vec<&str> {
        html.split(r#"<h3 class="blog-card-title">"#)
            .skip(1)
            .filter_map(|s| s.split("</h3>").next())
            .collect()
    }

    #[test]
    fn test_articles_newest_first_without_index_pages() {
        let entries = site();
        let cfg = GlobalConfig {
            list_exclusions: vec!["SEO для инфобизнеса".to_string()],
            ..Default::default()
        };
        let i18n = I18n::default();
        let props = ComponentProps::new(&cfg, &i18n, "index", &entries);

        let html = HomePage::default().render(&props);
        assert_eq!(titles(&html), vec!["B", "A", "Amino", "Zinc"]);
    }

    #[test]
    fn test_intro_and_limit() {
        let entries = site();
        let cfg = GlobalConfig {
            page_title: "Garden".to_string(),
            locale: "ru-RU".to_string(),
            ..Default::default()
        };
        let i18n = I18n::new(&cfg.locale);
        let props = ComponentProps::new(&cfg, &i18n, "index", &entries);

        let home = HomePage {
            description: Some("  Notes on health.\n".to_string()),
            limit: Some(2),
            ..Default::default()
        };
        let html = home.render(&props);
        assert!(html.starts_with(
            r#"<div class="homepage"><article class="homepage-intro"><h1>Garden</h1><p class="homepage-description">Notes on health.</p></article>"#
        ));
        assert!(html.contains(r#"<h2 class="section-title">Последние статьи</h2>"#));
        assert_eq!(titles(&html), vec!["B", "A"]);
        assert!(html.ends_with("</div></section></div>"));
    }
}
