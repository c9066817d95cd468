//! Blog card markup shared by the listing components

use crate::content::Entry;
use crate::helpers::{html_escape, image_tag};
use crate::listing::ListingContext;

/// Render a grid of cards
pub(crate) fn cards_grid(
    ctx: &ListingContext,
    entries: &[&Entry],
    show_tags: bool,
    untitled: &str,
) -> String {
    let mut html = String::from(r#"<div class="blog-cards-grid">"#);
    for entry in entries {
        html.push_str(&card(ctx, entry, show_tags, untitled));
    }
    html.push_str("</div>");
    html
}

/// Render one card linking to `entry`
pub(crate) fn card(ctx: &ListingContext, entry: &Entry, show_tags: bool, untitled: &str) -> String {
    let title = entry.title().unwrap_or(untitled);
    let mut html = format!(
        r#"<a href="{}" class="blog-card">"#,
        html_escape(&ctx.link_to(entry))
    );

    if let Some(image) = entry.image() {
        html.push_str(r#"<div class="blog-card-image">"#);
        html.push_str(&image_tag(image, title, true));
        html.push_str("</div>");
    }

    html.push_str(r#"<div class="blog-card-content">"#);
    html.push_str(&format!(
        r#"<h3 class="blog-card-title">{}</h3>"#,
        html_escape(title)
    ));

    if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
        html.push_str(&format!(
            r#"<p class="blog-card-description">{}</p>"#,
            html_escape(description)
        ));
    }

    let tags = entry.tags();
    if show_tags && !tags.is_empty() {
        html.push_str(r#"<div class="blog-card-tags">"#);
        for tag in tags {
            html.push_str(&format!(
                r#"<span class="blog-card-tag">{}</span>"#,
                html_escape(tag)
            ));
        }
        html.push_str("</div>");
    }

    html.push_str("</div></a>");
    html
}

pub(crate) const CARDS_CSS: &str = r#"
.blog-cards-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.blog-card {
  display: flex;
  flex-direction: column;
  border: 1px solid var(--lightgray);
  border-radius: 12px;
  overflow: hidden;
  background: var(--light);
  color: var(--dark);
  text-decoration: none;
  transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.blog-card:hover {
  transform: translateY(-4px);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
}

.blog-card-image img {
  width: 100%;
  height: 180px;
  object-fit: cover;
  display: block;
}

.blog-card-content {
  padding: 1rem 1.25rem 1.25rem;
}

.blog-card-title {
  margin: 0 0 0.5rem;
  font-size: 1.15rem;
  line-height: 1.4;
}

.blog-card-description {
  margin: 0;
  color: var(--darkgray);
  line-height: 1.6;
}

.blog-card-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-top: 0.75rem;
}

.blog-card-tag {
  font-size: 0.8rem;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--highlight);
  color: var(--secondary);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalConfig;

    #[test]
    fn test_card_markup() {
        let cfg = GlobalConfig::default();
        let ctx = ListingContext::new(&cfg, "notes/index");
        let mut entry = Entry::new("notes/sleep")
            .with_title("Sleep & Rest")
            .with_tags(["health"])
            .with_description("How much is enough");
        entry.frontmatter.as_mut().unwrap().cover = Some("/img/sleep.png".to_string());

        let html = card(&ctx, &entry, true, "Untitled");
        assert_eq!(
            html,
            concat!(
                r#"<a href="../notes/sleep" class="blog-card">"#,
                r#"<div class="blog-card-image"><img src="/img/sleep.png" alt="Sleep &amp; Rest" loading="lazy"></div>"#,
                r#"<div class="blog-card-content">"#,
                r#"<h3 class="blog-card-title">Sleep &amp; Rest</h3>"#,
                r#"<p class="blog-card-description">How much is enough</p>"#,
                r#"<div class="blog-card-tags"><span class="blog-card-tag">health</span></div>"#,
                "</div></a>"
            )
        );
    }

    #[test]
    fn test_card_without_optional_parts() {
        let cfg = GlobalConfig::default();
        let ctx = ListingContext::new(&cfg, "index");
        let entry = Entry::new("a").with_title("A").with_tags(["x"]);

        let html = card(&ctx, &entry, false, "Untitled");
        assert!(!html.contains("blog-card-image"));
        assert!(!html.contains("blog-card-description"));
        assert!(!html.contains("blog-card-tags"));

        let html = card(&ctx, &Entry::new("b"), true, "Untitled");
        assert!(html.contains(r#"<h3 class="blog-card-title">Untitled</h3>"#));
    }

    #[test]
    fn test_empty_grid() {
        let cfg = GlobalConfig::default();
        let ctx = ListingContext::new(&cfg, "index");
        assert_eq!(
            cards_grid(&ctx, &[], true, "Untitled"),
            r#"<div class="blog-cards-grid"></div>"#
        );
    }
}
