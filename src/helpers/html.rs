//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Join the present class names with spaces
///
/// # Examples
/// ```ignore
/// class_names(&[Some("desktop-only"), None, Some("recent-notes")]) // -> "desktop-only recent-notes"
/// ```
pub fn class_names(classes: &[Option<&str>]) -> String {
    classes
        .iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate an image tag
pub fn image_tag(src: &str, alt: &str, lazy: bool) -> String {
    let loading = if lazy { r#" loading="lazy""# } else { "" };
    format!(
        r#"<img src="{}" alt="{}"{}>"#,
        html_escape(src),
        html_escape(alt),
        loading
    )
}

/// Wrap an HTML fragment into a standalone document
pub fn document(lang: &str, title: &str, style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        html_escape(lang),
        html_escape(title),
        style.trim(),
        body
    )
}
