//! Slug and relative link helpers
//!
//! Slugs are path-like identifiers without a leading slash, e.g.
//! `notes/vitamin-d` or `notes/index`. A slug ending in `/` or in an
//! `index` segment names a folder (section) page.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s").unwrap();
}

/// Turn a content-relative file path into a slug
///
/// # Examples
/// ```ignore
/// slugify_path("Notes/Vitamin D.md") // -> "Notes/Vitamin-D"
/// slugify_path("blog/_index.md")     // -> "blog/index"
/// ```
pub fn slugify_path(path: &str) -> String {
    let path = path.trim_matches('/');
    let without_ext = match path.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => {
            if matches!(ext, "md" | "markdown" | "html") {
                stem.to_string()
            } else {
                // keep non-markdown extensions, only the stem is slugified
                return format!("{}.{}", slugify_segments(stem), ext);
            }
        }
        _ => path.to_string(),
    };

    let slug = slugify_segments(&without_ext);
    match slug.strip_suffix("_index") {
        Some(prefix) if prefix.is_empty() || prefix.ends_with('/') => format!("{}index", prefix),
        _ => slug,
    }
}

/// Slugify every segment of a path, keeping non-ASCII letters
pub fn slugify_segments(s: &str) -> String {
    let joined = s
        .split('/')
        .map(|segment| {
            let segment = WHITESPACE.replace_all(segment, "-");
            segment
                .replace('&', "-and-")
                .replace('%', "-percent")
                .replace(['?', '#'], "")
        })
        .collect::<Vec<_>>()
        .join("/");
    joined.trim_end_matches('/').to_string()
}

/// True if `slug` is exactly `suffix` or ends with `/suffix`
pub fn ends_with_segment(slug: &str, suffix: &str) -> bool {
    slug == suffix || slug.ends_with(&format!("/{}", suffix))
}

/// True if the slug names a folder page
pub fn is_folder_path(slug: &str) -> bool {
    slug.ends_with('/')
        || ends_with_segment(slug, "index")
        || ends_with_segment(slug, "index.md")
        || ends_with_segment(slug, "index.html")
}

/// Drop a trailing `index` segment and the leading slash
///
/// Returns `/` for the site root.
pub fn simplify_slug(slug: &str) -> String {
    let trimmed = if ends_with_segment(slug, "index") {
        &slug[..slug.len() - "index".len()]
    } else {
        slug
    };
    let trimmed = trimmed.trim_start_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Relative path from a page back to the site root
///
/// # Examples
/// ```ignore
/// path_to_root("index")      // -> "."
/// path_to_root("a/b/page")   // -> "../.."
/// ```
pub fn path_to_root(slug: &str) -> String {
    let depth = slug
        .split('/')
        .filter(|s| !s.is_empty())
        .count()
        .saturating_sub(1);

    if depth == 0 {
        ".".to_string()
    } else {
        vec![".."; depth].join("/")
    }
}

/// Join path segments, collapsing separators
///
/// A leading slash on the first segment and a trailing slash on the last
/// one are preserved.
pub fn join_segments(segments: &[&str]) -> String {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return String::new();
    };

    let mut joined = segments
        .iter()
        .filter(|s| !s.is_empty() && **s != "/")
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if first.starts_with('/') {
        joined.insert(0, '/');
    }
    if last.ends_with('/') {
        joined.push('/');
    }
    joined
}

/// Link from the page at `current` to the page at `target`
///
/// # Examples
/// ```ignore
/// resolve_relative("notes/a", "blog/b")      // -> "../blog/b"
/// resolve_relative("index", "notes/index")   // -> "./notes/"
/// ```
pub fn resolve_relative(current: &str, target: &str) -> String {
    let root = path_to_root(current);
    let target = simplify_slug(target);
    simplify_slug(&join_segments(&[&root, &target]))
}

/// Absolute URL for a slug under the configured base URL
pub fn full_url_for(base_url: &str, slug: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let base = if base.starts_with("http://") || base.starts_with("https://") {
        base.to_string()
    } else {
        format!("https://{}", base)
    };

    match simplify_slug(slug).as_str() {
        "/" => format!("{}/", base),
        path => format!("{}/{}", base, path),
    }
}
