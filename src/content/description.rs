//! Plain text and short descriptions of note bodies

use lazy_static::lazy_static;
use pulldown_cmark::{Event, Options, Parser, TagEnd};
use regex::Regex;

lazy_static! {
    // [[target]], [[target|alias]], ![[embed]]
    static ref WIKILINK: Regex = Regex::new(r"!?\[\[([^\]|#]+)(?:#[^\]|]*)?(?:\|([^\]]+))?\]\]").unwrap();
    // %% obsidian comments %%
    static ref COMMENT: Regex = Regex::new(r"(?s)%%.*?%%").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref SENTENCE_END: Regex = Regex::new(r"\.\s").unwrap();
}

/// Extract the readable text of a markdown body
pub fn plain_text(markdown: &str) -> String {
    let markdown = COMMENT.replace_all(markdown, "");
    let markdown = WIKILINK.replace_all(&markdown, |caps: &regex::Captures| {
        caps.get(2)
            .or_else(|| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    });

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_MATH;
    let mut text = String::with_capacity(markdown.len());

    for event in Parser::new_ext(&markdown, options) {
        match event {
            Event::Text(t) | Event::Code(t) | Event::InlineMath(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::TableCell)
            | Event::End(TagEnd::CodeBlock) => text.push('\n'),
            _ => {}
        }
    }

    text.trim().to_string()
}

/// Build a description of roughly `length` characters
///
/// Whole sentences are taken until the length is reached. A first
/// sentence that is already too long is cut at a word boundary and
/// ends with an ellipsis.
pub fn describe(text: &str, length: usize) -> Option<String> {
    let collapsed = WHITESPACE.replace_all(text.trim(), " ");
    if collapsed.is_empty() {
        return None;
    }

    let sentences: Vec<&str> = SENTENCE_END.split(&collapsed).collect();
    let mut parts: Vec<String> = Vec::new();
    let mut current = 0;

    if sentences[0].chars().count() >= length {
        for word in sentences[0].split(' ').filter(|w| !w.is_empty()) {
            if current >= length {
                break;
            }
            parts.push(word.to_string());
            current += word.chars().count();
        }
        return Some(format!("{}...", parts.join(" ")));
    }

    for sentence in sentences.iter().filter(|s| !s.is_empty()) {
        if current >= length {
            break;
        }
        let sentence = if sentence.ends_with('.') {
            sentence.to_string()
        } else {
            format!("{}.", sentence)
        };
        current += sentence.chars().count();
        parts.push(sentence);
    }

    Some(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let md = "# Title\n\nSome **bold** text with `code` and a [link](https://x.org).\n\n- item [[Other Note|alias]]\n- [[Plain]]\n\n%%hidden%%";
        let text = plain_text(md);
        assert!(text.starts_with("Title\nSome bold text with code and a link."));
        assert!(text.contains("item alias"));
        assert!(text.contains("Plain"));
        assert!(!text.contains("hidden"));
        assert!(!text.contains("[["));
    }

    #[test]
    fn test_describe_whole_sentences() {
        let text = "First sentence. Second one. Third is here. Fourth.";
        assert_eq!(
            describe(text, 20).as_deref(),
            Some("First sentence. Second one.")
        );
        assert_eq!(describe(text, 500).as_deref(), Some(text));
    }

    #[test]
    fn test_describe_long_first_sentence() {
        let text = "one two three four five six seven eight nine ten";
        assert_eq!(describe(text, 10).as_deref(), Some("one two three..."));
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(describe("  \n ", 150), None);
    }
}
