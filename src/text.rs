//! Heading text rendering: markdown or escaped plain text, then emoji.

use pulldown_cmark::{Event, Options, Parser, html};

use crate::emoji::Emojifier;
use crate::sanitize::sanitize_html;

/// Render heading text to an HTML fragment.
///
/// With `md` set the text is converted from markdown; raw HTML inside it is kept as
/// literal text. Otherwise the text is escaped. Emoji substitution always runs last.
pub fn render_text(text: &str, md: bool, emoji: &Emojifier) -> String {
    let body = if md {
        markdown_to_html(text)
    } else {
        sanitize_html(text)
    };
    emoji.parse(&body)
}

/// Convert markdown to HTML with strikethrough and tables enabled.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str, md: bool) -> String {
        render_text(text, md, &Emojifier::default())
    }

    #[test]
    fn test_plain_text_keeps_markdown_literal() {
        assert_eq!(render("*hi*", false), "*hi*");
        assert_eq!(render("# Title", false), "# Title");
    }

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(
            render("<b>Tom & Jerry</b>", false),
            "&lt;b&gt;Tom &amp; Jerry&lt;&#x2F;b&gt;"
        );
    }

    #[test]
    fn test_markdown_emphasis() {
        assert_eq!(render("*hi*", true), "<p><em>hi</em></p>\n");
        assert!(render("**bold** and ~~gone~~", true).contains("<strong>bold</strong>"));
        assert!(render("**bold** and ~~gone~~", true).contains("<del>gone</del>"));
    }

    #[test]
    fn test_markdown_raw_html_is_literal() {
        let out = render("hello <script>alert(1)</script>", true);
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_emoji_after_markdown() {
        let out = render("**Ship it** 🚀", true);
        assert!(out.starts_with("<p><strong>Ship it</strong> <img class=\"emoji\""));
        assert!(out.contains("alt=\"🚀\""));
    }

    #[test]
    fn test_emoji_after_escaping() {
        let out = render("a < b 🎉", false);
        assert!(out.starts_with("a &lt; b <img class=\"emoji\""));
        assert!(out.contains("1f389.svg"));
    }

    #[test]
    fn test_markdown_code_span() {
        assert_eq!(
            render("Use `cargo`", true),
            "<p>Use <code>cargo</code></p>\n"
        );
    }
}
