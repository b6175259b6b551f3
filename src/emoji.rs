//! Emoji substitution with inline images.
//!
//! Emoji sequences in text are replaced by `<img class="emoji">` tags pointing at a
//! Twemoji-style asset tree (`{base}{folder}/{codepoints}{ext}`), so the screenshot does
//! not depend on the renderer's emoji font.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::sanitize::sanitize_html;

const ZWJ: char = '\u{200D}';
const VS16: char = '\u{FE0F}';

/// Flags, keycaps, then pictographs with optional presentation selector or skin tone,
/// ZWJ-joined, with an optional trailing tag sequence.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    let pictograph = r"\p{Extended_Pictographic}(?:\x{FE0F}|\p{Emoji_Modifier})?";
    let pattern = format!(
        r"[\x{{1F1E6}}-\x{{1F1FF}}]{{2}}|[0-9#*]\x{{FE0F}}?\x{{20E3}}|{p}(?:\x{{200D}}{p})*(?:[\x{{E0020}}-\x{{E007E}}]+\x{{E007F}})?",
        p = pictograph
    );
    Regex::new(&pattern).expect("emoji pattern is valid")
});

/// Markup tags, which substitution must leave untouched.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Where emoji images are served from.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmojiOptions {
    /// Base URL, ending with `/`
    pub base: String,
    /// Asset folder below `base`
    pub folder: String,
    /// File extension including the dot
    pub ext: String,
}

impl Default for EmojiOptions {
    fn default() -> Self {
        Self {
            base: "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/".to_string(),
            folder: "svg".to_string(),
            ext: ".svg".to_string(),
        }
    }
}

/// Replaces emoji in HTML text with image tags.
#[derive(Debug, Clone)]
pub struct Emojifier {
    /// Sanitized `base` + `folder` + `/`
    prefix: String,
    /// Sanitized extension
    ext: String,
}

impl Default for Emojifier {
    fn default() -> Self {
        Self::new(EmojiOptions::default())
    }
}

impl Emojifier {
    pub fn new(options: EmojiOptions) -> Self {
        Self {
            prefix: format!(
                "{}{}/",
                sanitize_html(&options.base),
                sanitize_html(&options.folder)
            ),
            ext: sanitize_html(&options.ext),
        }
    }

    /// Substitute every emoji outside of tags in `html`.
    pub fn parse(&self, html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut last = 0;

        for tag in TAG.find_iter(html) {
            self.replace_text(&html[last..tag.start()], &mut out);
            out.push_str(tag.as_str());
            last = tag.end();
        }
        self.replace_text(&html[last..], &mut out);

        out
    }

    fn replace_text(&self, text: &str, out: &mut String) {
        let mut last = 0;
        for m in EMOJI.find_iter(text) {
            let emoji = m.as_str();
            if is_text_symbol(emoji) {
                continue;
            }
            out.push_str(&text[last..m.start()]);
            out.push_str(&self.image(emoji));
            last = m.end();
        }
        out.push_str(&text[last..]);
    }

    fn image(&self, emoji: &str) -> String {
        format!(
            "<img class=\"emoji\" draggable=\"false\" alt=\"{}\" src=\"{}{}{}\"/>",
            emoji,
            self.prefix,
            code_points(emoji),
            self.ext
        )
    }
}

/// `©`, `®` and `™` default to text presentation and are only images with U+FE0F.
fn is_text_symbol(emoji: &str) -> bool {
    matches!(emoji, "\u{A9}" | "\u{AE}" | "\u{2122}")
}

/// Asset name for an emoji: lowercase hex code points joined by `-`.
///
/// U+FE0F is dropped unless the sequence is ZWJ-joined.
pub fn code_points(emoji: &str) -> String {
    let keep_vs16 = emoji.contains(ZWJ);
    emoji
        .chars()
        .filter(|&c| keep_vs16 || c != VS16)
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> String {
        Emojifier::default().parse(s)
    }

    #[test]
    fn test_code_points() {
        assert_eq!(code_points("😀"), "1f600");
        assert_eq!(code_points("❤\u{FE0F}"), "2764");
        assert_eq!(code_points("🇫🇷"), "1f1eb-1f1f7");
        assert_eq!(code_points("👍🏽"), "1f44d-1f3fd");
        assert_eq!(
            code_points("🏳\u{FE0F}\u{200D}🌈"),
            "1f3f3-fe0f-200d-1f308"
        );
    }

    #[test]
    fn test_replaces_emoji() {
        insta::assert_snapshot!(
            parse("Hi 👋"),
            @r#"Hi <img class="emoji" draggable="false" alt="👋" src="https:&#x2F;&#x2F;cdn.jsdelivr.net&#x2F;gh&#x2F;twitter&#x2F;twemoji@14.0.2&#x2F;assets&#x2F;svg/1f44b.svg"/>"#
        );
    }

    #[test]
    fn test_sequences_become_one_image() {
        let out = parse("👨\u{200D}👩\u{200D}👧 1\u{FE0F}\u{20E3} 🇯🇵");
        assert_eq!(out.matches("<img").count(), 3);
        assert!(out.contains("/1f468-200d-1f469-200d-1f467.svg"));
        assert!(out.contains("/31-20e3.svg"));
        assert!(out.contains("/1f1ef-1f1f5.svg"));
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(parse("hello world 123 #1"), "hello world 123 #1");
        assert_eq!(parse("© 2024 Acme™"), "© 2024 Acme™");
        assert_eq!(parse(""), "");
    }

    #[test]
    fn test_text_symbol_with_selector_is_image() {
        assert!(parse("\u{A9}\u{FE0F}").contains("/a9.svg"));
    }

    #[test]
    fn test_markup_is_preserved() {
        let html = "<p><a href=\"https://x.io/🚀\">go 🚀</a></p>";
        let out = parse(html);
        assert!(out.starts_with("<p><a href=\"https://x.io/🚀\">go <img"));
        assert!(out.ends_with("/1f680.svg\"/></a></p>"));
        assert_eq!(out.matches("<img").count(), 1);
    }

    #[test]
    fn test_custom_options() {
        let emojifier = Emojifier::new(EmojiOptions {
            base: "/static/".to_string(),
            folder: "72x72".to_string(),
            ext: ".png".to_string(),
        });
        assert!(emojifier.parse("🎉").contains("src=\"&#x2F;static&#x2F;72x72/1f389.png\""));
    }

    #[test]
    fn test_options_cannot_break_out_of_src() {
        let emojifier = Emojifier::new(EmojiOptions {
            base: "\"><script>alert(1)</script><x y=\"".to_string(),
            folder: "svg\" onload=\"x".to_string(),
            ext: ".svg\"><b>".to_string(),
        });
        let out = emojifier.parse("🎉");
        assert!(!out.contains("<script>"));
        assert!(!out.contains("<b>"));
        assert_eq!(out.matches('"').count(), 8);
    }
}
