//! Logo row composition.

use crate::layout::ImageSize;
use crate::sanitize::sanitize_html;

/// Separator placed before every logo but the first.
pub fn plus_sign(index: usize, glyph: &str) -> String {
    if index == 0 {
        String::new()
    } else {
        format!("<div class=\"plus\">{}</div>", glyph)
    }
}

/// A single logo `<img>`. All values are sanitized.
pub fn image_tag(src: &str, width: &str, height: &str) -> String {
    format!(
        "<img class=\"logo\" alt=\"Generated Image\" src=\"{}\" width=\"{}\" height=\"{}\" />",
        sanitize_html(src),
        sanitize_html(width),
        sanitize_html(height)
    )
}

/// Logos in order with separators between them.
///
/// `widths[i]`/`heights[i]` pair with `images[i]`; a missing or `None` entry falls back to
/// `defaults`. Surplus dimension entries are ignored and an empty image list yields an empty
/// fragment.
pub fn compose_logos(
    images: &[String],
    widths: &[Option<String>],
    heights: &[Option<String>],
    defaults: ImageSize,
    glyph: &str,
) -> String {
    let mut out = String::new();
    for (i, src) in images.iter().enumerate() {
        out.push_str(&plus_sign(i, glyph));
        out.push_str(&image_tag(
            src,
            dimension(widths, i, defaults.width),
            dimension(heights, i, defaults.height),
        ));
    }
    out
}

fn dimension<'a>(values: &'a [Option<String>], index: usize, default: &'a str) -> &'a str {
    values
        .get(index)
        .and_then(|v| v.as_deref())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: ImageSize = ImageSize {
        width: "300",
        height: "300",
    };

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn dims(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|s| Some(s.to_string())).collect()
    }

    #[test]
    fn test_plus_sign() {
        assert_eq!(plus_sign(0, "+"), "");
        insta::assert_snapshot!(plus_sign(1, "+"), @r#"<div class="plus">+</div>"#);
        assert_eq!(plus_sign(7, "+"), plus_sign(1, "+"));
    }

    #[test]
    fn test_image_tag() {
        insta::assert_snapshot!(
            image_tag("logo.svg", "auto", "225"),
            @r#"<img class="logo" alt="Generated Image" src="logo.svg" width="auto" height="225" />"#
        );
    }

    #[test]
    fn test_two_logos_in_order() {
        let out = compose_logos(
            &strings(&["a.png", "b.png"]),
            &dims(&["10", "20"]),
            &dims(&["30", "40"]),
            DEFAULTS,
            "+",
        );

        assert_eq!(out.matches("<img").count(), 2);
        assert_eq!(out.matches("class=\"plus\"").count(), 1);

        let first = out.find("src=\"a.png\" width=\"10\" height=\"30\"").unwrap();
        let plus = out.find("<div class=\"plus\">").unwrap();
        let second = out.find("src=\"b.png\" width=\"20\" height=\"40\"").unwrap();
        assert!(first < plus && plus < second);
        assert!(!out.starts_with("<div"));
    }

    #[test]
    fn test_image_and_separator_counts() {
        for n in 0..5 {
            let images: Vec<String> = (0..n).map(|i| format!("{i}.png")).collect();
            let out = compose_logos(&images, &[], &[], DEFAULTS, "+");
            assert_eq!(out.matches("<img").count(), n);
            assert_eq!(out.matches("class=\"plus\"").count(), n.saturating_sub(1));
        }
    }

    #[test]
    fn test_empty_images() {
        assert_eq!(compose_logos(&[], &dims(&["1"]), &[], DEFAULTS, "+"), "");
    }

    #[test]
    fn test_missing_dimensions_use_defaults() {
        let out = compose_logos(
            &strings(&["a.png", "b.png", "c.png"]),
            &[Some("10".to_string()), None],
            &dims(&["30"]),
            ImageSize {
                width: "auto",
                height: "225",
            },
            "+",
        );
        assert!(out.contains("src=\"a.png\" width=\"10\" height=\"30\""));
        assert!(out.contains("src=\"b.png\" width=\"auto\" height=\"225\""));
        assert!(out.contains("src=\"c.png\" width=\"auto\" height=\"225\""));
    }

    #[test]
    fn test_values_are_sanitized() {
        let out = compose_logos(
            &strings(&["x\" onerror=\"alert(1)"]),
            &dims(&["<b>"]),
            &[],
            DEFAULTS,
            "+",
        );
        assert!(out.contains("src=\"x&quot; onerror=&quot;alert(1)\""));
        assert!(out.contains("width=\"&lt;b&gt;\""));
    }
}
