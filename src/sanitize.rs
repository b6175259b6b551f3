//! HTML escaping for untrusted request values.

/// Escape a string for use in HTML text and double- or single-quoted attribute values.
///
/// Escapes `&`, `<`, `>`, `"`, `'` and `/`. Every other character is kept as is, so the
/// result is always valid UTF-8 and never fails.
pub fn sanitize_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}
