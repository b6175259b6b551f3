//! ogcard - Open Graph card templates
//!
//! Builds self-contained HTML documents (inline CSS, base64 fonts, emoji as images) that an
//! external headless browser screenshots into social preview images.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ogcard::{render, FontCache, ParsedRequest, RenderOptions};
//!
//! let fonts = FontCache::load_all(Path::new("assets/fonts"))?;
//! let request: ParsedRequest = serde_json::from_str(r#"{
//!     "text": "**Hello** world",
//!     "md": true,
//!     "images": ["https://example.com/logo.svg"]
//! }"#)?;
//!
//! let html = render(&request, &RenderOptions::default(), &fonts);
//! ```

pub mod css;
pub mod document;
pub mod emoji;
pub mod fonts;
pub mod layout;
pub mod logos;
pub mod request;
pub mod sanitize;
pub mod text;

use std::path::PathBuf;

use serde::Deserialize;
use wasm_bindgen::prelude::*;

pub use document::build_document;
pub use emoji::{EmojiOptions, Emojifier};
pub use fonts::{FontCache, FontSource};
pub use layout::{Layout, Variant};
pub use request::{ParsedRequest, Theme};
pub use sanitize::sanitize_html;

/// Errors raised outside of rendering itself, which never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required font asset could not be read at startup.
    #[error("font asset {} could not be read: {source}", .path.display())]
    FontMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Host-supplied font data is not valid base64.
    #[error("font data for {file} is not valid base64: {source}")]
    FontData {
        file: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("unknown layout variant: {0}")]
    UnknownLayout(String),

    #[error("invalid card document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rendering options, chosen by the host.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Layout variant (default: banner)
    pub layout: Variant,
    /// Emoji image source
    pub emoji: EmojiOptions,
}

/// Per-card settings carried in a document's `meta`.
///
/// Only the layout is taken from the document; emoji sources stay host configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardMeta {
    /// Layout variant name, resolved when the document is rendered
    pub layout: Option<String>,
}

/// A self-contained card document with options and request.
///
/// ```json
/// {
///   "meta": { "layout": "socials" },
///   "request": { "text": "Hello", "images": ["https://example.com/a.svg"] }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDocument {
    #[serde(default)]
    pub meta: CardMeta,
    pub request: ParsedRequest,
}

impl CardDocument {
    /// Parse a card document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Options for this card: the document's layout with the host's emoji source.
    pub fn options(&self, emoji: &EmojiOptions) -> Result<RenderOptions> {
        let layout = match &self.meta.layout {
            Some(name) => name.parse()?,
            None => Variant::default(),
        };
        Ok(RenderOptions {
            layout,
            emoji: emoji.clone(),
        })
    }
}

/// Render a request to a complete HTML document.
pub fn render(request: &ParsedRequest, options: &RenderOptions, fonts: &FontCache) -> String {
    let emoji = Emojifier::new(options.emoji.clone());
    build_document(request, options.layout.layout(), fonts, &emoji)
}

/// Render a self-contained card document (meta + request) given as JSON.
pub fn render_document(
    doc_json: &str,
    fonts: &FontCache,
    emoji: &EmojiOptions,
) -> Result<String> {
    let doc = CardDocument::from_json(doc_json)?;
    let options = doc.options(emoji)?;
    Ok(render(&doc.request, &options, fonts))
}

// ============================================================================
// WASM bindings
// ============================================================================

/// WASM entry point: render a card document with fonts supplied as `[{ file, data }]`.
///
/// `emoji` optionally overrides the emoji source as `{ base, folder, ext }`.
#[wasm_bindgen(js_name = "renderDocument")]
pub fn render_document_wasm(
    doc_json: &str,
    fonts: JsValue,
    emoji: JsValue,
) -> std::result::Result<String, JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let sources: Vec<FontSource> = if fonts.is_undefined() || fonts.is_null() {
        Vec::new()
    } else {
        serde_wasm_bindgen::from_value(fonts)
            .map_err(|e| JsValue::from_str(&format!("Invalid fonts: {}", e)))?
    };
    let cache = FontCache::from_sources(sources).map_err(|e| JsValue::from_str(&e.to_string()))?;
    if cache.is_empty() {
        tracing::debug!("no fonts supplied, rendering without @font-face rules");
    }

    let emoji: EmojiOptions = if emoji.is_undefined() || emoji.is_null() {
        EmojiOptions::default()
    } else {
        serde_wasm_bindgen::from_value(emoji)
            .map_err(|e| JsValue::from_str(&format!("Invalid emoji options: {}", e)))?
    };

    render_document(doc_json, &cache, &emoji).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_json(json: &str) -> Result<String> {
        render_document(json, &FontCache::default(), &EmojiOptions::default())
    }

    #[test]
    fn test_render_document_defaults() {
        let json = r#"{ "request": { "text": "Hello World" } }"#;
        let html = render_json(json).unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Hello World"));
        assert!(html.contains("logo-banner"));
    }

    #[test]
    fn test_render_document_layout_and_host_emoji() {
        let json = r#"{
            "meta": { "layout": "minimal" },
            "request": { "text": "Hi 🎉", "images": ["a.png"] }
        }"#;
        let emoji = EmojiOptions {
            base: "/e/".to_string(),
            folder: "72x72".to_string(),
            ext: ".png".to_string(),
        };
        let html = render_document(json, &FontCache::default(), &emoji).unwrap();

        assert!(html.contains("width=\"auto\" height=\"225\""));
        assert!(html.contains("src=\"&#x2F;e&#x2F;72x72/1f389.png\""));
    }

    #[test]
    fn test_document_cannot_choose_emoji_source() {
        let hostile = r#"{
            "meta": { "emoji": { "base": "\"><script>alert(1)</script><x y=\"", "ext": ".js" } },
            "request": { "text": "hi 🎉" }
        }"#;
        let plain = r#"{ "request": { "text": "hi 🎉" } }"#;

        let html = render_json(hostile).unwrap();
        assert!(!html.contains("<script>"));
        assert_eq!(html, render_json(plain).unwrap());
    }

    #[test]
    fn test_invalid_json() {
        let result = render_json("not valid json");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_unknown_layout_rejected() {
        let json = r#"{ "meta": { "layout": "fancy" }, "request": { "text": "x" } }"#;
        assert!(matches!(
            render_json(json),
            Err(Error::UnknownLayout(name)) if name == "fancy"
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = Error::UnknownLayout("fancy".to_string());
        assert_eq!(err.to_string(), "unknown layout variant: fancy");
    }
}
