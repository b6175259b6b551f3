//! Font assets embedded into the generated stylesheet.
//!
//! Fonts are read once, base64-encoded and kept in an immutable [`FontCache`] that every
//! render borrows. Nothing here is touched after startup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use crate::{Error, Result};

/// Container format of a font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    Woff2,
    Woff,
    TrueType,
}

impl FontFormat {
    /// MIME type used in the `data:` URL.
    pub fn mime(self) -> &'static str {
        match self {
            FontFormat::Woff2 => "font/woff2",
            FontFormat::Woff => "font/woff",
            FontFormat::TrueType => "font/ttf",
        }
    }

    /// Value of the CSS `format()` hint.
    pub fn css_format(self) -> &'static str {
        match self {
            FontFormat::Woff2 => "woff2",
            FontFormat::Woff => "woff",
            FontFormat::TrueType => "truetype",
        }
    }
}

/// A font face a layout needs, identified by its asset file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFace {
    pub family: &'static str,
    pub style: &'static str,
    pub weight: u16,
    pub file: &'static str,
    pub format: FontFormat,
}

/// Already-encoded font data supplied by the host (WASM has no filesystem).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSource {
    /// Asset file name the data stands in for, e.g. `WorkSans-Regular.woff2`.
    pub file: String,
    /// Base64-encoded font bytes.
    pub data: String,
}

/// Base64 font data keyed by asset file name.
#[derive(Debug, Clone, Default)]
pub struct FontCache {
    encoded: HashMap<String, String>,
}

impl FontCache {
    /// Read every face from `dir`. A missing file is fatal.
    pub fn load(dir: &Path, faces: &[FontFace]) -> Result<Self> {
        let mut encoded = HashMap::new();

        for face in faces {
            if encoded.contains_key(face.file) {
                continue;
            }
            let path = dir.join(face.file);
            let bytes = fs::read(&path).map_err(|source| Error::FontMissing {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(file = face.file, bytes = bytes.len(), "loaded font");
            encoded.insert(face.file.to_string(), STANDARD.encode(&bytes));
        }

        Ok(Self { encoded })
    }

    /// Read the faces of every built-in layout.
    pub fn load_all(dir: &Path) -> Result<Self> {
        Self::load(dir, &crate::layout::required_faces())
    }

    /// Build a cache from base64 payloads, checking that each one decodes.
    pub fn from_sources(sources: Vec<FontSource>) -> Result<Self> {
        let mut encoded = HashMap::with_capacity(sources.len());

        for source in sources {
            STANDARD
                .decode(source.data.as_bytes())
                .map_err(|e| Error::FontData {
                    file: source.file.clone(),
                    source: e,
                })?;
            encoded.insert(source.file, source.data);
        }

        Ok(Self { encoded })
    }

    /// Base64 data for an asset file, if loaded.
    pub fn get(&self, file: &str) -> Option<&str> {
        self.encoded.get(file).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.encoded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }
}
