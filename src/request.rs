//! Per-render input record.

use serde::{Deserialize, Deserializer};

/// Color mode selecting a layout's backdrop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Resolve a theme name. Only `"light"` selects the light branch; everything else,
    /// including unknown names, is dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name.as_deref().map(Theme::from_name).unwrap_or_default())
    }
}

/// A decoded image request.
///
/// ```json
/// {
///   "text": "**Hello** world",
///   "theme": "light",
///   "md": true,
///   "fontSize": "96px",
///   "images": ["https://example.com/a.svg", "https://example.com/b.svg"],
///   "widths": ["200", null],
///   "heights": ["200"]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRequest {
    /// Heading content, plain text or markdown.
    pub text: String,
    #[serde(default)]
    pub theme: Theme,
    /// Treat `text` as markdown
    #[serde(default)]
    pub md: bool,
    /// CSS length for the heading (layout default when absent)
    #[serde(default)]
    pub font_size: Option<String>,
    /// Logo URLs, in display order
    #[serde(default)]
    pub images: Vec<String>,
    /// Logo widths, positionally paired with `images`
    #[serde(default)]
    pub widths: Vec<Option<String>>,
    /// Logo heights, positionally paired with `images`
    #[serde(default)]
    pub heights: Vec<Option<String>>,
}
