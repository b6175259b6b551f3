//! Layout variant descriptors.
//!
//! Every card is rendered by the same pipeline; what differs between variants is plain
//! data: palette, backdrops, fonts, CSS rules, default logo size and footer content.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::Error;
use crate::fonts::{FontFace, FontFormat};
use crate::request::Theme;

// ============================================================================
// Colors and backdrops
// ============================================================================

/// A named slot in a layout's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Dark,
    Light,
    Highlight,
}

/// Fixed colors of a layout.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub dark: &'static str,
    pub light: &'static str,
    pub highlight: &'static str,
}

impl Palette {
    pub fn get(&self, swatch: Swatch) -> &'static str {
        match swatch {
            Swatch::Dark => self.dark,
            Swatch::Light => self.light,
            Swatch::Highlight => self.highlight,
        }
    }
}

/// Background image drawn behind the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropImage {
    None,
    /// A remote image, stretched to cover the page.
    Url(&'static str),
    /// Two offset radial gradients forming a dot grid in the given color.
    Dots(&'static str),
}

impl BackdropImage {
    /// Convert to a CSS `background-image` value.
    pub fn to_css(&self) -> String {
        match self {
            BackdropImage::None => "none".to_string(),
            BackdropImage::Url(url) => format!("url({})", url),
            BackdropImage::Dots(color) => format!(
                "radial-gradient(circle at 25px 25px, {c} 2%, transparent 0%), \
                 radial-gradient(circle at 75px 75px, {c} 2%, transparent 0%)",
                c = color
            ),
        }
    }
}

/// Page background for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Backdrop {
    pub color: &'static str,
    pub image: BackdropImage,
}

// ============================================================================
// Stylesheet rules
// ============================================================================

/// Right-hand side of a CSS declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Emitted verbatim
    Raw(&'static str),
    /// A palette color
    Color(Swatch),
    /// Literal followed by a palette color, e.g. `0.75rem solid #fff`
    Prefixed(&'static str, Swatch),
    /// The layout's font stack
    FontFamily,
    /// The requested (sanitized) heading size
    FontSize,
    /// Theme-dependent backdrop color
    BackgroundColor,
    /// Theme-dependent backdrop image
    BackgroundImage,
}

#[derive(Debug, Clone, Copy)]
pub struct Decl {
    pub property: &'static str,
    pub value: Value,
}

const fn decl(property: &'static str, value: Value) -> Decl {
    Decl { property, value }
}

const fn raw(property: &'static str, value: &'static str) -> Decl {
    Decl {
        property,
        value: Value::Raw(value),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub selector: &'static str,
    pub decls: &'static [Decl],
}

// ============================================================================
// Markup content
// ============================================================================

/// Fallback `width`/`height` attributes for logos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: &'static str,
    pub height: &'static str,
}

/// Fixed image closing the logo row.
#[derive(Debug, Clone, Copy)]
pub struct BrandImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Icon {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Footer {
    pub handle: &'static str,
    pub icons: &'static [Icon],
}

/// Where the footer sits relative to the heading block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterPlacement {
    InsideHeading,
    AfterHeading,
}

/// A complete layout variant.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub name: &'static str,
    pub description: &'static str,
    pub palette: Palette,
    pub dark: Backdrop,
    pub light: Backdrop,
    pub fonts: &'static [FontFace],
    pub font_family: &'static str,
    pub default_font_size: &'static str,
    pub image_size: ImageSize,
    pub separator: &'static str,
    pub brand: BrandImage,
    pub footer: Footer,
    pub footer_placement: FooterPlacement,
    /// Wrap the rendered text in a `.heading-inner` block
    pub heading_inner: bool,
    pub rules: &'static [Rule],
}

impl Layout {
    /// Backdrop for a theme.
    pub fn backdrop(&self, theme: Theme) -> &Backdrop {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    /// All built-in layouts, in [`Variant::ALL`] order.
    pub fn all() -> [&'static Layout; 5] {
        Variant::ALL.map(Variant::layout)
    }
}

/// Built-in layout variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Banner,
    Socials,
    Compact,
    Minimal,
    Stacked,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Banner,
        Variant::Socials,
        Variant::Compact,
        Variant::Minimal,
        Variant::Stacked,
    ];

    pub fn layout(self) -> &'static Layout {
        match self {
            Variant::Banner => &BANNER,
            Variant::Socials => &SOCIALS,
            Variant::Compact => &COMPACT,
            Variant::Minimal => &MINIMAL,
            Variant::Stacked => &STACKED,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.layout().name
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| Error::UnknownLayout(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Union of the font faces used by every built-in layout, without duplicates.
pub fn required_faces() -> Vec<FontFace> {
    let mut faces: Vec<FontFace> = Vec::new();
    for layout in Layout::all() {
        for face in layout.fonts {
            if !faces.iter().any(|f| f.file == face.file) {
                faces.push(*face);
            }
        }
    }
    faces
}

// ============================================================================
// Shared assets
// ============================================================================

const WORK_SANS: FontFace = FontFace {
    family: "Work Sans",
    style: "normal",
    weight: 400,
    file: "WorkSans-Regular.woff2",
    format: FontFormat::Woff2,
};

const INTER: FontFace = FontFace {
    family: "Inter",
    style: "normal",
    weight: 400,
    file: "Inter-Regular.woff2",
    format: FontFormat::Woff2,
};

const INTER_BOLD: FontFace = FontFace {
    family: "Inter",
    style: "normal",
    weight: 700,
    file: "Inter-Bold.woff2",
    format: FontFormat::Woff2,
};

const VERA_MONO: FontFace = FontFace {
    family: "Vera",
    style: "normal",
    weight: 400,
    file: "Vera-Mono.woff2",
    format: FontFormat::Woff2,
};

const PANTHER_PALETTE: Palette = Palette {
    dark: "#0f111a",
    light: "#ffffff",
    highlight: "#ffb626",
};

const PANTHER_DARK: Backdrop = Backdrop {
    color: "#0f111a",
    image: BackdropImage::Url("https://p4nth3rlabs.netlify.app/assets/bg-black-169.png"),
};

const PANTHER_LIGHT: Backdrop = Backdrop {
    color: "#f11012",
    image: BackdropImage::Url("https://p4nth3rlabs.netlify.app/assets/bg-red-169.png"),
};

const PANTHER_BANNER: BrandImage = BrandImage {
    src: "https://p4nth3rlabs.netlify.app/assets/svgs/banner.svg",
    alt: "whitep4nth3r banner",
    class: "logo-banner",
};

const SOCIAL_ICONS: &[Icon] = &[
    Icon {
        src: "https://p4nth3rlabs.netlify.app/assets/svgs/twitch.svg",
        alt: "Twitch",
    },
    Icon {
        src: "https://p4nth3rlabs.netlify.app/assets/svgs/youtube.svg",
        alt: "YouTube",
    },
    Icon {
        src: "https://p4nth3rlabs.netlify.app/assets/svgs/github.svg",
        alt: "GitHub",
    },
    Icon {
        src: "https://p4nth3rlabs.netlify.app/assets/svgs/twitter.svg",
        alt: "Twitter",
    },
];

// Rules shared between variants. Colors resolve against each variant's own palette.

const BACKDROP_COVER: [Decl; 4] = [
    decl("background", Value::BackgroundColor),
    decl("background-image", Value::BackgroundImage),
    raw("background-position", "center"),
    raw("background-size", "cover"),
];

const LOGO_WRAPPER_COLUMN: Rule = Rule {
    selector: ".logo-wrapper",
    decls: &[
        raw("display", "flex"),
        raw("align-items", "center"),
        raw("align-content", "center"),
        raw("justify-content", "center"),
        raw("justify-items", "center"),
        raw("flex-direction", "column"),
        raw("position", "relative"),
        raw("margin-bottom", "1rem"),
    ],
};

const LOGO_WRAPPER_ROW: Rule = Rule {
    selector: ".logo-wrapper",
    decls: &[
        raw("display", "flex"),
        raw("align-items", "center"),
        raw("align-content", "center"),
        raw("justify-content", "center"),
        raw("justify-items", "center"),
    ],
};

const LOGO_BANNER: Rule = Rule {
    selector: ".logo-banner",
    decls: &[
        raw("width", "400px"),
        raw("position", "absolute"),
        raw("bottom", "-48px"),
    ],
};

const HEADING_INNER: Rule = Rule {
    selector: ".heading-inner",
    decls: &[raw("padding", "2.5rem 2rem")],
};

const PANTHER_FOOTER: Rule = Rule {
    selector: ".footer",
    decls: &[
        decl("background-color", Value::Color(Swatch::Light)),
        decl("color", Value::Color(Swatch::Dark)),
        raw("display", "flex"),
        raw("flex-direction", "column"),
        raw("justify-content", "center"),
        raw("align-items", "center"),
        raw("align-content", "center"),
        raw("width", "100%"),
        raw("box-sizing", "border-box"),
        raw("padding", "0.5rem"),
        raw("font-size", "42px"),
    ],
};

const PANTHER_HEADING: Rule = Rule {
    selector: ".heading",
    decls: &[
        raw("display", "block"),
        decl("font-family", Value::FontFamily),
        decl("font-size", Value::FontSize),
        raw("font-weight", "400"),
        raw("line-height", "1.4"),
        decl("color", Value::Color(Swatch::Light)),
        decl("background-color", Value::Color(Swatch::Dark)),
        raw("width", "100%"),
        raw("box-sizing", "border-box"),
        decl("border", Value::Prefixed("0.75rem solid", Swatch::Light)),
        raw("border-bottom-width", "0"),
        decl(
            "box-shadow",
            Value::Prefixed("1.75rem 1.75rem 0 0", Swatch::Highlight),
        ),
        raw("margin-bottom", "8rem"),
    ],
};

const EMOJI: Rule = Rule {
    selector: ".emoji",
    decls: &[
        raw("height", "1em"),
        raw("width", "1em"),
        raw("margin", "0 .05em 0 .1em"),
        raw("vertical-align", "-0.1em"),
    ],
};

// ============================================================================
// Variants
// ============================================================================

/// Logos over a boxed heading with a banner ribbon and a site footer.
pub static BANNER: Layout = Layout {
    name: "banner",
    description: "Boxed heading on a textured backdrop with a banner ribbon",
    palette: PANTHER_PALETTE,
    dark: PANTHER_DARK,
    light: PANTHER_LIGHT,
    fonts: &[WORK_SANS],
    font_family: "'Work Sans'",
    default_font_size: "96px",
    image_size: ImageSize {
        width: "300",
        height: "300",
    },
    separator: "+",
    brand: PANTHER_BANNER,
    footer: Footer {
        handle: "whitep4nth3r.com",
        icons: &[],
    },
    footer_placement: FooterPlacement::InsideHeading,
    heading_inner: true,
    rules: &[
        Rule {
            selector: "body",
            decls: &[
                BACKDROP_COVER[0],
                BACKDROP_COVER[1],
                BACKDROP_COVER[2],
                BACKDROP_COVER[3],
                raw("font-size", "16px"),
                raw("height", "100vh"),
                raw("padding", "6rem 4rem"),
                raw("box-sizing", "border-box"),
                raw("display", "flex"),
                raw("flex-direction", "column"),
                raw("text-align", "center"),
                raw("align-items", "center"),
                raw("justify-content", "center"),
            ],
        },
        LOGO_WRAPPER_COLUMN,
        Rule {
            selector: ".logo",
            decls: &[],
        },
        LOGO_BANNER,
        Rule {
            selector: ".plus",
            decls: &[
                decl("color", Value::Color(Swatch::Light)),
                decl("font-family", Value::FontFamily),
                raw("font-size", "100px"),
            ],
        },
        PANTHER_FOOTER,
        HEADING_INNER,
        PANTHER_HEADING,
        EMOJI,
    ],
};

/// Like [`BANNER`], with a row of social icons in the footer.
pub static SOCIALS: Layout = Layout {
    name: "socials",
    description: "Boxed heading with a footer of social network icons",
    palette: PANTHER_PALETTE,
    dark: PANTHER_DARK,
    light: PANTHER_LIGHT,
    fonts: &[WORK_SANS],
    font_family: "'Work Sans'",
    default_font_size: "80px",
    image_size: ImageSize {
        width: "200",
        height: "200",
    },
    separator: "+",
    brand: PANTHER_BANNER,
    footer: Footer {
        handle: "whitep4nth3r",
        icons: SOCIAL_ICONS,
    },
    footer_placement: FooterPlacement::InsideHeading,
    heading_inner: true,
    rules: &[
        Rule {
            selector: "body",
            decls: &[
                BACKDROP_COVER[0],
                BACKDROP_COVER[1],
                BACKDROP_COVER[2],
                BACKDROP_COVER[3],
                raw("font-size", "16px"),
                raw("height", "100vh"),
                raw("padding", "5rem 4rem"),
                raw("box-sizing", "border-box"),
                raw("display", "flex"),
                raw("flex-direction", "column"),
                raw("text-align", "center"),
                raw("align-items", "center"),
                raw("justify-content", "center"),
            ],
        },
        LOGO_WRAPPER_COLUMN,
        Rule {
            selector: ".logo",
            decls: &[raw("margin", "0 1rem")],
        },
        LOGO_BANNER,
        Rule {
            selector: ".plus",
            decls: &[
                decl("color", Value::Color(Swatch::Light)),
                decl("font-family", Value::FontFamily),
                raw("font-size", "80px"),
            ],
        },
        Rule {
            selector: ".footer",
            decls: &[
                decl("background-color", Value::Color(Swatch::Light)),
                decl("color", Value::Color(Swatch::Dark)),
                raw("display", "flex"),
                raw("flex-direction", "row"),
                raw("justify-content", "space-between"),
                raw("align-items", "center"),
                raw("width", "100%"),
                raw("box-sizing", "border-box"),
                raw("padding", "0.5rem 2rem"),
                raw("font-size", "36px"),
            ],
        },
        Rule {
            selector: ".footer-icons",
            decls: &[
                raw("display", "flex"),
                raw("align-items", "center"),
                raw("gap", "1.5rem"),
            ],
        },
        Rule {
            selector: ".footer-icon",
            decls: &[raw("height", "40px"), raw("width", "40px")],
        },
        HEADING_INNER,
        PANTHER_HEADING,
        EMOJI,
    ],
};

/// Smaller logos and type for busy cards.
pub static COMPACT: Layout = Layout {
    name: "compact",
    description: "Tighter spacing, smaller logos and a smaller heading",
    palette: Palette {
        dark: "#0f111a",
        light: "#ffffff",
        highlight: "#26ffe6",
    },
    dark: PANTHER_DARK,
    light: PANTHER_LIGHT,
    fonts: &[WORK_SANS],
    font_family: "'Work Sans'",
    default_font_size: "64px",
    image_size: ImageSize {
        width: "200",
        height: "200",
    },
    separator: "+",
    brand: PANTHER_BANNER,
    footer: Footer {
        handle: "whitep4nth3r.com",
        icons: &[],
    },
    footer_placement: FooterPlacement::InsideHeading,
    heading_inner: true,
    rules: &[
        Rule {
            selector: "body",
            decls: &[
                BACKDROP_COVER[0],
                BACKDROP_COVER[1],
                BACKDROP_COVER[2],
                BACKDROP_COVER[3],
                raw("font-size", "16px"),
                raw("height", "100vh"),
                raw("padding", "3rem"),
                raw("box-sizing", "border-box"),
                raw("display", "flex"),
                raw("flex-direction", "column"),
                raw("text-align", "center"),
                raw("align-items", "center"),
                raw("justify-content", "center"),
            ],
        },
        Rule {
            selector: ".logo-wrapper",
            decls: &[
                raw("display", "flex"),
                raw("align-items", "center"),
                raw("justify-content", "center"),
                raw("position", "relative"),
                raw("gap", "1rem"),
                raw("margin-bottom", "3.5rem"),
            ],
        },
        Rule {
            selector: ".logo",
            decls: &[],
        },
        Rule {
            selector: ".logo-banner",
            decls: &[
                raw("width", "300px"),
                raw("position", "absolute"),
                raw("bottom", "-40px"),
            ],
        },
        Rule {
            selector: ".plus",
            decls: &[
                decl("color", Value::Color(Swatch::Highlight)),
                decl("font-family", Value::FontFamily),
                raw("font-size", "64px"),
            ],
        },
        Rule {
            selector: ".footer",
            decls: &[
                decl("background-color", Value::Color(Swatch::Light)),
                decl("color", Value::Color(Swatch::Dark)),
                raw("width", "100%"),
                raw("box-sizing", "border-box"),
                raw("padding", "0.25rem"),
                raw("font-size", "28px"),
            ],
        },
        Rule {
            selector: ".heading-inner",
            decls: &[raw("padding", "1.5rem 1.5rem")],
        },
        Rule {
            selector: ".heading",
            decls: &[
                raw("display", "block"),
                decl("font-family", Value::FontFamily),
                decl("font-size", Value::FontSize),
                raw("font-weight", "400"),
                raw("line-height", "1.3"),
                decl("color", Value::Color(Swatch::Light)),
                decl("background-color", Value::Color(Swatch::Dark)),
                raw("width", "100%"),
                raw("box-sizing", "border-box"),
                decl("border", Value::Prefixed("0.5rem solid", Swatch::Light)),
                raw("border-bottom-width", "0"),
                decl("box-shadow", Value::Prefixed("1rem 1rem 0 0", Swatch::Highlight)),
            ],
        },
        EMOJI,
    ],
};

/// Dot-grid backdrop with a plain card, after the classic preview generator look.
pub static MINIMAL: Layout = Layout {
    name: "minimal",
    description: "Dot-grid backdrop, wide logos and a plain heading card",
    palette: Palette {
        dark: "#000000",
        light: "#ffffff",
        highlight: "#d400ff",
    },
    dark: Backdrop {
        color: "#000000",
        image: BackdropImage::Dots("dimgray"),
    },
    light: Backdrop {
        color: "#ffffff",
        image: BackdropImage::Dots("lightgray"),
    },
    fonts: &[INTER, INTER_BOLD, VERA_MONO],
    font_family: "'Inter', sans-serif",
    default_font_size: "96px",
    image_size: ImageSize {
        width: "auto",
        height: "225",
    },
    separator: "+",
    brand: BrandImage {
        src: "https://p4nth3rlabs.netlify.app/assets/svgs/logo.svg",
        alt: "whitep4nth3r logo",
        class: "logo-brand",
    },
    footer: Footer {
        handle: "whitep4nth3r.com",
        icons: &[],
    },
    footer_placement: FooterPlacement::AfterHeading,
    heading_inner: false,
    rules: &[
        Rule {
            selector: "body",
            decls: &[
                decl("background", Value::BackgroundColor),
                decl("background-image", Value::BackgroundImage),
                raw("background-size", "100px 100px"),
                raw("height", "100vh"),
                raw("display", "flex"),
                raw("flex-direction", "column"),
                raw("text-align", "center"),
                raw("align-items", "center"),
                raw("justify-content", "center"),
            ],
        },
        Rule {
            selector: "code",
            decls: &[
                decl("color", Value::Color(Swatch::Highlight)),
                raw("font-family", "'Vera'"),
                raw("white-space", "pre-wrap"),
                raw("letter-spacing", "-5px"),
            ],
        },
        Rule {
            selector: "code:before, code:after",
            decls: &[raw("content", "'`'")],
        },
        LOGO_WRAPPER_ROW,
        Rule {
            selector: ".logo",
            decls: &[raw("margin", "0 75px")],
        },
        Rule {
            selector: ".logo-brand",
            decls: &[raw("height", "120px"), raw("margin-left", "75px")],
        },
        Rule {
            selector: ".plus",
            decls: &[
                raw("color", "#bbb"),
                raw("font-family", "Times New Roman, Verdana"),
                raw("font-size", "100px"),
            ],
        },
        Rule {
            selector: ".heading",
            decls: &[
                decl("font-family", Value::FontFamily),
                decl("font-size", Value::FontSize),
                raw("font-style", "normal"),
                decl("color", Value::Color(Swatch::Light)),
                decl("background-color", Value::Color(Swatch::Dark)),
                raw("line-height", "1.8"),
                raw("margin-top", "4rem"),
                raw("padding", "1rem 3rem"),
                raw("border-radius", "1rem"),
            ],
        },
        Rule {
            selector: ".footer",
            decls: &[
                decl("font-family", Value::FontFamily),
                decl("color", Value::Color(Swatch::Dark)),
                decl("background-color", Value::Color(Swatch::Light)),
                raw("margin-top", "2rem"),
                raw("padding", "0.25rem 1.5rem"),
                raw("border-radius", "999px"),
                raw("font-size", "32px"),
                raw("font-weight", "700"),
            ],
        },
        EMOJI,
    ],
};

/// Logos stacked vertically beside a full-width heading bar.
pub static STACKED: Layout = Layout {
    name: "stacked",
    description: "Vertically stacked logos above a full-width heading bar",
    palette: Palette {
        dark: "#1a1b26",
        light: "#f5f5f5",
        highlight: "#ff6188",
    },
    dark: Backdrop {
        color: "#1a1b26",
        image: BackdropImage::None,
    },
    light: Backdrop {
        color: "#f11012",
        image: BackdropImage::None,
    },
    fonts: &[WORK_SANS],
    font_family: "'Work Sans'",
    default_font_size: "72px",
    image_size: ImageSize {
        width: "auto",
        height: "120",
    },
    separator: "+",
    brand: PANTHER_BANNER,
    footer: Footer {
        handle: "whitep4nth3r.com",
        icons: &[],
    },
    footer_placement: FooterPlacement::AfterHeading,
    heading_inner: true,
    rules: &[
        Rule {
            selector: "body",
            decls: &[
                decl("background", Value::BackgroundColor),
                decl("background-image", Value::BackgroundImage),
                raw("height", "100vh"),
                raw("margin", "0"),
                raw("padding", "3rem 0"),
                raw("box-sizing", "border-box"),
                raw("display", "flex"),
                raw("flex-direction", "column"),
                raw("text-align", "center"),
                raw("align-items", "center"),
                raw("justify-content", "space-between"),
            ],
        },
        Rule {
            selector: ".logo-wrapper",
            decls: &[
                raw("display", "flex"),
                raw("flex-direction", "column"),
                raw("align-items", "center"),
                raw("gap", "0.5rem"),
            ],
        },
        Rule {
            selector: ".logo",
            decls: &[],
        },
        Rule {
            selector: ".logo-banner",
            decls: &[raw("width", "320px"), raw("margin-top", "1rem")],
        },
        Rule {
            selector: ".plus",
            decls: &[
                decl("color", Value::Color(Swatch::Highlight)),
                decl("font-family", Value::FontFamily),
                raw("font-size", "48px"),
                raw("line-height", "1"),
            ],
        },
        HEADING_INNER,
        Rule {
            selector: ".heading",
            decls: &[
                decl("font-family", Value::FontFamily),
                decl("font-size", Value::FontSize),
                raw("line-height", "1.3"),
                decl("color", Value::Color(Swatch::Light)),
                decl("background-color", Value::Color(Swatch::Dark)),
                raw("width", "100%"),
                raw("box-sizing", "border-box"),
                decl("border-top", Value::Prefixed("0.75rem solid", Swatch::Highlight)),
                decl("border-bottom", Value::Prefixed("0.75rem solid", Swatch::Highlight)),
            ],
        },
        Rule {
            selector: ".footer",
            decls: &[
                decl("font-family", Value::FontFamily),
                decl("color", Value::Color(Swatch::Light)),
                decl("background-color", Value::Color(Swatch::Dark)),
                raw("padding", "0.25rem 1rem"),
                raw("font-size", "32px"),
            ],
        },
        EMOJI,
    ],
};
