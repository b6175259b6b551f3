//! Stylesheet generation for a layout.

use crate::fonts::{FontCache, FontFace};
use crate::layout::{Layout, Rule, Value};
use crate::request::Theme;
use crate::sanitize::sanitize_html;

/// Build the stylesheet for a layout, theme and heading size.
///
/// Embedded `@font-face` rules come first, followed by the layout's rules in order.
/// `font_size` is sanitized before interpolation; an invalid length simply produces an
/// invalid declaration.
pub fn build_css(layout: &Layout, theme: Theme, font_size: &str, fonts: &FontCache) -> String {
    let mut css = StyleBuilder::new(layout, theme, font_size);

    for face in layout.fonts {
        match fonts.get(face.file) {
            Some(data) => css.font_face(face, data),
            None => tracing::warn!(
                layout = layout.name,
                file = face.file,
                "font not loaded, skipping @font-face"
            ),
        }
    }

    for rule in layout.rules {
        css.rule(rule);
    }

    css.finish()
}

struct StyleBuilder<'a> {
    output: String,
    layout: &'a Layout,
    theme: Theme,
    font_size: String,
}

impl<'a> StyleBuilder<'a> {
    fn new(layout: &'a Layout, theme: Theme, font_size: &str) -> Self {
        Self {
            output: String::new(),
            layout,
            theme,
            font_size: sanitize_html(font_size),
        }
    }

    fn font_face(&mut self, face: &FontFace, data: &str) {
        self.output.push_str(&format!(
            "\n    @font-face {{\n        \
             font-family: '{}';\n        \
             font-style: {};\n        \
             font-weight: {};\n        \
             src: url(data:{};charset=utf-8;base64,{}) format('{}');\n    \
             }}\n",
            face.family,
            face.style,
            face.weight,
            face.format.mime(),
            data,
            face.format.css_format()
        ));
    }

    fn rule(&mut self, rule: &Rule) {
        self.output
            .push_str(&format!("\n    {} {{\n", rule.selector));
        for decl in rule.decls {
            let value = self.resolve(&decl.value);
            self.output
                .push_str(&format!("        {}: {};\n", decl.property, value));
        }
        self.output.push_str("    }\n");
    }

    fn resolve(&self, value: &Value) -> String {
        let palette = &self.layout.palette;
        match value {
            Value::Raw(s) => (*s).to_string(),
            Value::Color(swatch) => palette.get(*swatch).to_string(),
            Value::Prefixed(prefix, swatch) => format!("{} {}", prefix, palette.get(*swatch)),
            Value::FontFamily => self.layout.font_family.to_string(),
            Value::FontSize => self.font_size.clone(),
            Value::BackgroundColor => self.layout.backdrop(self.theme).color.to_string(),
            Value::BackgroundImage => self.layout.backdrop(self.theme).image.to_css(),
        }
    }

    fn finish(self) -> String {
        self.output
    }
}
