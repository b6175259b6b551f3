//! HTML document assembly.

use crate::css::build_css;
use crate::emoji::Emojifier;
use crate::fonts::FontCache;
use crate::layout::{Footer, FooterPlacement, Layout};
use crate::logos::compose_logos;
use crate::request::ParsedRequest;
use crate::text::render_text;

/// Build the complete HTML document for a request in the given layout.
///
/// Never fails: bad input degrades to defaults or escaped text.
pub fn build_document(
    request: &ParsedRequest,
    layout: &Layout,
    fonts: &FontCache,
    emoji: &Emojifier,
) -> String {
    let font_size = request
        .font_size
        .as_deref()
        .unwrap_or(layout.default_font_size);
    let css = build_css(layout, request.theme, font_size, fonts);
    let logos = compose_logos(
        &request.images,
        &request.widths,
        &request.heights,
        layout.image_size,
        layout.separator,
    );
    let text = render_text(&request.text, request.md, emoji);

    tracing::debug!(
        layout = layout.name,
        theme = request.theme.as_str(),
        md = request.md,
        images = request.images.len(),
        "rendering document"
    );

    let mut doc = DocumentBuilder::new(&css);
    doc.logo_row(&logos, layout);
    doc.heading(&text, layout);
    doc.finish()
}

struct DocumentBuilder {
    output: String,
}

impl DocumentBuilder {
    fn new(css: &str) -> Self {
        let mut output = String::new();
        output.push_str("<!DOCTYPE html>\n<html>\n");
        output.push_str("    <meta charset=\"utf-8\">\n");
        output.push_str("    <title>Generated Image</title>\n");
        output.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        output.push_str(&format!("    <style>\n        {}\n    </style>\n", css));
        output.push_str("    <body>\n");
        Self { output }
    }

    fn logo_row(&mut self, logos: &str, layout: &Layout) {
        let brand = &layout.brand;
        self.output.push_str(&format!(
            "        <div class=\"logo-wrapper\">\n            {}\n            \
             <img src=\"{}\" alt=\"{}\" class=\"{}\" />\n        </div>\n\n",
            logos, brand.src, brand.alt, brand.class
        ));
    }

    fn heading(&mut self, text: &str, layout: &Layout) {
        self.output.push_str("        <div class=\"heading\">\n");
        if layout.heading_inner {
            self.output.push_str(&format!(
                "            <div class=\"heading-inner\">\n                {}\n            </div>\n",
                text
            ));
        } else {
            self.output.push_str(&format!("            {}\n", text));
        }

        let footer = footer_html(&layout.footer);
        match layout.footer_placement {
            FooterPlacement::InsideHeading => {
                self.output.push_str(&format!("            {}\n", footer));
                self.output.push_str("        </div>\n");
            }
            FooterPlacement::AfterHeading => {
                self.output.push_str("        </div>\n");
                self.output.push_str(&format!("        {}\n", footer));
            }
        }
    }

    fn finish(mut self) -> String {
        self.output.push_str("    </body>\n</html>");
        self.output
    }
}

fn footer_html(footer: &Footer) -> String {
    if footer.icons.is_empty() {
        return format!("<div class=\"footer\">{}</div>", footer.handle);
    }

    let icons: String = footer
        .icons
        .iter()
        .map(|icon| {
            format!(
                "<img class=\"footer-icon\" src=\"{}\" alt=\"{}\" />",
                icon.src, icon.alt
            )
        })
        .collect();

    format!(
        "<div class=\"footer\"><span class=\"footer-handle\">{}</span>\
         <div class=\"footer-icons\">{}</div></div>",
        footer.handle, icons
    )
}
