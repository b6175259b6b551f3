use std::fs;
use std::sync::Arc;
use std::thread;

use ogcard::layout::required_faces;
use ogcard::{
    EmojiOptions, FontCache, ParsedRequest, RenderOptions, Theme, Variant, render, render_document,
};

fn font_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for face in required_faces() {
        fs::write(dir.path().join(face.file), face.file.as_bytes()).unwrap();
    }
    dir
}

#[test]
fn test_every_layout_renders_with_embedded_fonts() {
    let dir = font_dir();
    let fonts = FontCache::load_all(dir.path()).unwrap();

    let request = ParsedRequest {
        text: "**Launch** day 🚀".to_string(),
        md: true,
        theme: Theme::Light,
        images: vec!["https://a.io/a.svg".to_string(), "https://a.io/b.svg".to_string()],
        ..ParsedRequest::default()
    };

    for variant in Variant::ALL {
        let options = RenderOptions {
            layout: variant,
            ..RenderOptions::default()
        };
        let html = render(&request, &options, &fonts);

        let layout = variant.layout();
        assert_eq!(html.matches("@font-face").count(), layout.fonts.len(), "{variant}");
        assert!(html.contains("<strong>Launch</strong>"), "{variant}");
        assert!(html.contains("class=\"emoji\""), "{variant}");
        assert!(html.contains(layout.brand.src), "{variant}");
        assert!(html.contains(layout.light.color), "{variant}");
        assert_eq!(html.matches("<div class=\"plus\">").count(), 1, "{variant}");
    }
}

#[test]
fn test_missing_font_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = FontCache::load_all(&dir.path().join("nope")).unwrap_err();
    assert!(err.to_string().contains("could not be read"));
}

#[test]
fn test_document_json_with_mismatched_dimensions() {
    let json = r#"{
        "meta": { "layout": "socials" },
        "request": {
            "text": "<3 & \"quotes\"",
            "theme": "purple",
            "images": ["a.png", "b.png", "c.png"],
            "widths": ["10"],
            "heights": [null, "40"]
        }
    }"#;
    let html = render_document(json, &FontCache::default(), &EmojiOptions::default()).unwrap();

    assert!(html.contains("&lt;3 &amp; &quot;quotes&quot;"));
    assert!(html.contains("bg-black-169.png"));
    assert!(html.contains("src=\"a.png\" width=\"10\" height=\"200\""));
    assert!(html.contains("src=\"b.png\" width=\"200\" height=\"40\""));
    assert!(html.contains("src=\"c.png\" width=\"200\" height=\"200\""));
    assert_eq!(html.matches("<div class=\"plus\">").count(), 2);
}

#[test]
fn test_concurrent_renders_share_fonts() {
    let dir = font_dir();
    let fonts = Arc::new(FontCache::load_all(dir.path()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let fonts = Arc::clone(&fonts);
            thread::spawn(move || {
                let request = ParsedRequest {
                    text: format!("card {i}"),
                    ..ParsedRequest::default()
                };
                render(&request, &RenderOptions::default(), &fonts)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let html = handle.join().unwrap();
        assert!(html.contains(&format!("card {i}")));
    }
}
