use std::fs;
use std::path::PathBuf;

use glyph_icons::{
    COMPLETION_MESSAGE, DEFAULT_SIZES, FontResolver, GENERIC_FONT_NAME, GLYPH, GlyphLayout,
    IconRenderer, IconStyle, glyph_origin, icon_file_name,
};
use resvg::usvg::fontdb::{Database, Source};

fn generate(renderer: &IconRenderer) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    renderer
        .render_all_to(&DEFAULT_SIZES, dir.path(), &mut out)
        .unwrap();
    (dir, String::from_utf8(out).unwrap())
}

#[test]
fn generates_the_stock_icon_set() {
    let (dir, output) = generate(&IconRenderer::default());

    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        [
            "Created icon16.png",
            "Created icon48.png",
            "Created icon128.png",
            COMPLETION_MESSAGE,
        ]
    );

    for size in DEFAULT_SIZES {
        let path = dir.path().join(icon_file_name(size));
        let icon = image::open(&path).unwrap().to_rgba8();

        assert_eq!(icon.dimensions(), (size, size));
        assert!(icon.get_pixel(size / 2, size / 2)[3] > 0, "center of {size}");

        let margin = size / 32;
        assert_eq!(
            icon.get_pixel(margin, size / 2).0,
            [102, 126, 234, 255],
            "inset of {size}"
        );
    }
}

#[test]
fn regenerating_is_byte_identical() {
    let renderer = IconRenderer::default();
    let (first, _) = generate(&renderer);
    let (second, _) = generate(&renderer);

    for size in DEFAULT_SIZES {
        let name = icon_file_name(size);
        assert_eq!(
            fs::read(first.path().join(&name)).unwrap(),
            fs::read(second.path().join(&name)).unwrap(),
            "{name}"
        );
    }
}

#[test]
fn missing_platform_font_still_renders() {
    let resolver = FontResolver::new(
        Some(PathBuf::from("/nonexistent/Library/Fonts/Arial.ttf")),
        Some(GENERIC_FONT_NAME.to_string()),
    );
    let renderer = IconRenderer::with_resolver(IconStyle::default(), resolver);
    let (dir, output) = generate(&renderer);

    assert!(output.ends_with(&format!("{COMPLETION_MESSAGE}\n")));
    for size in DEFAULT_SIZES {
        let icon = image::open(dir.path().join(icon_file_name(size))).unwrap();
        assert_eq!((icon.width(), icon.height()), (size, size));
    }
}

#[test]
fn custom_style_changes_the_background() {
    let style = IconStyle::from_json(
        r#"{ "background": { "red": 10, "green": 20, "blue": 30, "alpha": 255 } }"#,
    )
    .unwrap();
    let renderer = IconRenderer::with_resolver(style, FontResolver::built_in_only());

    let icon = renderer.render(48).unwrap();
    assert_eq!(icon.get_pixel(1, 24).0, [10, 20, 30, 255]);
}

/// First sans-serif `.ttf` installed on the host, if any.
fn system_sans_font() -> Option<PathBuf> {
    let mut db = Database::new();
    db.load_system_fonts();

    let mut paths: Vec<PathBuf> = db
        .faces()
        .filter(|face| {
            face.families.iter().any(|(name, _)| {
                let name = name.to_ascii_lowercase();
                name.contains("sans") && !name.contains("mono")
            })
        })
        .filter_map(|face| match &face.source {
            Source::File(path) => Some(path.clone()),
            _ => None,
        })
        .filter(|path| path.extension().is_some_and(|ext| ext == "ttf"))
        .collect();
    paths.sort();
    paths.into_iter().next()
}

#[test]
fn system_font_glyph_lands_at_the_raised_center() {
    let Some(path) = system_sans_font() else {
        eprintln!("no system sans-serif font, skipping");
        return;
    };
    let resolver = FontResolver::new(Some(path), None);
    let style = IconStyle::default();

    let font = resolver.resolve(style.font_size(128));
    assert!(!font.is_built_in());
    let layout = GlyphLayout::measure(&font, GLYPH, style.glyph_color).unwrap();
    let bounds = layout.bounds();
    let (x, y) = glyph_origin(128, layout.text_width(), layout.text_height(), style.bias(128));

    let icon = IconRenderer::with_resolver(style, resolver).render(128).unwrap();
    let white: Vec<(u32, u32)> = icon
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0 == [255, 255, 255, 255])
        .map(|(x, y, _)| (x, y))
        .collect();
    assert!(!white.is_empty());

    let top = white.iter().map(|p| p.1).min().unwrap() as i32;
    let bottom = white.iter().map(|p| p.1).max().unwrap() as i32;
    // Fully covered pixels sit within a pixel of the measured box.
    assert!((top - (y + bounds.top)).abs() <= 2, "top {top} vs {}", y + bounds.top);
    assert!(
        (bottom - (y + bounds.bottom - 1)).abs() <= 2,
        "bottom {bottom} vs {}",
        y + bounds.bottom - 1
    );
}
