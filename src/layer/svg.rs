//! SVG and pixmap utilities using resvg/usvg.
//!
//! Glyphs are laid out by building a tiny SVG document and letting usvg turn
//! it into outlines. These helpers are shared by the layers and the renderer.

use std::sync::Arc;

use image::RgbaImage;
use resvg::tiny_skia::Pixmap;
use resvg::usvg::{Group, Node, Options, Rect, Tree, fontdb::Database};

// ============================================================================
// Documents
// ============================================================================

/// Wraps SVG content in a root element of the given size.
pub fn svg_document(size: u32, body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">{body}</svg>"#
    )
}

/// Parses SVG markup into a render tree.
///
/// When `fonts` is given, text is shaped with that database only and the
/// family name is used for text without an explicit family.
/// Returns `None` if the markup cannot be parsed.
pub fn parse_tree(
    svg_data: &str,
    fonts: Option<(&Arc<Database>, &str)>,
) -> Option<Tree> {
    let mut opts = Options::default();
    if let Some((db, family)) = fonts {
        opts.fontdb = Arc::clone(db);
        opts.font_family = family.to_string();
    }

    match Tree::from_str(svg_data, &opts) {
        Ok(tree) => Some(tree),
        Err(err) => {
            log::debug!("failed to parse generated SVG: {err}");
            None
        }
    }
}

/// Escapes text for use in SVG character data and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Union of the outline boxes of every shape under `group`, in canvas
/// coordinates.
///
/// Text contributes the outlines of its glyphs, not its line box.
pub fn ink_bounds(group: &Group) -> Option<Rect> {
    group
        .children()
        .iter()
        .filter_map(|node| match node {
            Node::Group(group) => ink_bounds(group),
            Node::Path(path) => Some(path.abs_bounding_box()),
            Node::Text(text) => ink_bounds(text.flattened()),
            Node::Image(_) => None,
        })
        .reduce(|a, b| {
            Rect::from_ltrb(
                a.left().min(b.left()),
                a.top().min(b.top()),
                a.right().max(b.right()),
                a.bottom().max(b.bottom()),
            )
            .unwrap_or(a)
        })
}

// ============================================================================
// Pixmap conversion
// ============================================================================

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
///
/// tiny_skia stores premultiplied alpha; the result is straight alpha.
pub fn pixmap_to_rgba_image(pixmap: &Pixmap) -> Option<RgbaImage> {
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use resvg::tiny_skia::{Color, Transform};

    const SQUARE: &str = r##"<rect x="2" y="2" width="4" height="4" fill="#ff0000"/>"##;

    #[test]
    fn parse_and_render_document() {
        let tree = parse_tree(&svg_document(8, SQUARE), None).unwrap();
        let mut pixmap = Pixmap::new(8, 8).unwrap();
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        let img = pixmap_to_rgba_image(&pixmap).unwrap();
        assert_eq!(img.get_pixel(3, 3).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn ink_bounds_cover_every_shape() {
        let body = r##"<rect x="2" y="3" width="2" height="2"/><g><rect x="5" y="1" width="1" height="6"/></g>"##;
        let tree = parse_tree(&svg_document(8, body), None).unwrap();
        let bounds = ink_bounds(tree.root()).unwrap();

        assert_eq!(
            (bounds.left(), bounds.top(), bounds.right(), bounds.bottom()),
            (2.0, 1.0, 6.0, 7.0)
        );
    }

    #[test]
    fn empty_document_has_no_ink() {
        let tree = parse_tree(&svg_document(8, ""), None).unwrap();
        assert!(ink_bounds(tree.root()).is_none());
    }

    #[test]
    fn malformed_markup_is_rejected() {
        assert!(parse_tree("<svg", None).is_none());
    }

    #[test]
    fn conversion_unpremultiplies() {
        let mut pixmap = Pixmap::new(2, 2).unwrap();
        pixmap.fill(Color::from_rgba8(255, 255, 255, 128));

        let img = pixmap_to_rgba_image(&pixmap).unwrap();
        let pixel = img.get_pixel(1, 1);
        assert_eq!(pixel[3], 128);
        assert!(pixel[0] >= 254, "white should survive unpremultiplying");
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape_xml("A&B<\"'>"), "A&amp;B&lt;&quot;&apos;&gt;");
        assert_eq!(escape_xml("A"), "A");
    }
}
