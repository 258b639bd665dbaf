//! SVG parsing and rasterization, plus PNG output.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{SignError, SignResult};

// Cards are small; anything near this bound means a corrupt document.
const MAX_DIM: u32 = 16_384;

/// Parse an SVG document into a usvg tree.
pub fn parse_svg(bytes: &[u8]) -> SignResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize a parsed SVG into straight-alpha RGBA8 at the given size.
pub fn rasterize(tree: &usvg::Tree, width: u32, height: u32) -> SignResult<image::RgbaImage> {
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(SignError::render(format!(
            "raster size out of range: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SignError::render("failed to allocate svg pixmap"))?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(SignError::render("svg has invalid width/height"));
    }
    let sx = width as f32 / size.width();
    let sy = height as f32 / size.height();
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    // tiny-skia pixmaps are premultiplied; PNG wants straight alpha.
    let mut data = pixmap.data().to_vec();
    demultiply_rgba8_in_place(&mut data);

    image::RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| SignError::render("pixmap buffer size mismatch"))
}

/// Parse and rasterize an SVG document in one step.
pub fn svg_to_rgba(svg: &[u8], width: u32, height: u32) -> SignResult<image::RgbaImage> {
    let tree = parse_svg(svg)?;
    rasterize(&tree, width, height)
}

/// Write a PNG, creating parent directories as needed.
pub fn write_png(
    path: &Path,
    data: &[u8],
    width: u32,
    height: u32,
    color: image::ColorType,
) -> SignResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(path, data, width, height, color, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u32 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u32 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u32 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_svg_ok_and_err() {
        let ok = br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#;
        parse_svg(ok).unwrap();

        let bad = br#"<svg"#;
        assert!(parse_svg(bad).is_err());
    }

    #[test]
    fn rasterize_fills_the_requested_size() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
            <rect width="10" height="10" fill="#ff0000"/>
        </svg>"##;
        let img = svg_to_rgba(svg, 20, 20).unwrap();
        assert_eq!(img.dimensions(), (20, 20));
        let px = img.get_pixel(10, 10);
        assert_eq!(px[0], 255);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn rasterize_rejects_zero_size() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#;
        assert!(svg_to_rgba(svg, 0, 10).is_err());
    }

    #[test]
    fn demultiply_restores_straight_alpha() {
        // 50% alpha premultiplied: channel 64 -> ~128 straight.
        let mut px = vec![64u8, 64, 64, 128];
        demultiply_rgba8_in_place(&mut px);
        assert!(px[0] >= 126 && px[0] <= 129, "got {}", px[0]);
        assert_eq!(px[3], 128);
    }
}
