//! Normalization of decoded images into the square white-background form the
//! front end expects.

use image::{DynamicImage, Rgb, RgbImage, imageops};

use crate::foundation::error::{SignError, SignResult};

/// Flatten any decoded image onto a white background, dropping alpha.
pub fn flatten_to_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    for (x, y, px) in rgba.enumerate_pixels() {
        let a = px[3] as u32;
        let blend = |c: u8| (((c as u32) * a + 255 * (255 - a) + 127) / 255) as u8;
        out.put_pixel(x, y, Rgb([blend(px[0]), blend(px[1]), blend(px[2])]));
    }
    out
}

/// Scale an image to fit inside a `size` x `size` square (aspect preserved,
/// Lanczos3) and center it on a white canvas.
pub fn fit_center(img: &RgbImage, size: u32) -> SignResult<RgbImage> {
    if size == 0 {
        return Err(SignError::validation("target size must be > 0"));
    }
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(SignError::validation("cannot standardize an empty image"));
    }

    let scale = f64::min(f64::from(size) / f64::from(width), f64::from(size) / f64::from(height));
    let scaled_w = ((f64::from(width) * scale).round() as u32).clamp(1, size);
    let scaled_h = ((f64::from(height) * scale).round() as u32).clamp(1, size);

    let resized = if (scaled_w, scaled_h) == (width, height) {
        img.clone()
    } else {
        imageops::resize(img, scaled_w, scaled_h, imageops::FilterType::Lanczos3)
    };

    let mut canvas = RgbImage::from_pixel(size, size, Rgb([255, 255, 255]));
    let offset_x = i64::from((size - scaled_w) / 2);
    let offset_y = i64::from((size - scaled_h) / 2);
    imageops::overlay(&mut canvas, &resized, offset_x, offset_y);
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn flatten_blends_alpha_onto_white() {
        let mut rgba = image::RgbaImage::new(1, 2);
        rgba.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        rgba.put_pixel(0, 1, Rgba([0, 0, 0, 255]));
        let flat = flatten_to_white(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(flat.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(flat.get_pixel(0, 1), &Rgb([0, 0, 0]));
    }

    #[test]
    fn fit_center_letterboxes_wide_images() {
        let img = RgbImage::from_pixel(100, 50, Rgb([10, 20, 30]));
        let card = fit_center(&img, 100).unwrap();
        assert_eq!(card.dimensions(), (100, 100));
        // Content band is vertically centered; above and below is white.
        assert_eq!(card.get_pixel(50, 50), &Rgb([10, 20, 30]));
        assert_eq!(card.get_pixel(50, 5), &Rgb([255, 255, 255]));
        assert_eq!(card.get_pixel(50, 95), &Rgb([255, 255, 255]));
    }

    #[test]
    fn fit_center_upscales_small_images() {
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let card = fit_center(&img, 40).unwrap();
        assert_eq!(card.dimensions(), (40, 40));
        assert_eq!(card.get_pixel(20, 20), &Rgb([0, 0, 0]));
    }

    #[test]
    fn fit_center_rejects_degenerate_input() {
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        assert!(fit_center(&img, 0).is_err());
    }
}
