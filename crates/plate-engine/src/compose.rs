//! Image composition: pasting one image onto another.

use image::{DynamicImage, Rgba, RgbaImage};

/// Overlay `top` image onto `base` at the given position.
///
/// The `top` image is alpha-composited over the base. Pixels that fall
/// outside the base are clipped.
pub fn overlay(base: &mut RgbaImage, top: &DynamicImage, x: u32, y: u32) {
    let top_rgba = top.to_rgba8();
    for (dx, dy, pixel) in top_rgba.enumerate_pixels() {
        let (Some(target_x), Some(target_y)) = (x.checked_add(dx), y.checked_add(dy)) else {
            continue;
        };
        if target_x < base.width() && target_y < base.height() {
            let alpha = pixel[3] as f32 / 255.0;
            if alpha > 0.99 {
                base.put_pixel(target_x, target_y, *pixel);
            } else if alpha > 0.01 {
                let bg = base.get_pixel(target_x, target_y);
                let blended = blend_pixel(bg, pixel, alpha);
                base.put_pixel(target_x, target_y, blended);
            }
        }
    }
}

/// Scale an image by `factor` with nearest-neighbour sampling.
///
/// Keeps hard edges, which matters for QR modules.
pub fn scale_nearest(img: &DynamicImage, factor: f32) -> DynamicImage {
    let w = ((img.width() as f32) * factor).floor().max(1.0) as u32;
    let h = ((img.height() as f32) * factor).floor().max(1.0) as u32;
    img.resize_exact(w, h, image::imageops::FilterType::Nearest)
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (fg[0] as f32 * alpha + bg[0] as f32 * inv) as u8,
        (fg[1] as f32 * alpha + bg[1] as f32 * inv) as u8,
        (fg[2] as f32 * alpha + bg[2] as f32 * inv) as u8,
        255,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn overlay_copies_opaque_pixels() {
        let mut base = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        let top = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([0])));
        overlay(&mut base, &top, 3, 4);
        assert_eq!(base.get_pixel(3, 4), &Rgba([0, 0, 0, 255]));
        assert_eq!(base.get_pixel(4, 5), &Rgba([0, 0, 0, 255]));
        assert_eq!(base.get_pixel(5, 6), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn overlay_blends_translucent_pixels() {
        let mut base = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let top = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128])));
        overlay(&mut base, &top, 0, 0);
        let px = base.get_pixel(0, 0);
        assert!(px[0] > 100 && px[0] < 150);
    }

    #[test]
    fn overlay_does_not_panic_on_out_of_bounds() {
        let mut base = RgbaImage::new(100, 100);
        let top = DynamicImage::ImageRgba8(RgbaImage::new(50, 50));
        overlay(&mut base, &top, 80, 80); // partially out of bounds
        overlay(&mut base, &top, u32::MAX - 10, 0);
    }

    #[test]
    fn scale_nearest_applies_factor() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(348, 348));
        let scaled = scale_nearest(&img, 1.2);
        assert_eq!(scaled.width(), 417);
        assert_eq!(scaled.height(), 417);
    }

    #[test]
    fn scale_nearest_keeps_binary_pixels() {
        let mut gray = GrayImage::from_pixel(4, 4, Luma([255]));
        gray.put_pixel(0, 0, Luma([0]));
        let scaled = scale_nearest(&DynamicImage::ImageLuma8(gray), 1.5).to_luma8();
        assert!(scaled.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }
}
