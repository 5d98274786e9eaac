//! Aspect-preserving downscale for sheet embedding, using Lanczos3 filtering.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Shrink an image to fit within `max_width` x `max_height`.
///
/// Images that already fit are returned unchanged; nothing is upscaled.
pub fn resize_to_fit(img: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());
    if orig_w <= max_width && orig_h <= max_height {
        return img.clone();
    }

    let (new_width, new_height) = fit_dimensions(orig_w, orig_h, max_width, max_height);
    debug!(
        orig_w,
        orig_h,
        new_width,
        new_height,
        "Downscaling plate to sheet slot"
    );

    img.resize_exact(new_width, new_height, FilterType::Lanczos3)
}

/// Largest size with the aspect ratio of `w` x `h` inside the bounds.
///
/// The limiting side is matched exactly; the other is rounded and kept >= 1.
fn fit_dimensions(w: u32, h: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let (max_width, max_height) = (max_width.max(1), max_height.max(1));

    // w/h > max_w/max_h, compared without division
    if u64::from(w) * u64::from(max_height) > u64::from(h) * u64::from(max_width) {
        let ratio = f64::from(max_width) / f64::from(w);
        let height = (f64::from(h) * ratio).round() as u32;
        (max_width, height.max(1))
    } else {
        let ratio = f64::from(max_height) / f64::from(h);
        let width = (f64::from(w) * ratio).round() as u32;
        (width.max(1), max_height)
    }
}
