//! Text measurement and drawing helpers for plate images.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use tracing::warn;

/// Text color used on plates.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Measure the pixel width of a string at the given font and scale.
pub fn measure_text_width(font: &FontRef<'_>, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// How many pixels text starting at `x` runs past the right edge.
pub fn overflow_px(x: i32, text_width: u32, canvas_width: u32) -> u32 {
    let end = i64::from(x) + i64::from(text_width);
    (end - i64::from(canvas_width)).max(0) as u32
}

/// Draw one line of text, warning when it does not fit horizontally.
pub fn draw_text_line(
    img: &mut RgbaImage,
    font: &FontRef<'_>,
    scale: PxScale,
    x: i32,
    y: i32,
    text: &str,
) {
    let overflow = overflow_px(x, measure_text_width(font, scale, text), img.width());
    if overflow > 0 {
        warn!(text, overflow, "Text runs past the right edge of the plate");
    }
    draw_text_mut(img, BLACK, x, y, scale, font, text);
}

/// Draw lines top to bottom at a fixed line pitch.
///
/// Returns the y coordinate just below the last line.
pub fn draw_lines<S: AsRef<str>>(
    img: &mut RgbaImage,
    font: &FontRef<'_>,
    scale: PxScale,
    x: i32,
    y: i32,
    line_height: i32,
    lines: &[S],
) -> i32 {
    let mut y = y;
    for line in lines {
        draw_text_line(img, font, scale, x, y, line.as_ref());
        y += line_height;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_is_zero_when_text_fits() {
        assert_eq!(overflow_px(100, 500, 2000), 0);
        assert_eq!(overflow_px(0, 2000, 2000), 0);
    }

    #[test]
    fn overflow_counts_pixels_past_edge() {
        assert_eq!(overflow_px(100, 2000, 2000), 100);
    }

    #[test]
    fn overflow_handles_negative_origin() {
        assert_eq!(overflow_px(-50, 100, 40), 10);
        assert_eq!(overflow_px(-500, 100, 40), 0);
    }
}
