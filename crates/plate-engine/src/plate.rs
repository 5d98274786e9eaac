//! Name plate layout and rendering.
//!
//! Layout:
//! ```text
//! 作品名：{work}
//! 出展者名：{name}
//!
//! caption line 1                 ┌──────┐
//! caption line 2                 │  QR  │
//! ...                            └──────┘
//! ```

use ab_glyph::{FontRef, PxScale};
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::compose;
use crate::text;

/// Label drawn before the work title.
pub const WORK_LABEL: &str = "作品名：";

/// Label drawn before the exhibitor name.
pub const NAME_LABEL: &str = "出展者名：";

/// Fixed positions of plate elements, in template pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateLayout {
    pub work_origin: (i32, i32),
    pub name_origin: (i32, i32),
    pub qr_origin: (u32, u32),
    /// Scale applied to the generated QR image before pasting.
    pub qr_scale: f32,
    pub caption_origin: (i32, i32),
    pub caption_line_height: i32,
}

impl Default for PlateLayout {
    fn default() -> Self {
        Self {
            work_origin: (100, 100),
            name_origin: (100, 300),
            qr_origin: (1900, 1000),
            qr_scale: 1.2,
            caption_origin: (150, 1000),
            caption_line_height: 80,
        }
    }
}

/// Font sizes in pixels, and the length threshold between large and small.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSizes {
    pub large: f32,
    pub small: f32,
    pub caption: f32,
    /// Texts with at most this many characters use the large size.
    pub threshold: usize,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self::from_base(200.0)
    }
}

impl FontSizes {
    /// Derive all sizes from the large title size.
    ///
    /// The small size never drops below 1 px.
    pub fn from_base(large: f32) -> Self {
        Self {
            large,
            small: (large - 10.0).max(1.0),
            caption: 80.0,
            threshold: 8,
        }
    }
}

/// Strings drawn on a plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateText {
    pub work: String,
    pub name: String,
    pub caption: Vec<String>,
}

impl PlateText {
    pub fn work_line(&self) -> String {
        format!("{WORK_LABEL}{}", self.work)
    }

    pub fn name_line(&self) -> String {
        format!("{NAME_LABEL}{}", self.name)
    }
}

/// Pick the font size for a text field by its character count.
pub fn select_font_size(text: &str, sizes: &FontSizes) -> f32 {
    if text.chars().count() <= sizes.threshold {
        sizes.large
    } else {
        sizes.small
    }
}

/// Render a plate onto a copy of `template`.
///
/// Elements that extend past the template edges are clipped.
pub fn render_plate(
    template: &DynamicImage,
    font: &FontRef<'_>,
    plate_text: &PlateText,
    qr: &DynamicImage,
    layout: &PlateLayout,
    sizes: &FontSizes,
) -> RgbaImage {
    let mut img = template.to_rgba8();

    let work_scale = PxScale::from(select_font_size(&plate_text.work, sizes));
    let name_scale = PxScale::from(select_font_size(&plate_text.name, sizes));
    debug!(
        work_size = work_scale.y,
        name_size = name_scale.y,
        "Selected plate font sizes"
    );

    let (x, y) = layout.work_origin;
    text::draw_text_line(&mut img, font, work_scale, x, y, &plate_text.work_line());
    let (x, y) = layout.name_origin;
    text::draw_text_line(&mut img, font, name_scale, x, y, &plate_text.name_line());

    paste_qr(&mut img, qr, layout);

    let (cx, cy) = layout.caption_origin;
    text::draw_lines(
        &mut img,
        font,
        PxScale::from(sizes.caption),
        cx,
        cy,
        layout.caption_line_height,
        &plate_text.caption,
    );

    img
}

/// Scale the QR image by `layout.qr_scale` and paste it at `layout.qr_origin`.
pub fn paste_qr(img: &mut RgbaImage, qr: &DynamicImage, layout: &PlateLayout) {
    let qr = compose::scale_nearest(qr, layout.qr_scale);
    let (qx, qy) = layout.qr_origin;
    debug!(x = qx, y = qy, size = qr.width(), "Pasting QR code");
    compose::overlay(img, &qr, qx, qy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::{QrStyle, generate_qr};
    use image::Rgba;

    const GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn short_text_uses_large_font() {
        let sizes = FontSizes::default();
        assert_eq!(select_font_size("ロボット", &sizes), 200.0);
        assert_eq!(select_font_size("12345678", &sizes), 200.0);
        assert_eq!(select_font_size("", &sizes), 200.0);
    }

    #[test]
    fn long_text_uses_small_font() {
        let sizes = FontSizes::default();
        assert_eq!(select_font_size("123456789", &sizes), 190.0);
        assert_eq!(select_font_size("からくり人形の自動演奏", &sizes), 190.0);
    }

    #[test]
    fn threshold_counts_characters_not_bytes() {
        let sizes = FontSizes::default();
        // 8 characters, 24 bytes in UTF-8
        assert_eq!(select_font_size("あいうえおかきく", &sizes), sizes.large);
    }

    #[test]
    fn sizes_derive_from_base() {
        let sizes = FontSizes::from_base(120.0);
        assert_eq!(sizes.large, 120.0);
        assert_eq!(sizes.small, 110.0);
        assert_eq!(sizes.caption, 80.0);
        assert_eq!(sizes.threshold, 8);
    }

    #[test]
    fn small_size_stays_positive() {
        assert_eq!(FontSizes::from_base(8.0).small, 1.0);
        assert_eq!(FontSizes::from_base(10.0).small, 1.0);
        assert_eq!(FontSizes::from_base(20.0).small, 10.0);
    }

    #[test]
    fn qr_is_scaled_and_pasted_at_origin() {
        let layout = PlateLayout::default();
        let qr = generate_qr("test", &QrStyle::default()).unwrap();
        assert_eq!(qr.width(), 348);
        let mut img = RgbaImage::from_pixel(2400, 1500, GRAY);

        paste_qr(&mut img, &DynamicImage::ImageLuma8(qr), &layout);

        // 348 * 1.2 = 417 px square starting at (1900, 1000)
        assert_eq!(img.get_pixel(1900, 1000), &WHITE);
        assert_eq!(img.get_pixel(2316, 1416), &WHITE);
        assert_eq!(img.get_pixel(1899, 1000), &GRAY);
        assert_eq!(img.get_pixel(1900, 999), &GRAY);
        assert_eq!(img.get_pixel(2317, 1000), &GRAY);
        assert_eq!(img.get_pixel(1900, 1417), &GRAY);

        // centre of the top-left finder pattern
        assert_eq!(img.get_pixel(1900 + 110, 1000 + 110), &DARK);

        let region = (1900..2317).flat_map(|x| (1000..1417).map(move |y| (x, y)));
        let dark = region.filter(|&(x, y)| img.get_pixel(x, y) == &DARK).count();
        assert!(dark > 0);
        assert!(dark < 417 * 417);
    }

    #[test]
    fn qr_past_template_edge_is_clipped() {
        let layout = PlateLayout::default();
        let qr = generate_qr("test", &QrStyle::default()).unwrap();
        let mut img = RgbaImage::from_pixel(2000, 1100, GRAY);

        paste_qr(&mut img, &DynamicImage::ImageLuma8(qr), &layout);

        assert_eq!(img.dimensions(), (2000, 1100));
        assert_eq!(img.get_pixel(1949, 1049), &WHITE);
        assert_eq!(img.get_pixel(1999, 1099), &DARK);
        assert_eq!(img.get_pixel(1899, 1099), &GRAY);
    }

    #[test]
    fn plate_text_lines_carry_labels() {
        let text = PlateText {
            work: "ロボット".into(),
            name: "山田太郎".into(),
            caption: vec![],
        };
        assert_eq!(text.work_line(), "作品名：ロボット");
        assert_eq!(text.name_line(), "出展者名：山田太郎");
    }
}
