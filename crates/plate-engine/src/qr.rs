//! QR code generation for share-intent links.

use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};
use tracing::debug;

use crate::Result;

/// Module size and quiet zone of a generated QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrStyle {
    /// Pixels per QR module.
    pub box_size: u32,
    /// Width of the white quiet zone, in modules.
    pub border: u32,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            box_size: 12,
            border: 4,
        }
    }
}

impl QrStyle {
    /// Side length in pixels of a code with `modules` modules per side.
    pub fn image_side(&self, modules: u32) -> u32 {
        (modules + self.border * 2) * self.box_size.max(1)
    }
}

/// Generate a black-on-white QR code image for `data`.
///
/// Uses error correction level L and the smallest version that fits.
pub fn generate_qr(data: &str, style: &QrStyle) -> Result<GrayImage> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let scale = style.box_size.max(1);
    let offset = style.border * scale;
    let img_size = style.image_side(module_count);

    debug!(module_count, img_size, "Generating QR code");

    let mut img = GrayImage::from_pixel(img_size, img_size, Luma([255u8]));

    for (i, color) in modules.iter().enumerate() {
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;

        if *color == Color::Dark {
            for dx in 0..scale {
                for dy in 0..scale {
                    img.put_pixel(offset + x * scale + dx, offset + y * scale + dy, Luma([0u8]));
                }
            }
        }
    }

    Ok(img)
}
