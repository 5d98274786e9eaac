//! Name plate rendering.
//!
//! Provides QR code generation, text measurement and drawing, image
//! overlay, and the plate layout that combines them over a template.

pub mod compose;
pub mod plate;
pub mod qr;
pub mod text;

// Re-exports for convenience
pub use plate::{FontSizes, PlateLayout, PlateText, paste_qr, render_plate, select_font_size};
pub use qr::{QrStyle, generate_qr};

/// Errors that can occur while rendering a single plate.
#[derive(Debug, thiserror::Error)]
pub enum PlateError {
    #[error("Failed to parse font data (TTF/OTF)")]
    InvalidFont,

    #[error("QR encode error: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for plate operations.
pub type Result<T> = std::result::Result<T, PlateError>;
