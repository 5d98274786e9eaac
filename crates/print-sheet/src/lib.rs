//! Print sheet generation.
//!
//! Packs rendered plates two per page (top half, bottom half) into a PDF
//! suitable for printing.

pub mod layout;
pub mod pdf;
pub mod resize;

// Re-exports for convenience
pub use layout::{PageSize, SheetLayout, SlotRect, fit_into, group_pages, page_slots};
pub use pdf::{SheetSummary, write_sheet};
pub use resize::resize_to_fit;

/// Errors that can occur while building a print sheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("No plate images could be loaded for the print sheet")]
    Empty,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for print sheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;
