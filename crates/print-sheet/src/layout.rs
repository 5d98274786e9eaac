//! Page geometry for two-up plate sheets.
//!
//! All coordinates are PDF points (1/72 inch) with the origin at the
//! bottom-left corner of the page.

/// Millimetres to points.
fn mm(v: f32) -> f32 {
    v * 72.0 / 25.4
}

/// Physical page size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// ISO A4 portrait.
    pub fn a4() -> Self {
        Self {
            width: mm(210.0),
            height: mm(297.0),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::a4()
    }
}

/// Sheet configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub page: PageSize,
    /// Blank margin around the printable area, in points.
    pub margin: f32,
    /// Raster resolution at which plates are embedded.
    pub dpi: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            page: PageSize::a4(),
            margin: 18.0,
            dpi: 150,
        }
    }
}

impl SheetLayout {
    /// Pixel size of a slot at the sheet resolution.
    pub fn slot_pixels(&self, slot: &SlotRect) -> (u32, u32) {
        let px = |pt: f32| ((pt / 72.0) * self.dpi as f32).floor().max(1.0) as u32;
        (px(slot.width), px(slot.height))
    }
}

/// Axis-aligned rectangle in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Top and bottom halves of the printable area, in that order.
pub fn page_slots(layout: &SheetLayout) -> [SlotRect; 2] {
    let width = (layout.page.width - layout.margin * 2.0).max(0.0);
    let height = ((layout.page.height - layout.margin * 2.0) / 2.0).max(0.0);
    let bottom = SlotRect {
        x: layout.margin,
        y: layout.margin,
        width,
        height,
    };
    let top = SlotRect {
        y: layout.margin + height,
        ..bottom
    };
    [top, bottom]
}

/// Fit an image of the given pixel size into `slot`, keeping its aspect
/// ratio and centering it.
pub fn fit_into(width_px: u32, height_px: u32, slot: &SlotRect) -> SlotRect {
    if width_px == 0 || height_px == 0 {
        return SlotRect {
            x: slot.x + slot.width / 2.0,
            y: slot.y + slot.height / 2.0,
            width: 0.0,
            height: 0.0,
        };
    }
    let scale = (slot.width / width_px as f32).min(slot.height / height_px as f32);
    let width = width_px as f32 * scale;
    let height = height_px as f32 * scale;
    SlotRect {
        x: slot.x + (slot.width - width) / 2.0,
        y: slot.y + (slot.height - height) / 2.0,
        width,
        height,
    }
}

/// Group items into pages of two; an odd last item gets a page of its own.
pub fn group_pages<T>(items: &[T]) -> Vec<&[T]> {
    items.chunks(2).collect()
}
