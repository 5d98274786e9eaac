//! PDF output for plate sheets.

use std::path::{Path, PathBuf};

use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, TextStr};
use tracing::{debug, info, warn};

use crate::layout::{SheetLayout, fit_into, group_pages, page_slots};
use crate::resize::resize_to_fit;
use crate::{Result, SheetError};

const COMPRESSION_LEVEL: u8 = 6;

/// Outcome of writing a print sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub path: PathBuf,
    pub pages: usize,
    pub images: usize,
}

/// A plate decoded, downscaled and compressed for embedding.
struct EmbeddedImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

/// Write plates two per page into a PDF at `out_path`.
///
/// Plates that cannot be decoded are skipped with a warning before pairing.
/// Returns [`SheetError::Empty`] without writing anything when no plate loads.
pub fn write_sheet<P: AsRef<Path>>(
    plates: &[P],
    out_path: impl AsRef<Path>,
    layout: &SheetLayout,
) -> Result<SheetSummary> {
    let out_path = out_path.as_ref();
    let [slot, _] = page_slots(layout);
    let (max_w, max_h) = layout.slot_pixels(&slot);

    let mut images = Vec::with_capacity(plates.len());
    for path in plates {
        let path = path.as_ref();
        match load_plate(path, max_w, max_h) {
            Ok(img) => images.push(img),
            Err(e) => warn!(path = %path.display(), "Skipping plate on print sheet: {e}"),
        }
    }

    if images.is_empty() {
        return Err(SheetError::Empty);
    }

    let (bytes, pages) = build_pdf(&images, layout);
    std::fs::write(out_path, bytes)?;

    info!(
        path = %out_path.display(),
        pages,
        images = images.len(),
        "Print sheet written"
    );

    Ok(SheetSummary {
        path: out_path.to_path_buf(),
        pages,
        images: images.len(),
    })
}

fn load_plate(path: &Path, max_w: u32, max_h: u32) -> Result<EmbeddedImage> {
    let img = image::open(path)?;
    let img = resize_to_fit(&img, max_w, max_h);
    let rgb = img.to_rgb8();
    debug!(
        path = %path.display(),
        width = rgb.width(),
        height = rgb.height(),
        "Plate prepared for print sheet"
    );
    Ok(EmbeddedImage {
        data: compress_to_vec_zlib(rgb.as_raw(), COMPRESSION_LEVEL),
        width: rgb.width(),
        height: rgb.height(),
    })
}

fn build_pdf(images: &[EmbeddedImage], layout: &SheetLayout) -> (Vec<u8>, usize) {
    let slots = page_slots(layout);
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let info_id = alloc.bump();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);

    let pages = group_pages(images);
    let mut page_ids = Vec::with_capacity(pages.len());

    for plates in &pages {
        let page_id = alloc.bump();
        let content_id = alloc.bump();
        page_ids.push(page_id);

        let mut content = Content::new();
        let mut x_object_refs = Vec::with_capacity(plates.len());

        for (i, (plate, slot)) in plates.iter().zip(slots.iter()).enumerate() {
            let image_id = alloc.bump();
            let name = format!("Im{i}");

            let mut xobj = pdf.image_xobject(image_id, &plate.data);
            xobj.filter(Filter::FlateDecode);
            xobj.width(plate.width as i32);
            xobj.height(plate.height as i32);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
            xobj.finish();

            let rect = fit_into(plate.width, plate.height, slot);
            content.save_state();
            content.transform([rect.width, 0.0, 0.0, rect.height, rect.x, rect.y]);
            content.x_object(Name(name.as_bytes()));
            content.restore_state();

            x_object_refs.push((name, image_id));
        }

        pdf.stream(content_id, &content.finish());

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, layout.page.width, layout.page.height));
        page.parent(page_tree_id);
        page.contents(content_id);
        {
            let mut resources = page.resources();
            let mut x_objects = resources.x_objects();
            for (name, id) in &x_object_refs {
                x_objects.pair(Name(name.as_bytes()), *id);
            }
        }
        page.finish();
    }

    let page_count = page_ids.len();
    pdf.pages(page_tree_id)
        .kids(page_ids)
        .count(page_count as i32);
    pdf.document_info(info_id)
        .title(TextStr("Name plates"))
        .producer(TextStr("name-plates"));

    (pdf.finish(), page_count)
}
