//! Batch pipeline: roster rows → plates → print sheet.
//!
//! Rows are processed one at a time. A failure in one row is logged and
//! counted; only problems with shared inputs abort the run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ab_glyph::FontRef;
use anyhow::Context;
use image::DynamicImage;
use plate_engine::{PlateError, PlateText, generate_qr, render_plate};
use print_sheet::{SheetError, SheetSummary};
use roster::{Entry, RosterError};
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;

/// Files produced for one roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateOutput {
    pub plate_path: PathBuf,
    pub qr_path: PathBuf,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub rendered: usize,
    pub failed: usize,
    pub sheet: Option<SheetSummary>,
}

/// Errors confined to a single entry.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Plate(#[from] PlateError),
}

/// Inputs shared by every entry of a run.
pub struct Assets {
    pub template: DynamicImage,
    pub font_data: Vec<u8>,
}

impl Assets {
    /// Load the template image and the raw font file.
    pub fn load(config: &AppConfig) -> anyhow::Result<Self> {
        let template = image::open(&config.template).with_context(|| {
            format!("failed to open template image {}", config.template.display())
        })?;
        let font_data = std::fs::read(&config.font)
            .with_context(|| format!("failed to read font {}", config.font.display()))?;
        debug!(
            width = template.width(),
            height = template.height(),
            font_bytes = font_data.len(),
            "Assets loaded"
        );
        Ok(Self {
            template,
            font_data,
        })
    }
}

/// Run the whole batch described by `config`.
pub fn run(config: &AppConfig) -> anyhow::Result<RunSummary> {
    let rows = roster::read_roster(&config.input, &config.columns)
        .with_context(|| format!("failed to read roster {}", config.input.display()))?;
    let assets = Assets::load(config)?;
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    info!(rows = rows.len(), "Generating name plates");

    let mut plates = Vec::new();
    let mut seen = HashSet::new();
    let mut failed = 0usize;

    for row in &rows {
        let entry = match &row.result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(line = row.line, "Skipping roster row: {e}");
                failed += 1;
                continue;
            }
        };

        match render_entry(entry, &assets, config) {
            Ok(output) => {
                info!(
                    line = row.line,
                    name = %entry.name,
                    path = %output.plate_path.display(),
                    "Plate generated"
                );
                if !seen.insert(output.plate_path.clone()) {
                    warn!(
                        line = row.line,
                        name = %entry.name,
                        "Output name collides with an earlier entry; plate overwritten"
                    );
                    continue;
                }
                plates.push(output.plate_path);
            }
            Err(e) => {
                error!(line = row.line, name = %entry.name, "Plate generation failed: {e}");
                failed += 1;
            }
        }
    }

    let rendered = rows.len() - failed;
    let sheet = if config.sheet_enabled {
        write_print_sheet(&plates, &config.sheet_path(), config)?
    } else {
        None
    };

    Ok(RunSummary {
        total: rows.len(),
        rendered,
        failed,
        sheet,
    })
}

/// Render and save the plate and QR images for one entry.
pub fn render_entry(
    entry: &Entry,
    assets: &Assets,
    config: &AppConfig,
) -> Result<PlateOutput, EntryError> {
    let font = FontRef::try_from_slice(&assets.font_data).map_err(|_| PlateError::InvalidFont)?;

    let intent = config.share.intent_url(entry)?;
    debug!(name = %entry.name, intent = %intent, "Share intent built");

    let qr = generate_qr(&intent, &config.qr)?;
    let qr_path = config.output_dir.join(roster::qr_file_name(&entry.name));
    qr.save(&qr_path).map_err(PlateError::from)?;

    let plate_text = PlateText {
        work: entry.work.clone(),
        name: entry.name.clone(),
        caption: config.share.caption_lines(entry),
    };
    let plate = render_plate(
        &assets.template,
        &font,
        &plate_text,
        &DynamicImage::ImageLuma8(qr),
        &config.layout,
        &config.font_sizes,
    );
    let plate_path = config.output_dir.join(roster::plate_file_name(&entry.name));
    plate.save(&plate_path).map_err(PlateError::from)?;

    Ok(PlateOutput {
        plate_path,
        qr_path,
    })
}

fn write_print_sheet(
    plates: &[PathBuf],
    path: &Path,
    config: &AppConfig,
) -> anyhow::Result<Option<SheetSummary>> {
    match print_sheet::write_sheet(plates, path, &config.sheet) {
        Ok(summary) => Ok(Some(summary)),
        Err(SheetError::Empty) => {
            warn!("No plates available; print sheet not written");
            Ok(None)
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("failed to write print sheet {}", path.display()))),
    }
}
