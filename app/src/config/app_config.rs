//! Runtime configuration: built-in defaults with environment overrides.

use std::path::PathBuf;

use anyhow::anyhow;
use plate_engine::{FontSizes, PlateLayout, QrStyle};
use print_sheet::SheetLayout;
use roster::{Columns, ShareTemplate};

use super::validation::validate_setting;

/// Runtime configuration for one batch run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub template: PathBuf,
    pub font: PathBuf,
    pub output_dir: PathBuf,
    pub sheet_enabled: bool,
    /// Print sheet file name, relative to `output_dir` unless absolute.
    pub sheet_file: PathBuf,
    pub columns: Columns,
    pub share: ShareTemplate,
    pub qr: QrStyle,
    pub layout: PlateLayout,
    pub font_sizes: FontSizes,
    pub sheet: SheetLayout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: "name_list.csv".into(),
            template: "name_plate_sample.png".into(),
            font: "fonts/KikaiChokokuJIS-Md.otf".into(),
            output_dir: "output".into(),
            sheet_enabled: true,
            sheet_file: "name_plates.pdf".into(),
            columns: Columns::default(),
            share: ShareTemplate::default(),
            qr: QrStyle::default(),
            layout: PlateLayout::default(),
            font_sizes: FontSizes::default(),
            sheet: SheetLayout::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set keys are validated first.
    pub fn load_from<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> anyhow::Result<Option<String>> {
            match lookup(key) {
                Some(value) => {
                    let value = value.trim().to_string();
                    validate_setting(key, &value).map_err(|e| anyhow!("invalid {key}: {e}"))?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        };

        let mut config = Self::default();

        if let Some(v) = g("NAME_PLATE_INPUT")? {
            config.input = v.into();
        }
        if let Some(v) = g("NAME_PLATE_TEMPLATE")? {
            config.template = v.into();
        }
        if let Some(v) = g("NAME_PLATE_FONT")? {
            config.font = v.into();
        }
        if let Some(v) = g("NAME_PLATE_OUTPUT_DIR")? {
            config.output_dir = v.into();
        }
        if let Some(v) = g("NAME_PLATE_SHEET_ENABLED")? {
            config.sheet_enabled = v == "true";
        }
        if let Some(v) = g("NAME_PLATE_SHEET_FILE")? {
            config.sheet_file = v.into();
        }
        if let Some(v) = g("NAME_PLATE_SHEET_DPI")? {
            config.sheet.dpi = v.parse()?;
        }
        if let Some(v) = g("NAME_PLATE_HASHTAG")? {
            config.share.hashtag = v;
        }
        if let Some(v) = g("NAME_PLATE_SHARE_ENDPOINT")? {
            config.share.endpoint = v;
        }
        if let Some(v) = g("NAME_PLATE_QR_BOX_SIZE")? {
            config.qr.box_size = v.parse()?;
        }
        if let Some(v) = g("NAME_PLATE_QR_BORDER")? {
            config.qr.border = v.parse()?;
        }
        if let Some(v) = g("NAME_PLATE_QR_SCALE")? {
            config.layout.qr_scale = v.parse()?;
        }
        if let Some(v) = g("NAME_PLATE_FONT_SIZE")? {
            config.font_sizes = FontSizes::from_base(v.parse()?);
        }
        if let Some(v) = g("NAME_PLATE_COLUMN_NAME")? {
            config.columns.name = v;
        }
        if let Some(v) = g("NAME_PLATE_COLUMN_WORK")? {
            config.columns.work = v;
        }
        if let Some(v) = g("NAME_PLATE_COLUMN_URL")? {
            config.columns.social_url = v;
        }

        Ok(config)
    }

    /// Full path of the print sheet.
    pub fn sheet_path(&self) -> PathBuf {
        self.output_dir.join(&self.sheet_file)
    }
}
