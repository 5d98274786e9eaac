//! Name plate batch generator.
//!
//! Renders a plate per roster row, then writes the print sheet.

use name_plates_lib::bootstrap;
use name_plates_lib::{AppConfig, pipeline};

fn main() -> anyhow::Result<()> {
    bootstrap::init_tracing();
    bootstrap::load_dotenv();

    let config = AppConfig::load()?;
    tracing::info!(
        input = %config.input.display(),
        output = %config.output_dir.display(),
        "Starting name plate generation"
    );

    let summary = pipeline::run(&config)?;

    tracing::info!(
        total = summary.total,
        rendered = summary.rendered,
        failed = summary.failed,
        "All name plates processed"
    );
    if let Some(sheet) = &summary.sheet {
        tracing::info!(path = %sheet.path.display(), pages = sheet.pages, "Print sheet ready");
    }
    Ok(())
}
