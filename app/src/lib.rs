//! Batch name plate generator.
//!
//! Reads the exhibitor roster, renders one plate and one QR image per
//! entry, and packs the plates into a print sheet.

pub mod bootstrap;
pub mod config;
pub mod pipeline;

pub use config::AppConfig;
pub use pipeline::{PlateOutput, RunSummary, run};
