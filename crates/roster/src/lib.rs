//! Exhibitor roster handling.
//!
//! Reads the roster CSV into [`Entry`] values, builds the share-intent URL
//! and caption for each entry, and derives filesystem-safe output names.

pub mod reader;
pub mod sanitize;
pub mod share;

// Re-exports for convenience
pub use reader::{Columns, RosterRow, parse_roster, read_roster};
pub use sanitize::{plate_file_name, qr_file_name, sanitize_filename};
pub use share::{ShareTemplate, is_placeholder_url};

/// One roster record: an exhibitor and their work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub work: String,
    /// Social profile URL. `None` when the cell was left empty.
    pub social_url: Option<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>, work: impl Into<String>, social_url: Option<&str>) -> Self {
        Self {
            name: name.into(),
            work: work.into(),
            social_url: social_url
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    /// The social URL, unless it is missing or the bare placeholder.
    pub fn shared_url(&self) -> Option<&str> {
        self.social_url
            .as_deref()
            .filter(|url| !is_placeholder_url(url))
    }
}

/// Errors that abort reading or processing the whole roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed input: missing column '{column}'")]
    MissingColumn { column: String },

    #[error("Invalid share endpoint: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Errors confined to a single roster row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("Empty '{column}' field")]
    EmptyField { column: String },
}

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
