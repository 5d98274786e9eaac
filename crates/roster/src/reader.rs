//! Roster CSV reader.
//!
//! The roster is a UTF-8 CSV file with a header row. Columns are located by
//! header name, so their order does not matter and extra columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::{Entry, Result, RosterError, RowError};

const BOM: char = '\u{feff}';

/// Header names of the roster columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub name: String,
    pub work: String,
    pub social_url: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            name: "name".into(),
            work: "作品".into(),
            social_url: "x".into(),
        }
    }
}

/// One data row of the roster, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    /// 1-based line number in the source file.
    pub line: u64,
    pub result: std::result::Result<Entry, RowError>,
}

/// Resolved column positions within a record.
struct ColumnIndex {
    name: usize,
    work: usize,
    social_url: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &Columns) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches(BOM).trim() == column)
                .ok_or_else(|| RosterError::MissingColumn {
                    column: column.to_string(),
                })
        };
        Ok(Self {
            name: find(&columns.name)?,
            work: find(&columns.work)?,
            social_url: find(&columns.social_url)?,
        })
    }
}

/// Read the roster file at `path`.
pub fn read_roster(path: impl AsRef<Path>, columns: &Columns) -> Result<Vec<RosterRow>> {
    let file = File::open(path.as_ref())?;
    parse_roster(file, columns)
}

/// Parse roster CSV data from any reader.
///
/// Fails as a whole when a configured column is missing from the header.
/// Rows with an empty name or work are returned as row errors.
pub fn parse_roster<R: Read>(reader: R, columns: &Columns) -> Result<Vec<RosterRow>> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let index = ColumnIndex::resolve(rdr.headers()?, columns)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(RosterRow {
            line,
            result: entry_from_record(&record, &index, columns),
        });
    }

    debug!(rows = rows.len(), "Roster parsed");
    Ok(rows)
}

fn entry_from_record(
    record: &StringRecord,
    index: &ColumnIndex,
    columns: &Columns,
) -> std::result::Result<Entry, RowError> {
    let field = |i: usize| record.get(i).unwrap_or_default().trim();
    let required = |i: usize, column: &str| {
        let value = field(i);
        if value.is_empty() {
            Err(RowError::EmptyField {
                column: column.to_string(),
            })
        } else {
            Ok(value)
        }
    };

    let name = required(index.name, &columns.name)?;
    let work = required(index.work, &columns.work)?;
    Ok(Entry::new(name, work, Some(field(index.social_url))))
}
