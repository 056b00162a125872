//! Store catalog loading from CSV.
//!
//! The catalog is a header row followed by one store per row, columns in
//! [`StoreRecord`] field order. A single bad row fails the whole load; rows
//! are never skipped, and source order is preserved because it decides ties
//! in the nearest-store search.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::store::StoreRecord;

/// Header columns, in order, named after the [`StoreRecord`] fields.
pub const CATALOG_COLUMNS: [&str; 9] = [
    "name",
    "location",
    "address",
    "city",
    "state",
    "zip_code",
    "latitude",
    "longitude",
    "county",
];

/// Title-case labels used by exported store catalogs; accepted in place of
/// [`CATALOG_COLUMNS`].
pub const CATALOG_LABELS: [&str; 9] = [
    "Store Name",
    "Store Location",
    "Address",
    "City",
    "State",
    "Zip Code",
    "Latitude",
    "Longitude",
    "County",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open store catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read store catalog: {0}")]
    Read(#[from] csv::Error),

    #[error("malformed store catalog row at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

/// Load the store catalog from a CSV file on disk.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be opened, or any error
/// from [`load_catalog_from_reader`].
pub fn load_catalog(path: &Path) -> Result<Vec<StoreRecord>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let stores = load_catalog_from_reader(file)?;
    tracing::debug!(path = %path.display(), stores = stores.len(), "loaded store catalog");
    Ok(stores)
}

/// Load the store catalog from any CSV source.
///
/// # Errors
///
/// - [`CatalogError::MalformedRecord`] if the header does not have nine
///   columns named as in [`CATALOG_COLUMNS`] or [`CATALOG_LABELS`], a row has the wrong number of columns, a
///   latitude/longitude does not parse, or a coordinate is out of range.
/// - [`CatalogError::Read`] on an underlying read failure.
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Vec<StoreRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    check_header(csv_reader.headers()?)?;

    let mut stores = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);
        stores.push(parse_row(&row, line)?);
    }
    Ok(stores)
}

fn check_header(header: &csv::StringRecord) -> Result<(), CatalogError> {
    let found = header.iter().collect::<Vec<_>>().join(",");
    if header.len() != CATALOG_COLUMNS.len() {
        return Err(CatalogError::MalformedRecord {
            line: 1,
            reason: format!(
                "header must have {} columns, found {} in \"{found}\"",
                CATALOG_COLUMNS.len(),
                header.len()
            ),
        });
    }

    let column_matches = header
        .iter()
        .zip(CATALOG_COLUMNS.iter().zip(CATALOG_LABELS.iter()))
        .all(|(col, (field, label))| {
            col.eq_ignore_ascii_case(field) || col.eq_ignore_ascii_case(label)
        });
    if column_matches {
        return Ok(());
    }
    Err(CatalogError::MalformedRecord {
        line: 1,
        reason: format!(
            "header must be \"{}\" or \"{}\", found \"{found}\"",
            CATALOG_COLUMNS.join(","),
            CATALOG_LABELS.join(",")
        ),
    })
}

fn parse_row(row: &csv::StringRecord, line: u64) -> Result<StoreRecord, CatalogError> {
    if row.len() != CATALOG_COLUMNS.len() {
        return Err(CatalogError::MalformedRecord {
            line,
            reason: format!(
                "expected {} columns, found {}",
                CATALOG_COLUMNS.len(),
                row.len()
            ),
        });
    }

    let store: StoreRecord =
        row.deserialize(None)
            .map_err(|e| CatalogError::MalformedRecord {
                line,
                reason: e.to_string(),
            })?;

    store
        .coordinate()
        .map_err(|e| CatalogError::MalformedRecord {
            line,
            reason: e.to_string(),
        })?;

    Ok(store)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
