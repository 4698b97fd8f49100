//! CSV loader for property records.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does **not** matter. Header
//! names are the form's input names and are case-sensitive.
//!
//! | Column          | Required | Notes                                          |
//! |-----------------|----------|------------------------------------------------|
//! | `bedrooms`      | yes      | Kept as text; validated when estimated         |
//! | `bathrooms`     | yes      |                                                |
//! | `squareFootage` | yes      |                                                |
//! | `yearBuilt`     | yes      |                                                |
//! | `lotSize`       | yes      |                                                |
//! | `garageSpaces`  | yes      |                                                |
//! | `neighborhood`  | yes      |                                                |
//! | `condition`     | no       | `poor`, `fair`, `good` or `excellent`; empty cell or missing column means `good` |
//!
//! Cells stay text so a row can be loaded even when a value would fail the
//! form constraints; the caller decides whether to validate.
//!
//! ### Example
//!
//! ```csv
//! bedrooms,bathrooms,squareFootage,yearBuilt,lotSize,garageSpaces,neighborhood,condition
//! 3,2,2000,1995,8000,2,Suburbs,good
//! 4,2.5,2400,2010,9000,2,Downtown,excellent
//! ```

use std::path::{Path, PathBuf};

use price_core::{Condition, PropertyInput};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    bedrooms: String,
    bathrooms: String,
    square_footage: String,
    year_built: String,
    lot_size: String,
    garage_spaces: String,
    neighborhood: String,
    #[serde(default)]
    condition: Option<String>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `condition` cell held a value that is not one of the four options.
    /// `row` is 1-based (header = row 0).
    #[error("unrecognised condition '{value}' on row {row}")]
    InvalidCondition { value: String, row: usize },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a PropertyInput.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<PropertyInput, CsvLoadError> {
    let condition = match row.condition.as_deref().map(str::trim) {
        None | Some("") => Condition::default(),
        Some(value) => Condition::parse(value).map_err(|_| CsvLoadError::InvalidCondition {
            value: value.to_string(),
            row: row_number,
        })?,
    };

    Ok(PropertyInput {
        bedrooms: row.bedrooms,
        bathrooms: row.bathrooms,
        square_footage: row.square_footage,
        year_built: row.year_built,
        lot_size: row.lot_size,
        garage_spaces: row.garage_spaces,
        neighborhood: row.neighborhood,
        condition,
    })
}

/// Parse CSV text and return one PropertyInput per row, in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid or a
///   required column is missing.
/// * [CsvLoadError::InvalidCondition] – if any row names an unknown condition.
pub fn load_from_str(input: &str) -> Result<Vec<PropertyInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<PropertyInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
