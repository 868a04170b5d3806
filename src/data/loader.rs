use std::path::{Path, PathBuf};

use crate::error::{JcError, Result};

use super::model::{MeasurementRow, MeasurementTable};

/// Suffix that marks a measurement file. Matched exactly, case-sensitive.
pub const MEASUREMENT_SUFFIX: &str = ".csv";

/// Cell texts treated as a missing value, matched exactly.
pub const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const POSITION: &str = "position";
const CURRENT: &str = "current";
const VOLTAGE: &str = "voltage";

// ---------------------------------------------------------------------------
// Directory listing
// ---------------------------------------------------------------------------

/// List the measurement files directly inside `dir`, sorted by file name.
///
/// Every entry whose name ends in `.csv` is returned, whatever its type, so
/// a directory named `x.csv` fails later when it is read. The scan is not
/// recursive. Names that are not valid UTF-8 are matched lossily.
pub fn list_measurement_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| JcError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| JcError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.ends_with(MEASUREMENT_SUFFIX) {
            log::debug!("Ignoring {name}");
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!("Found {} measurement file(s) in {}", files.len(), dir.display());
    Ok(files)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming at least `position`, `current` and
/// `voltage`. Column order is free and extra columns are ignored.
/// Empty cells, cells missing from a short row, and the usual NA markers
/// (see [`NA_TOKENS`]) read as NaN. A row longer than the header and any
/// other non-numeric text are errors.
pub fn load_table(path: &Path) -> Result<MeasurementTable> {
    let csv_err = |source| JcError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Fields)
        .from_path(path)
        .map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| JcError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let position_idx = column(POSITION)?;
    let current_idx = column(CURRENT)?;
    let voltage_idx = column(VOLTAGE)?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(csv_err)?;
        let row_no = i + 1;
        if record.len() > headers.len() {
            return Err(JcError::TooManyFields {
                path: path.to_path_buf(),
                row: row_no,
                expected: headers.len(),
                found: record.len(),
            });
        }
        let cell = |idx: usize, name: &'static str| {
            parse_cell(record.get(idx).unwrap_or(""), path, row_no, name)
        };

        rows.push(MeasurementRow {
            position: cell(position_idx, POSITION)?,
            current: cell(current_idx, CURRENT)?,
            voltage: cell(voltage_idx, VOLTAGE)?,
        });
    }

    log::debug!("Loaded {} row(s) from {}", rows.len(), path.display());
    Ok(MeasurementTable {
        source: path.to_path_buf(),
        rows,
    })
}

fn parse_cell(text: &str, path: &Path, row: usize, column: &'static str) -> Result<f64> {
    if text.is_empty() || NA_TOKENS.contains(&text) {
        return Ok(f64::NAN);
    }
    text.parse::<f64>().map_err(|_| JcError::InvalidNumber {
        path: path.to_path_buf(),
        row,
        column,
        value: text.to_string(),
    })
}
