use std::io::Read;
use std::path::Path;

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{MovieRecord, MovieTable, RawMovieRow, REQUIRED_COLUMNS};
use super::normalize::{normalize_budget, normalize_year};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a dataset could not be loaded. All of these are fatal to the load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited data")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("expected a top-level JSON array of objects")]
    NotRecordArray,

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: column '{column}' has invalid number '{value}'")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and normalise a movie table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – comma-separated with a header row
/// * `.tsv`  – tab-separated with a header row
/// * `.json` – `[{ "name": ..., "genre": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<MovieTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let open = || {
        std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })
    };

    let table = match ext.as_str() {
        "csv" => load_delimited(open()?, b',')?,
        "tsv" => load_delimited(open()?, b'\t')?,
        "json" => load_json(open()?)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    log::info!(
        "Loaded {} movies across {} genres from {}",
        table.len(),
        table.genres().len(),
        path.display()
    );
    for (a, b) in table.suspicious_genres() {
        log::warn!("Genres {a:?} and {b:?} differ only by case or whitespace; filtering treats them separately");
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Delimited loader
// ---------------------------------------------------------------------------

/// Header row with column names; the required columns may appear in any
/// order and extra columns are ignored.
pub fn load_delimited<R: Read>(reader: R, delimiter: u8) -> Result<MovieTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    check_schema(|col| headers.iter().any(|h| h == col))?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawMovieRow>().enumerate() {
        let raw = result?;
        // Header is line 1.
        records.push(clean_row(raw, row_no + 2)?);
    }

    Ok(MovieTable::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the shape `df.to_json(orient='records')` writes.
/// Cells may be strings, numbers or null.
fn load_json<R: Read>(reader: R) -> Result<MovieTable, LoadError> {
    let root: JsonValue = serde_json::from_reader(reader)?;
    let rows = root.as_array().ok_or(LoadError::NotRecordArray)?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or(LoadError::NotRecordArray)?;
        check_schema(|col| obj.contains_key(col))?;

        let cell = |col: &str| obj.get(col).map(json_cell_text).unwrap_or_default();
        let raw = RawMovieRow {
            name: cell("name"),
            genre: cell("genre"),
            year: cell("year"),
            rating: cell("rating"),
            budget: cell("budget"),
            box_office: cell("box_office"),
        };
        let mut record = clean_row(raw, i + 1)?;
        // Go through the number itself: its text form may use an exponent,
        // which the budget sanitiser would mangle.
        if let Some(JsonValue::Number(n)) = obj.get("budget") {
            record.budget = json_budget(n);
        }
        records.push(record);
    }

    Ok(MovieTable::from_records(records))
}

fn json_budget(n: &serde_json::Number) -> f64 {
    match n.as_f64() {
        Some(v) if v.is_finite() => v.abs(),
        _ => 0.0,
    }
}

fn json_cell_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Row validation
// ---------------------------------------------------------------------------

fn check_schema(has_column: impl Fn(&str) -> bool) -> Result<(), LoadError> {
    match REQUIRED_COLUMNS.iter().copied().find(|col| !has_column(col)) {
        Some(col) => Err(LoadError::MissingColumn(col)),
        None => Ok(()),
    }
}

fn clean_row(raw: RawMovieRow, line: usize) -> Result<MovieRecord, LoadError> {
    Ok(MovieRecord {
        year: normalize_year(&raw.year),
        budget: normalize_budget(&raw.budget),
        rating: parse_strict(&raw.rating, line, "rating")?,
        box_office: parse_strict(&raw.box_office, line, "box_office")?,
        name: raw.name,
        genre: raw.genre,
    })
}

/// Columns that are expected to be clean already must hold a finite number.
/// An empty cell is missing (NaN) and keeps its row.
fn parse_strict(raw: &str, line: usize, column: &'static str) -> Result<f64, LoadError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LoadError::InvalidNumber {
            line,
            column,
            value: raw.to_string(),
        }),
    }
}
