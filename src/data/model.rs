use std::collections::HashSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// RawMovieRow – one row exactly as it appears in the source file
// ---------------------------------------------------------------------------

/// Column names every source file must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = ["name", "genre", "year", "rating", "budget", "box_office"];

/// Untyped row. Every cell is kept as text until the loader validates it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMovieRow {
    pub name: String,
    pub genre: String,
    pub year: String,
    pub rating: String,
    pub budget: String,
    pub box_office: String,
}

// ---------------------------------------------------------------------------
// MovieRecord – one cleaned row
// ---------------------------------------------------------------------------

/// A single film after normalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    /// Display name, not necessarily unique.
    pub name: String,
    /// Categorical genre label, compared by exact match.
    pub genre: String,
    /// Release year. `None` when the raw cell could not be parsed.
    pub year: Option<f64>,
    /// NaN when the source cell was empty; such a record never passes a
    /// rating threshold.
    pub rating: f64,
    /// Always finite and non-negative.
    pub budget: f64,
    /// NaN when the source cell was empty.
    pub box_office: f64,
}

// ---------------------------------------------------------------------------
// MovieTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded and normalised dataset. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    records: Vec<MovieRecord>,
    /// Distinct genres in order of first appearance.
    genres: Vec<String>,
}

impl MovieTable {
    /// Build the table and its genre index from cleaned records.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut genres = Vec::new();
        for rec in &records {
            if seen.insert(rec.genre.as_str()) {
                genres.push(rec.genre.clone());
            }
        }
        MovieTable { records, genres }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Options for the genre selector.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest known year. Rows with a missing year are skipped.
    pub fn year_span(&self) -> Option<(f64, f64)> {
        self.records
            .iter()
            .filter_map(|r| r.year)
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }

    /// Genre labels that only differ by case or surrounding whitespace.
    ///
    /// The exact-match filter treats these as unrelated genres; they are
    /// reported, not merged.
    pub fn suspicious_genres(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (i, a) in self.genres.iter().enumerate() {
            let key_a = a.trim().to_lowercase();
            for b in &self.genres[i + 1..] {
                if b.trim().to_lowercase() == key_a {
                    pairs.push((a.clone(), b.clone()));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
pub(crate) fn movie(name: &str, genre: &str, rating: f64) -> MovieRecord {
    MovieRecord {
        name: name.to_string(),
        genre: genre.to_string(),
        year: Some(2000.0),
        rating,
        budget: 1_000_000.0,
        box_office: 5_000_000.0,
    }
}
