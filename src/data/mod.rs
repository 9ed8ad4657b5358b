/// Data layer: record types, loading, normalisation and filtering.
///
/// Architecture:
/// ```text
///  IMDB Top.csv / .tsv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawMovieRow, validate schema
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  year → Option<f64>, budget → f64 ≥ 0
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │MovieTable │  Vec<MovieRecord>, genre options
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  genre == G && rating >= R → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
