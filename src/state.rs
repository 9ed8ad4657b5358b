use std::path::{Path, PathBuf};

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{FilterCriteria, filtered_indices};
use crate::data::loader::load_file;
use crate::data::model::{MovieRecord, MovieTable};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// File the current table was read from (or the last attempted one).
    pub source_path: PathBuf,

    /// Loaded table (None until a load succeeds). Replaced wholesale, never
    /// edited in place.
    pub table: Option<MovieTable>,

    /// Current genre selection and rating threshold.
    pub criteria: FilterCriteria,

    /// Indices of records passing `criteria` (cached).
    pub visible_indices: Vec<usize>,

    /// Genre colours shared by the scatter plot and the treemap.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            source_path: config.data_path.clone(),
            table: None,
            criteria: FilterCriteria::new(String::new(), config.default_min_rating),
            visible_indices: Vec::new(),
            color_map: ColorMap::default(),
            status_message: None,
            config,
        }
    }

    /// Load a file, replacing the current table on success. On failure the
    /// previous table (if any) stays and the error is reported.
    pub fn load(&mut self, path: &Path) {
        self.source_path = path.to_path_buf();
        match load_file(path) {
            Ok(table) => self.set_table(table),
            Err(e) => {
                let e = anyhow::Error::from(e);
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error loading {}: {e:#}", path.display()));
            }
        }
    }

    /// Reload the file the current table came from.
    pub fn reload(&mut self) {
        let path = self.source_path.clone();
        self.load(&path);
    }

    /// Ingest a newly loaded table and reset the controls.
    pub fn set_table(&mut self, table: MovieTable) {
        self.criteria = FilterCriteria::new(
            table.genres().first().cloned().unwrap_or_default(),
            self.config.default_min_rating,
        );
        self.color_map = ColorMap::new(table.genres());
        self.table = Some(table);
        self.status_message = None;
        self.refilter();
    }

    pub fn set_genre(&mut self, genre: String) {
        self.criteria.genre = genre;
        self.refilter();
    }

    pub fn set_min_rating(&mut self, rating: f64) {
        self.criteria.min_rating = self.config.clamp_rating(rating);
        self.refilter();
    }

    /// Recompute `visible_indices` after a control change.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.table {
            Some(table) => filtered_indices(table, &self.criteria),
            None => Vec::new(),
        };
        log::debug!(
            "genre={:?} min_rating={:.1} -> {} visible",
            self.criteria.genre,
            self.criteria.min_rating,
            self.visible_indices.len()
        );
    }

    /// The filtered view, borrowed from the table.
    pub fn visible_records(&self) -> Vec<&MovieRecord> {
        match &self.table {
            Some(table) => self
                .visible_indices
                .iter()
                .map(|&i| &table.records()[i])
                .collect(),
            None => Vec::new(),
        }
    }
}
