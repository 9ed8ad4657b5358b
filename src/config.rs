use std::ops::RangeInclusive;
use std::path::PathBuf;

// --- Constants ---

/// Dataset read at startup, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "IMDB Top.csv";

pub const APP_TITLE: &str = "IMDb Top Movies Analysis";

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;
pub const DEFAULT_MIN_RATING: f64 = 5.0;
pub const RATING_STEP: f64 = 0.1;

/// Number of bins in the rating histogram.
pub const HISTOGRAM_BINS: usize = 20;

// --- DashboardConfig ---

/// Fixed dashboard settings. Nothing here is read from flags or the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub title: &'static str,
    pub data_path: PathBuf,
    /// Bounds of the minimum-rating slider.
    pub rating_range: RangeInclusive<f64>,
    pub default_min_rating: f64,
    pub rating_step: f64,
    pub histogram_bins: usize,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub table_height: f32,
    pub chart_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            title: APP_TITLE,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            rating_range: MIN_RATING..=MAX_RATING,
            default_min_rating: DEFAULT_MIN_RATING,
            rating_step: RATING_STEP,
            histogram_bins: HISTOGRAM_BINS,
            window_size: [1200.0, 900.0],
            min_window_size: [700.0, 500.0],
            table_height: 260.0,
            chart_height: 320.0,
        }
    }
}

impl DashboardConfig {
    /// Clamp a requested threshold into the slider range.
    pub fn clamp_rating(&self, rating: f64) -> f64 {
        rating.clamp(*self.rating_range.start(), *self.rating_range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_controls() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.data_path, PathBuf::from("IMDB Top.csv"));
        assert_eq!(cfg.rating_range, 1.0..=10.0);
        assert_eq!(cfg.default_min_rating, 5.0);
        assert_eq!(cfg.histogram_bins, 20);
    }

    #[test]
    fn rating_is_clamped_to_slider_bounds() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.clamp_rating(0.2), 1.0);
        assert_eq!(cfg.clamp_rating(11.0), 10.0);
        assert_eq!(cfg.clamp_rating(7.3), 7.3);
    }
}
