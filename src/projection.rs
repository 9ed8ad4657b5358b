//! Chart projections of the filtered view.
//!
//! Every function here reads a slice of borrowed records and returns plain
//! data for the renderer; none of them can mutate the table. An empty input
//! always yields an empty projection.

use std::collections::HashMap;

use crate::data::model::MovieRecord;

// ---------------------------------------------------------------------------
// Bar: (rating, box office) per movie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub name: String,
    pub rating: f64,
    pub box_office: f64,
}

pub fn bar_projection(records: &[&MovieRecord]) -> Vec<BarEntry> {
    records
        .iter()
        .map(|r| BarEntry {
            name: r.name.clone(),
            rating: r.rating,
            box_office: r.box_office,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter: (budget, box office) per movie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub name: String,
    pub genre: String,
    pub budget: f64,
    pub box_office: f64,
}

/// Records with a missing box office have no position and are skipped.
pub fn scatter_projection(records: &[&MovieRecord]) -> Vec<ScatterPoint> {
    records
        .iter()
        .filter(|r| r.budget.is_finite() && r.box_office.is_finite())
        .map(|r| ScatterPoint {
            name: r.name.clone(),
            genre: r.genre.clone(),
            budget: r.budget,
            box_office: r.box_office,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Histogram: rating distribution in equal-width bins
// ---------------------------------------------------------------------------

/// Half-open `[start, end)` bin; the last bin also holds its upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Split the observed rating range into `bins` equal-width bins.
///
/// A single distinct rating is widened by 0.5 on each side so the bins keep
/// a non-zero width.
pub fn rating_histogram(records: &[&MovieRecord], bins: usize) -> Vec<HistogramBin> {
    let ratings: Vec<f64> = records
        .iter()
        .map(|r| r.rating)
        .filter(|v| v.is_finite())
        .collect();
    if bins == 0 || ratings.is_empty() {
        return Vec::new();
    }

    let mut lo = ratings.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi - lo < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for v in ratings {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + i as f64 * width,
            end: lo + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Treemap: budget summed per genre, squarified layout
// ---------------------------------------------------------------------------

/// Axis-aligned rectangle in layout units, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl TileRect {
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreemapTile {
    pub genre: String,
    pub budget: f64,
    pub rect: TileRect,
}

/// Total budget per genre, in order of first appearance. Genres whose total
/// is zero have no area and are left out.
pub fn genre_budget_totals(records: &[&MovieRecord]) -> Vec<(String, f64)> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for r in records {
        let entry = totals.entry(r.genre.as_str()).or_insert_with(|| {
            order.push(r.genre.clone());
            0.0
        });
        *entry += r.budget;
    }

    order
        .into_iter()
        .filter_map(|g| {
            let total = totals[g.as_str()];
            (total > 0.0).then_some((g, total))
        })
        .collect()
}

/// Lay out genre budgets inside a `width` × `height` area.
pub fn treemap_projection(records: &[&MovieRecord], width: f64, height: f64) -> Vec<TreemapTile> {
    squarify(genre_budget_totals(records), TileRect { x: 0.0, y: 0.0, w: width, h: height })
}

/// Squarified treemap (Bruls, Huizing, van Wijk): rows are grown while
/// the worst aspect ratio in the row keeps improving.
fn squarify(mut items: Vec<(String, f64)>, bounds: TileRect) -> Vec<TreemapTile> {
    items.retain(|(_, v)| *v > 0.0 && v.is_finite());
    let total: f64 = items.iter().map(|(_, v)| v).sum();
    if items.is_empty() || bounds.w <= 0.0 || bounds.h <= 0.0 {
        return Vec::new();
    }
    items.sort_by(|a, b| b.1.total_cmp(&a.1));

    let scale = bounds.area() / total;
    let areas: Vec<f64> = items.iter().map(|(_, v)| v * scale).collect();

    let mut tiles = Vec::with_capacity(items.len());
    let mut free = bounds;
    let mut start = 0;
    while start < items.len() {
        let side = free.w.min(free.h);
        let mut end = start + 1;
        while end < items.len()
            && worst_ratio(&areas[start..=end], side) <= worst_ratio(&areas[start..end], side)
        {
            end += 1;
        }

        let row_area: f64 = areas[start..end].iter().sum();
        if free.w >= free.h {
            // Column along the left edge.
            let col_w = row_area / free.h;
            let mut y = free.y;
            for i in start..end {
                let h = areas[i] / col_w;
                tiles.push(tile(&items[i], TileRect { x: free.x, y, w: col_w, h }));
                y += h;
            }
            free.x += col_w;
            free.w = (free.w - col_w).max(0.0);
        } else {
            // Row along the top edge.
            let row_h = row_area / free.w;
            let mut x = free.x;
            for i in start..end {
                let w = areas[i] / row_h;
                tiles.push(tile(&items[i], TileRect { x, y: free.y, w, h: row_h }));
                x += w;
            }
            free.y += row_h;
            free.h = (free.h - row_h).max(0.0);
        }
        start = end;
    }
    tiles
}

fn tile(item: &(String, f64), rect: TileRect) -> TreemapTile {
    TreemapTile {
        genre: item.0.clone(),
        budget: item.1,
        rect,
    }
}

fn worst_ratio(row: &[f64], side: f64) -> f64 {
    let sum: f64 = row.iter().sum();
    let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = row.iter().copied().fold(f64::INFINITY, f64::min);
    let side2 = side * side;
    let sum2 = sum * sum;
    (side2 * max / sum2).max(sum2 / (side2 * min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::movie;

    fn with_budget(name: &str, genre: &str, budget: f64) -> MovieRecord {
        let mut m = movie(name, genre, 7.0);
        m.budget = budget;
        m
    }

    #[test]
    fn empty_view_projects_to_empty_charts() {
        let none: Vec<&MovieRecord> = Vec::new();
        assert!(bar_projection(&none).is_empty());
        assert!(scatter_projection(&none).is_empty());
        assert!(rating_histogram(&none, 20).is_empty());
        assert!(treemap_projection(&none, 100.0, 100.0).is_empty());
    }

    #[test]
    fn bar_and_scatter_follow_record_order() {
        let a = movie("A", "Drama", 8.0);
        let b = movie("B", "Drama", 6.5);
        let view = vec![&a, &b];
        let bars = bar_projection(&view);
        assert_eq!(bars[0].name, "A");
        assert_eq!(bars[1].rating, 6.5);
        let points = scatter_projection(&view);
        assert_eq!(points[1].name, "B");
        assert_eq!(points[1].budget, b.budget);
    }

    #[test]
    fn missing_box_office_is_left_off_the_scatter() {
        let a = movie("A", "Drama", 8.0);
        let mut b = movie("B", "Drama", 7.0);
        b.box_office = f64::NAN;
        let points = scatter_projection(&[&a, &b]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].name, "A");
        // The bar projection keeps the row; the renderer skips the NaN bar.
        assert_eq!(bar_projection(&[&a, &b]).len(), 2);
    }

    #[test]
    fn histogram_has_fixed_bin_count_and_keeps_every_rating() {
        let movies: Vec<MovieRecord> = [5.0, 6.1, 7.5, 7.6, 9.0]
            .iter()
            .map(|&r| movie("m", "Drama", r))
            .collect();
        let view: Vec<&MovieRecord> = movies.iter().collect();
        let bins = rating_histogram(&view, 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 5);
        assert_eq!(bins[0].start, 5.0);
        assert!((bins[19].end - 9.0).abs() < 1e-9);
        // The maximum lands in the last bin.
        assert_eq!(bins[19].count, 1);
    }

    #[test]
    fn histogram_of_single_rating_is_widened() {
        let a = movie("A", "Drama", 8.0);
        let b = movie("B", "Drama", 8.0);
        let bins = rating_histogram(&[&a, &b], 20);
        assert_eq!(bins.len(), 20);
        assert!((bins[0].start - 7.5).abs() < 1e-9);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert!(bins.iter().all(|b| b.width() > 0.0));
    }

    #[test]
    fn budget_totals_group_by_genre() {
        let a = with_budget("A", "Drama", 10.0);
        let b = with_budget("B", "Crime", 0.0);
        let c = with_budget("C", "Drama", 5.0);
        let totals = genre_budget_totals(&[&a, &b, &c]);
        assert_eq!(totals, vec![("Drama".to_string(), 15.0)]);
    }

    #[test]
    fn treemap_tiles_fill_the_area_proportionally() {
        let movies = vec![
            with_budget("A", "Drama", 600.0),
            with_budget("B", "Crime", 300.0),
            with_budget("C", "Action", 200.0),
            with_budget("D", "Comedy", 100.0),
            with_budget("E", "Western", 50.0),
        ];
        let view: Vec<&MovieRecord> = movies.iter().collect();
        let tiles = treemap_projection(&view, 400.0, 300.0);
        assert_eq!(tiles.len(), 5);

        let total_area: f64 = tiles.iter().map(|t| t.rect.area()).sum();
        assert!((total_area - 120_000.0).abs() < 1e-6);

        for t in &tiles {
            let expected = t.budget / 1250.0 * 120_000.0;
            assert!((t.rect.area() - expected).abs() < 1e-6, "{}", t.genre);
            assert!(t.rect.x >= -1e-9 && t.rect.x + t.rect.w <= 400.0 + 1e-6);
            assert!(t.rect.y >= -1e-9 && t.rect.y + t.rect.h <= 300.0 + 1e-6);
        }
        assert_eq!(tiles[0].genre, "Drama");
    }

    #[test]
    fn single_genre_fills_everything() {
        let a = with_budget("A", "Drama", 50.0);
        let tiles = treemap_projection(&[&a], 10.0, 5.0);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].rect, TileRect { x: 0.0, y: 0.0, w: 10.0, h: 5.0 });
        assert!(tiles[0].rect.contains(9.9, 4.9));
    }

    #[test]
    fn degenerate_area_gives_no_tiles() {
        let a = with_budget("A", "Drama", 42.0);
        assert!(treemap_projection(&[&a], 0.0, 5.0).is_empty());
    }
}
