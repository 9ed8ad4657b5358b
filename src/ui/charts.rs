use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Points};

use crate::color::ColorMap;
use crate::data::model::MovieRecord;
use crate::projection::{bar_projection, rating_histogram, scatter_projection};
use crate::ui::format::thousands;

const RATING_COLOR: Color32 = Color32::from_rgb(99, 110, 250);
const BOX_OFFICE_COLOR: Color32 = Color32::from_rgb(239, 85, 59);

// ---------------------------------------------------------------------------
// Bar chart: rating and box office per movie
// ---------------------------------------------------------------------------

/// Grouped bars, one pair per movie; the x axis is labelled with names.
pub fn bar_chart(ui: &mut Ui, records: &[&MovieRecord], height: f32) {
    let entries = bar_projection(records);
    let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();

    // Missing values get no bar; the slot on the axis stays.
    let rating_bars: Vec<Bar> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.rating.is_finite())
        .map(|(i, e)| Bar::new(i as f64 - 0.2, e.rating).width(0.4).name(&e.name))
        .collect();
    let box_office_bars: Vec<Bar> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.box_office.is_finite())
        .map(|(i, e)| Bar::new(i as f64 + 0.2, e.box_office).width(0.4).name(&e.name))
        .collect();

    let ratings = BarChart::new(rating_bars)
        .name("Rating")
        .color(RATING_COLOR)
        .element_formatter(Box::new(|bar: &Bar, _: &BarChart| {
            format!("{}\nRating: {:.2}", bar.name, bar.value)
        }));
    let box_office = BarChart::new(box_office_bars)
        .name("Box Office")
        .color(BOX_OFFICE_COLOR)
        .element_formatter(Box::new(|bar: &Bar, _: &BarChart| {
            format!("{}\nBox Office: {}", bar.name, thousands(bar.value, 2))
        }));

    Plot::new("bar_chart")
        .height(height)
        .legend(Legend::default())
        .allow_scroll(false)
        .x_axis_label("name")
        .x_axis_formatter(move |mark, _range| tick_label(&names, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(ratings);
            plot_ui.bar_chart(box_office);
        });
}

/// Movie name for an integral tick position, empty elsewhere.
fn tick_label(names: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Scatter: budget vs box office
// ---------------------------------------------------------------------------

/// One point per movie, coloured by genre; hovering shows the movie name.
pub fn scatter_plot(ui: &mut Ui, records: &[&MovieRecord], colors: &ColorMap, height: f32) {
    let points = scatter_projection(records);

    Plot::new("scatter_plot")
        .height(height)
        .allow_scroll(false)
        .x_axis_label("Budget")
        .y_axis_label("Box Office")
        .label_formatter(|name: &str, value: &PlotPoint| {
            if name.is_empty() {
                String::new()
            } else {
                format!(
                    "{name}\nBudget: {}\nBox Office: {}",
                    thousands(value.x, 0),
                    thousands(value.y, 0)
                )
            }
        })
        .show(ui, |plot_ui| {
            for p in &points {
                plot_ui.points(
                    Points::new(vec![[p.budget, p.box_office]])
                        .name(&p.name)
                        .radius(4.0)
                        .color(colors.color_for(&p.genre)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Histogram: rating distribution
// ---------------------------------------------------------------------------

pub fn rating_histogram_chart(ui: &mut Ui, records: &[&MovieRecord], bins: usize, height: f32) {
    let bars: Vec<Bar> = rating_histogram(records, bins)
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .name(format!("{:.2} – {:.2}", b.start, b.end))
        })
        .collect();

    let chart = BarChart::new(bars)
        .name("count")
        .color(RATING_COLOR)
        .element_formatter(Box::new(|bar: &Bar, _: &BarChart| {
            format!("Rating {}\ncount: {}", bar.name, bar.value)
        }));

    Plot::new("rating_histogram")
        .height(height)
        .allow_scroll(false)
        .x_axis_label("Rating")
        .y_axis_label("count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
