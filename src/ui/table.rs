use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::MovieRecord;
use crate::ui::format::{rating_label, thousands, year_label};

const HEADERS: [&str; 6] = ["name", "genre", "year", "rating", "budget", "box_office"];

/// Render the filtered records as a scrollable table.
pub fn movie_table(ui: &mut Ui, records: &[&MovieRecord], max_height: f32) {
    if records.is_empty() {
        ui.label("No movies match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(max_height)
        .column(Column::initial(260.0).at_least(80.0).clip(true))
        .column(Column::auto().at_least(70.0))
        .columns(Column::auto().at_least(60.0), 2)
        .columns(Column::auto().at_least(110.0), 2)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, records.len(), |mut row| {
                let rec = records[row.index()];
                row.col(|ui| {
                    ui.label(&rec.name);
                });
                row.col(|ui| {
                    ui.label(&rec.genre);
                });
                row.col(|ui| {
                    ui.label(year_label(rec.year));
                });
                row.col(|ui| {
                    ui.label(rating_label(rec.rating));
                });
                row.col(|ui| {
                    ui.label(thousands(rec.budget, 0));
                });
                row.col(|ui| {
                    ui.label(thousands(rec.box_office, 0));
                });
            });
        });
}
