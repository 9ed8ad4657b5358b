use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, panels, table, treemap};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyReelsApp {
    pub state: AppState,
}

impl RustyReelsApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for RustyReelsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: genre and rating controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &self.state);
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            let msg = state
                .status_message
                .as_deref()
                .unwrap_or("No dataset loaded  (File → Open…)");
            ui.heading(msg);
        });
        return;
    }

    let records = state.visible_records();
    let cfg = &state.config;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(format!(
                "Filtered Data for {} Genre and Minimum Rating {:.1}",
                state.criteria.genre, state.criteria.min_rating
            ));
            table::movie_table(ui, &records, cfg.table_height);
            ui.separator();

            ui.heading("Ratings and Box Office for Selected Movies");
            charts::bar_chart(ui, &records, cfg.chart_height);
            ui.separator();

            ui.heading("Relationship between Budget and Box Office");
            charts::scatter_plot(ui, &records, &state.color_map, cfg.chart_height);
            ui.separator();

            ui.heading("Distribution of Ratings");
            charts::rating_histogram_chart(ui, &records, cfg.histogram_bins, cfg.chart_height);
            ui.separator();

            ui.heading("Treemap: Budget Distribution by Genre");
            treemap::treemap(ui, &records, &state.color_map, cfg.chart_height);
        });
}
