use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::state::AppState;
use crate::ui::format::year_label;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(state.config.title);
    ui.separator();

    let genres = match &state.table {
        Some(table) if table.is_empty() => {
            ui.label("The dataset has no rows.");
            return;
        }
        Some(table) => table.genres().to_vec(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // ---- Genre selector ----
    ui.strong("Select Genre");
    let mut genre = state.criteria.genre.clone();
    egui::ComboBox::from_id_salt("genre_select")
        .selected_text(genre.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for g in &genres {
                ui.selectable_value(&mut genre, g.clone(), g.as_str());
            }
        });
    if genre != state.criteria.genre {
        state.set_genre(genre);
    }
    ui.add_space(8.0);

    // ---- Minimum rating ----
    ui.strong("Minimum Rating");
    let mut min_rating = state.criteria.min_rating;
    let slider = Slider::new(&mut min_rating, state.config.rating_range.clone())
        .step_by(state.config.rating_step)
        .fixed_decimals(1);
    if ui.add(slider).changed() {
        state.set_min_rating(min_rating);
    }
    ui.separator();

    // ---- Genre colour legend ----
    ui.strong("Genres");
    for (genre, color) in state.color_map.legend_entries() {
        ui.label(RichText::new(format!("■ {genre}")).color(color));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            let mut summary = format!(
                "{} movies loaded, {} visible",
                table.len(),
                state.visible_indices.len()
            );
            if let Some((first, last)) = table.year_span() {
                summary.push_str(&format!(", released {}–{}", year_label(Some(first)), year_label(Some(last))));
            }
            ui.label(summary);
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open movie data")
        .add_filter("Supported files", &["csv", "tsv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("TSV", &["tsv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}
