use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Ui, pos2, vec2};

use crate::color::ColorMap;
use crate::data::model::MovieRecord;
use crate::projection::treemap_projection;
use crate::ui::format::thousands;

/// Paint the budget-by-genre treemap into a fixed-height area.
pub fn treemap(ui: &mut Ui, records: &[&MovieRecord], colors: &ColorMap, height: f32) {
    let size = vec2(ui.available_width(), height);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let tiles = treemap_projection(records, f64::from(rect.width()), f64::from(rect.height()));
    if tiles.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No budget data",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    for tile in &tiles {
        let r = &tile.rect;
        let tile_rect = Rect::from_min_size(
            pos2(rect.min.x + r.x as f32, rect.min.y + r.y as f32),
            vec2(r.w as f32, r.h as f32),
        )
        .shrink(1.0);
        painter.rect_filled(tile_rect, 2.0, colors.color_for(&tile.genre));

        // Skip labels that would not fit.
        if tile_rect.width() > 60.0 && tile_rect.height() > 34.0 {
            painter.text(
                tile_rect.left_top() + vec2(6.0, 4.0),
                Align2::LEFT_TOP,
                format!("{}\n{}", tile.genre, thousands(tile.budget, 0)),
                FontId::proportional(13.0),
                Color32::BLACK,
            );
        }
    }

    if let Some(pos) = response.hover_pos() {
        let local = pos - rect.min;
        let hovered = tiles
            .iter()
            .find(|t| t.rect.contains(f64::from(local.x), f64::from(local.y)));
        if let Some(tile) = hovered {
            response.on_hover_text(format!(
                "Genre: {}\nBudget: {}",
                tile.genre,
                thousands(tile.budget, 2)
            ));
        }
    }
}
