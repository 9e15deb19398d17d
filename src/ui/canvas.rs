//! Zeichnet Raster, Achsen und Hindernisse mit dem egui-Painter.

use crate::app::AppState;
use crate::core::{GridLayout, GRID_HEIGHT, GRID_WIDTH};
use glam::Vec2;

/// Schriftgröße der Achsenbeschriftung.
const AXIS_FONT_SIZE: f32 = 8.0;
/// Abstand der Beschriftung vom Rasterrand in Pixeln.
const AXIS_LABEL_OFFSET: f32 = 7.0;
/// Radius des Ursprungsmarkers.
const ORIGIN_MARKER_RADIUS: f32 = 2.0;

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
pub fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn to_screen(canvas_min: egui::Pos2, pos: Vec2) -> egui::Pos2 {
    canvas_min + egui::vec2(pos.x, pos.y)
}

/// Rendert den Canvas-Inhalt in `rect`.
pub fn paint_canvas(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let layout = &state.layout;
    let options = &state.options;
    let min = rect.min;

    painter.rect_filled(rect, 0.0, color32(options.background_color));

    // Hindernisse unter die Gitterlinien
    let barrier_color = color32(options.barrier_color);
    for cell in state.grid.iter() {
        let top_left = layout.cell_min_px(i32::from(cell.x), i32::from(cell.y));
        let cell_rect = egui::Rect::from_min_size(
            to_screen(min, top_left),
            egui::vec2(layout.cell_size, layout.cell_size),
        );
        painter.rect_filled(cell_rect, 0.0, barrier_color);
    }

    paint_grid_lines(painter, min, layout, color32(options.grid_line_color));
    paint_axes(
        painter,
        min,
        layout,
        options.axis_label_step,
        color32(options.axis_color),
    );
}

fn paint_grid_lines(
    painter: &egui::Painter,
    min: egui::Pos2,
    layout: &GridLayout,
    color: egui::Color32,
) {
    let stroke = egui::Stroke::new(1.0, color);
    let size = layout.grid_size_px();

    for x in 0..=GRID_WIDTH {
        let top = layout.cell_min_px(x, 0);
        painter.line_segment(
            [
                to_screen(min, top),
                to_screen(min, top + Vec2::new(0.0, size.y)),
            ],
            stroke,
        );
    }
    for y in 0..=GRID_HEIGHT {
        let left = layout.cell_min_px(0, y);
        painter.line_segment(
            [
                to_screen(min, left),
                to_screen(min, left + Vec2::new(size.x, 0.0)),
            ],
            stroke,
        );
    }
}

fn paint_axes(
    painter: &egui::Painter,
    min: egui::Pos2,
    layout: &GridLayout,
    step: i32,
    color: egui::Color32,
) {
    let font = egui::FontId::proportional(AXIS_FONT_SIZE);

    for x in GridLayout::axis_ticks(GRID_WIDTH, step) {
        let pos = layout.cell_min_px(x, 0) - Vec2::new(0.0, AXIS_LABEL_OFFSET);
        painter.text(
            to_screen(min, pos),
            egui::Align2::CENTER_CENTER,
            x.to_string(),
            font.clone(),
            color,
        );
    }
    for y in GridLayout::axis_ticks(GRID_HEIGHT, step) {
        let pos = layout.cell_min_px(0, y) - Vec2::new(AXIS_LABEL_OFFSET, 0.0);
        painter.text(
            to_screen(min, pos),
            egui::Align2::CENTER_CENTER,
            y.to_string(),
            font.clone(),
            color,
        );
    }

    painter.circle_filled(to_screen(min, layout.origin), ORIGIN_MARKER_RADIUS, color);
}
