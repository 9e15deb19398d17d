//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, StrokeMode};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, hovered_cell: Option<(i32, i32)>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Hindernisse: {}", state.barrier_count()));

            ui.separator();

            match hovered_cell {
                Some((x, y)) => ui.label(format!("Zelle: ({}, {})", x, y)),
                None => ui.label("Zelle: -"),
            };

            ui.separator();

            let mode = match state.editor.stroke {
                Some(StrokeMode::Draw) => "Malen",
                Some(StrokeMode::Erase) => "Radieren",
                None => "Links malen / Rechts radieren",
            };
            ui.label(mode);

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(msg.as_str());
            }
        });
    });
}
