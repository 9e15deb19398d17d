//! Top-Menü (File, Edit, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Export C... (Ctrl+E)").clicked() {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                let has_barriers = !state.grid.is_empty();
                if ui
                    .add_enabled(has_barriers, egui::Button::new("Raster leeren"))
                    .clicked()
                {
                    events.push(AppIntent::ClearGridRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        state.can_redo(),
                        egui::Button::new("Redo (Ctrl+Y / Shift+Cmd+Z)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    events.push(AppIntent::AboutRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
