//! A* Barrier Editor.
//!
//! Zeichnet ein 32×32-Hindernisraster per Maus und exportiert es als
//! C-Tabelle für `astar_set_barrier()`.

use astar_barrier_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

/// Geschätzte Höhe von Menü- und Status-Leiste zusammen.
const PANEL_HEIGHT_PX: f32 = 52.0;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "A* Barrier Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let canvas = astar_barrier_editor::GridLayout::new().canvas_size();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([canvas.x, canvas.y + PANEL_HEIGHT_PX])
                .with_resizable(false)
                .with_title("A* Barrier Editor (32×32)"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "A* Barrier Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen konnten nicht geschrieben werden: {:#}", e);
            }
        }

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state, self.input.hovered_cell());
        events.extend(ui::handle_file_dialogs(
            &mut self.state.ui,
            &self.state.options,
        ));
        events.extend(ui::show_notice(ctx, self.state.ui.notice.as_ref()));
        if !self.state.is_input_blocked() {
            events.extend(ui::collect_keyboard_intents(ctx));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let size = self.state.layout.canvas_size();
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(size.x, size.y),
                    egui::Sense::click_and_drag(),
                );

                events.extend(
                    self.input
                        .collect_canvas_events(ui, &response, &self.state.layout),
                );

                ui::paint_canvas(&ui.painter_at(rect), rect, &self.state);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
