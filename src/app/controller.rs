//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Malen ===
            AppCommand::BeginStroke { mode } => handlers::editing::begin_stroke(state, mode),
            AppCommand::SetCell { x, y, present } => {
                handlers::editing::set_cell(state, x, y, present)
            }
            AppCommand::EndStroke => handlers::editing::end_stroke(state),
            AppCommand::ClearGrid => handlers::editing::clear_grid(state),

            // === Export ===
            AppCommand::RequestExportDialog => handlers::file_io::request_export(state),
            AppCommand::ExportToFile { path } => handlers::file_io::export(state, path)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::DismissNotice => handlers::dialog::dismiss_notice(state),
            AppCommand::ShowAbout => handlers::dialog::show_about(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }
}
