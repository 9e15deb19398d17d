use crate::app::{AppIntent, UiState};
use crate::shared::EditorOptions;
use std::path::Path;

fn path_to_ui_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
///
/// Ein abgebrochener Dialog erzeugt keinen Intent.
pub fn handle_file_dialogs(ui_state: &mut UiState, options: &EditorOptions) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        let last_path = ui_state.last_export_path.as_deref().map(Path::new);
        let default_name = last_path
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(options.default_export_file_name.as_str());

        let mut dialog = rfd::FileDialog::new()
            .add_filter("C++ files", &["cpp"])
            .add_filter("All files", &["*"])
            .set_file_name(default_name);
        if let Some(dir) = last_path.and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.save_file() {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
