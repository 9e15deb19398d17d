//! Use-Case-Funktionen für den C-Export.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::{AppState, Notice, NoticeKind};
use crate::export::{export_barrier_source, write_barrier_file, ExportError};
use std::path::Path;

fn empty_warning() -> Notice {
    Notice {
        kind: NoticeKind::Warning,
        title: "Leer".to_string(),
        message: "Keine Hindernisse zum Exportieren!".to_string(),
    }
}

/// Öffnet den Export-Dialog, oder zeigt bei leerem Raster eine Warnung.
pub fn request_export(state: &mut AppState) {
    if state.grid.is_empty() {
        log::warn!("Export abgebrochen: keine Hindernisse gesetzt");
        state.ui.notice = Some(empty_warning());
        return;
    }
    state.ui.show_export_dialog = true;
}

/// Erzeugt den C-Quelltext und schreibt ihn nach `path`.
///
/// Bei leerem Raster wird nur die Warnung gezeigt, es entsteht keine Datei.
/// Schreibfehler werden an den Aufrufer weitergereicht.
pub fn export_to_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = match export_barrier_source(&state.grid) {
        Ok(content) => content,
        Err(ExportError::Empty) => {
            log::warn!("Export nach {} abgebrochen: keine Hindernisse gesetzt", path);
            state.ui.notice = Some(empty_warning());
            return Ok(());
        }
    };

    if let Err(e) = write_barrier_file(Path::new(&path), &content) {
        state.ui.status_message = Some(format!("Export fehlgeschlagen: {}", path));
        return Err(e);
    }

    let count = state.grid.len();
    log::info!("{} Hindernisse exportiert nach: {}", count, path);
    state.ui.status_message = Some(format!("{} Hindernisse exportiert", count));
    state.ui.notice = Some(Notice {
        kind: NoticeKind::Info,
        title: "OK".to_string(),
        message: format!("{} Hindernisse exportiert nach\n{}", count, path),
    });
    state.ui.last_export_path = Some(path);
    Ok(())
}
