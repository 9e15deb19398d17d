//! Use-Case-Funktionen für das Bemalen des Hindernisrasters.

use crate::app::history::Snapshot;
use crate::app::{AppState, StrokeMode};

/// Beginnt einen Strich und merkt das Raster für Undo vor.
pub fn begin_stroke(state: &mut AppState, mode: StrokeMode) {
    state.editor.stroke = Some(mode);
    state.editor.stroke_snapshot = Some(state.grid.clone());
}

/// Setzt oder entfernt ein Hindernis. Außerhalb des Rasters passiert nichts.
pub fn set_cell(state: &mut AppState, x: i32, y: i32, present: bool) {
    state.grid.set_cell(x, y, present);
}

/// Beendet den Strich. Hat er das Raster verändert, wird ein Undo-Schritt angelegt.
pub fn end_stroke(state: &mut AppState) {
    state.editor.stroke = None;
    let Some(before) = state.editor.stroke_snapshot.take() else {
        return;
    };
    if before != state.grid {
        state.history.record_snapshot(Snapshot::from_grid(before));
    }
}

/// Entfernt alle Hindernisse (als ein Undo-Schritt).
pub fn clear_grid(state: &mut AppState) {
    if state.grid.is_empty() {
        return;
    }
    state.record_undo_snapshot();
    let removed = state.grid.len();
    state.grid.clear();
    state.ui.status_message = Some(format!("{} Hindernisse entfernt", removed));
    log::info!("Raster geleert: {} Hindernisse entfernt", removed);
}
