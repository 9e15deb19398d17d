//! Handler für Undo/Redo des Hindernisrasters.
//!
//! Während ein Strich läuft, bleibt die History unangetastet: der Strich
//! hält bereits den Vorher-Stand und legt beim Loslassen selbst den Schritt an.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Stellt den Rasterstand vor dem letzten Strich bzw. Leeren wieder her.
pub fn undo(state: &mut AppState) {
    if let Some(mode) = state.editor.stroke {
        log::debug!("Undo während Strich ({:?}) ignoriert", mode);
        return;
    }
    let current = Snapshot::from_state(state);
    match state.history.pop_undo_with_current(current) {
        Some(prev) => {
            prev.apply_to(state);
            state.ui.status_message =
                Some(format!("Rückgängig: {} Hindernisse", state.barrier_count()));
            log::info!("Undo: Raster mit {} Hindernissen", state.barrier_count());
        }
        None => log::debug!("Undo: kein Schritt vorhanden"),
    }
}

/// Wendet den zuletzt rückgängig gemachten Rasterstand erneut an.
pub fn redo(state: &mut AppState) {
    if let Some(mode) = state.editor.stroke {
        log::debug!("Redo während Strich ({:?}) ignoriert", mode);
        return;
    }
    let current = Snapshot::from_state(state);
    match state.history.pop_redo_with_current(current) {
        Some(next) => {
            next.apply_to(state);
            state.ui.status_message =
                Some(format!("Wiederholt: {} Hindernisse", state.barrier_count()));
            log::info!("Redo: Raster mit {} Hindernissen", state.barrier_count());
        }
        None => log::debug!("Redo: kein Schritt vorhanden"),
    }
}
