use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{GridLayout, ObstacleGrid};
use crate::shared::EditorOptions;

use super::{EditorState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Hindernisraster (einzige Datenquelle für den Export)
    pub grid: ObstacleGrid,
    /// Feste Canvas-Geometrie
    pub layout: GridLayout,
    /// UI-State
    pub ui: UiState,
    /// Zustand des laufenden Strichs
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert, ein Strich = ein Schritt)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Dateiname)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            grid: ObstacleGrid::new(),
            layout: GridLayout::new(),
            ui: UiState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(200),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Anzahl gesetzter Hindernisse (für UI-Anzeige)
    pub fn barrier_count(&self) -> usize {
        self.grid.len()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Solange ein Hinweisfenster offen ist, sind Canvas und Shortcuts gesperrt.
    pub fn is_input_blocked(&self) -> bool {
        self.ui.notice.is_some()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Rasters.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
