use super::super::state::StrokeMode;

/// Mutierende Commands, die der Controller auf den `AppState` anwendet.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Strich beginnen (merkt den Zustand für Undo vor)
    BeginStroke { mode: StrokeMode },
    /// Hindernis setzen (`present = true`) oder entfernen
    SetCell { x: i32, y: i32, present: bool },
    /// Strich beenden (legt bei Änderung einen Undo-Schritt an)
    EndStroke,
    /// Raster leeren
    ClearGrid,
    /// Export-Dialog öffnen (oder Warnung bei leerem Raster)
    RequestExportDialog,
    /// Export-Text erzeugen und nach `path` schreiben
    ExportToFile { path: String },
    /// Hinweisfenster schließen
    DismissNotice,
    /// Versionsinfo als Hinweis anzeigen
    ShowAbout,
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Anwendung beenden
    RequestExit,
}
