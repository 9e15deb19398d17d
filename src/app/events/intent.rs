use super::super::state::StrokeMode;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Maustaste auf dem Canvas gedrückt: neuer Mal-/Radier-Strich beginnt
    PaintStrokeStarted { mode: StrokeMode },
    /// Zelle unter dem Pointer bemalen bzw. radieren (bereits in Zellkoordinaten)
    PaintCell { x: i32, y: i32, mode: StrokeMode },
    /// Maustaste losgelassen: Strich abgeschlossen
    PaintStrokeEnded,
    /// Alle Hindernisse entfernen
    ClearGridRequested,
    /// Export als C-Datei angefordert (Menü / Ctrl+E)
    ExportRequested,
    /// Zielpfad im Export-Dialog gewählt
    ExportPathSelected { path: String },
    /// Hinweisfenster (Warnung/Bestätigung) geschlossen
    NoticeDismissed,
    /// Letzten Strich rückgängig machen
    UndoRequested,
    /// Rückgängig gemachten Strich wiederherstellen
    RedoRequested,
    /// Versionsinfo anzeigen (Help → About)
    AboutRequested,
    /// Anwendung beenden
    ExitRequested,
}
