use crate::core::ObstacleGrid;

/// Art eines Strichs auf dem Canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeMode {
    /// Linke Maustaste: Hindernisse setzen
    #[default]
    Draw,
    /// Rechte Maustaste: Hindernisse entfernen
    Erase,
}

/// Zustand des laufenden Strichs
#[derive(Default)]
pub struct EditorState {
    /// Aktiver Strich (None = keine Maustaste gedrückt)
    pub stroke: Option<StrokeMode>,
    /// Raster vor Beginn des Strichs (für Undo)
    pub stroke_snapshot: Option<ObstacleGrid>,
}

impl EditorState {
    /// Erstellt den Ruhezustand ohne aktiven Strich.
    pub fn new() -> Self {
        Self {
            stroke: None,
            stroke_snapshot: None,
        }
    }
}
