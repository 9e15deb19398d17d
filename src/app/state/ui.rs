/// Art eines Hinweisfensters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Hinweis ohne Folgen (z.B. leeres Raster)
    Warning,
    /// Bestätigung eines erfolgreichen Exports
    Info,
}

/// Hinweisfenster; solange es offen ist, ist die Bearbeitung gesperrt
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Art des Hinweises
    pub kind: NoticeKind,
    /// Fenstertitel
    pub title: String,
    /// Hinweistext
    pub message: String,
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Export-Dialog beim nächsten Frame öffnen
    pub show_export_dialog: bool,
    /// Zuletzt erfolgreich verwendeter Exportpfad
    pub last_export_path: Option<String>,
    /// Aktuell angezeigtes Hinweisfenster
    pub notice: Option<Notice>,
    /// Statusnachricht in der Status-Bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            show_export_dialog: false,
            last_export_path: None,
            notice: None,
            status_message: None,
        }
    }
}
