//! Zentrale Konfiguration für den A* Barrier Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Rastergröße, Zellgröße und Ursprung sind fest (siehe `core::layout`)
//! und nicht konfigurierbar.

use serde::{Deserialize, Serialize};

// ── Darstellung ─────────────────────────────────────────────────────

/// Füllfarbe gesetzter Hindernisse (RGBA: Rot, #FF3B30).
pub const BARRIER_COLOR: [f32; 4] = [1.0, 0.231, 0.188, 1.0];
/// Farbe der Gitterlinien (RGBA: Hellgrau, #CCCCCC).
pub const GRID_LINE_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
/// Farbe von Achsenbeschriftung und Ursprungsmarker (RGBA: Dunkelgrau, #555555).
pub const AXIS_COLOR: [f32; 4] = [0.333, 0.333, 0.333, 1.0];
/// Hintergrundfarbe des Canvas (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Abstand der Achsenbeschriftungen in Zellen.
pub const AXIS_LABEL_STEP: i32 = 10;

// ── Export ──────────────────────────────────────────────────────────

/// Vorgeschlagener Dateiname im Export-Dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "map_barrier.cpp";

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `astar_barrier_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    /// Füllfarbe gesetzter Hindernisse
    pub barrier_color: [f32; 4],
    /// Farbe der Gitterlinien
    pub grid_line_color: [f32; 4],
    /// Farbe der Achsenbeschriftung
    pub axis_color: [f32; 4],
    /// Hintergrundfarbe des Canvas
    pub background_color: [f32; 4],
    /// Abstand der Achsenbeschriftungen in Zellen
    #[serde(default = "default_axis_label_step")]
    pub axis_label_step: i32,
    /// Vorgeschlagener Dateiname im Export-Dialog
    #[serde(default = "default_export_file_name")]
    pub default_export_file_name: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            barrier_color: BARRIER_COLOR,
            grid_line_color: GRID_LINE_COLOR,
            axis_color: AXIS_COLOR,
            background_color: BACKGROUND_COLOR,
            axis_label_step: AXIS_LABEL_STEP,
            default_export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Serde-Default für `axis_label_step` (Abwärtskompatibilität).
fn default_axis_label_step() -> i32 {
    AXIS_LABEL_STEP
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("astar_barrier_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("astar_barrier_editor.toml")
    }
}
