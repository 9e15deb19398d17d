//! Abbildung zwischen Canvas-Pixeln und Rasterzellen.

use super::cell::{GRID_HEIGHT, GRID_WIDTH};
use glam::Vec2;

/// Kantenlänge einer Zelle in Pixeln.
pub const CELL_SIZE_PX: i32 = 15;
/// Pixel-Abstand vom linken Canvas-Rand zur Zelle `(0, 0)` (Platz für die Achse).
pub const ORIGIN_X: i32 = 20;
/// Pixel-Abstand vom oberen Canvas-Rand zur Zelle `(0, 0)`.
pub const ORIGIN_Y: i32 = 20;
/// Rand rechts/unten neben dem Raster.
pub const CANVAS_MARGIN_PX: i32 = 20;

/// Feste Geometrie des Zeichen-Canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Pixelposition der oberen linken Ecke von Zelle `(0, 0)`
    pub origin: Vec2,
    /// Kantenlänge einer Zelle in Pixeln
    pub cell_size: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl GridLayout {
    /// Erstellt das Standard-Layout (Ursprung 20/20, Zellgröße 15).
    pub fn new() -> Self {
        Self {
            origin: Vec2::new(ORIGIN_X as f32, ORIGIN_Y as f32),
            cell_size: CELL_SIZE_PX as f32,
        }
    }

    /// Rechnet eine ganzzahlige Pixelposition in eine Zellkoordinate um.
    ///
    /// Abrundende Division, das Ergebnis kann außerhalb des Rasters liegen.
    /// Extreme Eingaben sättigen statt überzulaufen.
    pub fn pixel_to_cell(px: i32, py: i32) -> (i32, i32) {
        (
            px.saturating_sub(ORIGIN_X).div_euclid(CELL_SIZE_PX),
            py.saturating_sub(ORIGIN_Y).div_euclid(CELL_SIZE_PX),
        )
    }

    /// Wie [`GridLayout::pixel_to_cell`], aber für egui-Pointerpositionen
    /// (relativ zur oberen linken Canvas-Ecke).
    pub fn pixel_to_cell_f32(&self, canvas_pos: Vec2) -> (i32, i32) {
        let rel = (canvas_pos - self.origin) / self.cell_size;
        (rel.x.floor() as i32, rel.y.floor() as i32)
    }

    /// Obere linke Ecke einer Zelle in Canvas-Pixeln.
    pub fn cell_min_px(&self, x: i32, y: i32) -> Vec2 {
        self.origin + Vec2::new(x as f32, y as f32) * self.cell_size
    }

    /// Pixelgröße des Rasters ohne Ränder.
    pub fn grid_size_px(&self) -> Vec2 {
        Vec2::new(GRID_WIDTH as f32, GRID_HEIGHT as f32) * self.cell_size
    }

    /// Gesamtgröße des Canvas inkl. Achsen-Rand und Außenrand.
    pub fn canvas_size(&self) -> Vec2 {
        self.origin + self.grid_size_px() + Vec2::splat(CANVAS_MARGIN_PX as f32)
    }

    /// Indizes der beschrifteten Gitterlinien (0, step, 2*step, … bis inkl. `max`).
    pub fn axis_ticks(max: i32, step: i32) -> impl Iterator<Item = i32> {
        (0..=max).step_by(step.max(1) as usize)
    }
}
