//! Handler für Mal-/Radier-Operationen.

use crate::app::use_cases;
use crate::app::{AppState, StrokeMode};

/// Beginnt einen Strich.
pub fn begin_stroke(state: &mut AppState, mode: StrokeMode) {
    use_cases::painting::begin_stroke(state, mode);
}

/// Setzt oder entfernt ein einzelnes Hindernis.
pub fn set_cell(state: &mut AppState, x: i32, y: i32, present: bool) {
    use_cases::painting::set_cell(state, x, y, present);
}

/// Beendet den aktuellen Strich.
pub fn end_stroke(state: &mut AppState) {
    use_cases::painting::end_stroke(state);
}

/// Leert das Raster.
pub fn clear_grid(state: &mut AppState) {
    use_cases::painting::clear_grid(state);
}
