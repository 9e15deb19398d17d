//! Hindernisraster: Menge der blockierten Zellen.

use super::cell::Cell;
use std::collections::BTreeSet;

/// Menge der als Hindernis markierten Zellen.
///
/// Einziger Mutationspfad ist [`ObstacleGrid::set_cell`]. Koordinaten außerhalb
/// des Rasters werden stillschweigend ignoriert (kein Fehler, kein Clamping).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleGrid {
    cells: BTreeSet<Cell>,
}

impl ObstacleGrid {
    /// Erstellt ein leeres Raster.
    pub fn new() -> Self {
        Self {
            cells: BTreeSet::new(),
        }
    }

    /// Setzt (`present = true`) oder entfernt (`present = false`) ein Hindernis.
    ///
    /// Gibt `true` zurück, wenn sich die Menge dadurch geändert hat.
    pub fn set_cell(&mut self, x: i32, y: i32, present: bool) -> bool {
        let Some(cell) = Cell::new(x, y) else {
            return false;
        };

        let changed = if present {
            self.cells.insert(cell)
        } else {
            self.cells.remove(&cell)
        };

        if changed {
            log::debug!(
                "Zelle ({}, {}) {}",
                x,
                y,
                if present { "gesetzt" } else { "entfernt" }
            );
        }
        changed
    }

    /// Prüft, ob `(x, y)` ein Hindernis ist. Außerhalb des Rasters immer `false`.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        Cell::new(x, y).is_some_and(|cell| self.cells.contains(&cell))
    }

    /// Anzahl der Hindernisse.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Gibt `true` zurück, wenn kein Hindernis gesetzt ist.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iteriert aufsteigend nach `(x, y)` über alle Hindernisse.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Entfernt alle Hindernisse.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
