//! Rasterzelle und feste Rastergröße.

/// Anzahl der Zellen in X-Richtung.
pub const GRID_WIDTH: i32 = 32;
/// Anzahl der Zellen in Y-Richtung.
pub const GRID_HEIGHT: i32 = 32;

/// Eine Rasterzelle `(x, y)` mit `0 <= x < GRID_WIDTH` und `0 <= y < GRID_HEIGHT`.
///
/// Die Ordnung ist x-major (erst `x`, dann `y`), passend zur Export-Reihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Spalte
    pub x: u16,
    /// Zeile
    pub y: u16,
}

impl Cell {
    /// Erstellt eine Zelle aus beliebigen Ganzzahlen.
    ///
    /// Gibt `None` zurück, wenn die Koordinaten außerhalb des Rasters liegen.
    pub fn new(x: i32, y: i32) -> Option<Self> {
        if Self::in_bounds(x, y) {
            Some(Self {
                x: x as u16,
                y: y as u16,
            })
        } else {
            None
        }
    }

    /// Prüft, ob `(x, y)` innerhalb des Rasters liegt.
    pub fn in_bounds(x: i32, y: i32) -> bool {
        (0..GRID_WIDTH).contains(&x) && (0..GRID_HEIGHT).contains(&y)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (i32::from(cell.x), i32::from(cell.y))
    }
}
