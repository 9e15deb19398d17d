use crate::core::ObstacleGrid;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Das Raster hat höchstens 32×32 Einträge, ein voller Klon ist billig.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Hindernisraster zum Zeitpunkt des Snapshots
    pub grid: ObstacleGrid,
}

impl Snapshot {
    /// Erstellt einen Snapshot des aktuellen Rasters.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            grid: state.grid.clone(),
        }
    }

    /// Erstellt einen Snapshot aus einem bereits gesicherten Raster.
    pub fn from_grid(grid: ObstacleGrid) -> Self {
        Self { grid }
    }

    /// Stellt den Snapshot wieder her.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.grid = self.grid;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen fertigen Snapshot als Undo-Schritt ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Nimmt den letzten Undo-Schritt, legt `current` auf den Redo-Stack und
    /// gibt den wiederherzustellenden Snapshot zurück.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Gegenstück zu [`EditHistory::pop_undo_with_current`] für Redo.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
