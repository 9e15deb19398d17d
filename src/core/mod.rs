//! Core-Domänentypen: Rasterzelle, Hindernisraster, Canvas-Layout.

pub mod cell;
pub mod grid;
pub mod layout;

pub use cell::{Cell, GRID_HEIGHT, GRID_WIDTH};
pub use grid::ObstacleGrid;
pub use layout::{GridLayout, CELL_SIZE_PX, ORIGIN_X, ORIGIN_Y};
