//! A* Barrier Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, Notice, NoticeKind, StrokeMode};
pub use core::{Cell, GridLayout, ObstacleGrid, GRID_HEIGHT, GRID_WIDTH};
pub use export::{
    collect_records, export_barrier_source, format_barrier_source, write_barrier_file,
    ExportError, ExportRecord,
};
pub use shared::EditorOptions;
