//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod ui;

pub use app_state::AppState;
pub use editor::{EditorState, StrokeMode};
pub use ui::{Notice, NoticeKind, UiState};
