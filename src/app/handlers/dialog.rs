//! Handler für Hinweisfenster und Anwendungssteuerung.

use crate::app::{AppState, Notice, NoticeKind};

/// Schließt das aktuelle Hinweisfenster.
pub fn dismiss_notice(state: &mut AppState) {
    state.ui.notice = None;
}

/// Zeigt Name und Version der Anwendung.
pub fn show_about(state: &mut AppState) {
    state.ui.notice = Some(Notice {
        kind: NoticeKind::Info,
        title: "About".to_string(),
        message: format!(
            "A* Barrier Editor v{}\n32×32-Raster, Export für astar_set_barrier()",
            env!("CARGO_PKG_VERSION")
        ),
    });
}

/// Fordert das Beenden der Anwendung an.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
