//! Integrationstests für den Intent→Command-Fluss des Controllers:
//! - Malen/Radieren per Strich inkl. Undo/Redo
//! - Export-Anfrage bei leerem und gefülltem Raster
//! - Export in eine Datei inkl. Bestätigung

use astar_barrier_editor::{AppCommand, AppController, AppIntent, AppState, NoticeKind, StrokeMode};
use std::path::PathBuf;

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "astar_barrier_editor_flow_{}_{}",
        tag,
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegen");
    dir
}

/// Simuliert einen kompletten Strich über die angegebenen Zellen.
fn stroke(
    controller: &mut AppController,
    state: &mut AppState,
    mode: StrokeMode,
    cells: &[(i32, i32)],
) {
    controller
        .handle_intent(state, AppIntent::PaintStrokeStarted { mode })
        .expect("Strich-Beginn darf nicht fehlschlagen");
    for &(x, y) in cells {
        controller
            .handle_intent(state, AppIntent::PaintCell { x, y, mode })
            .expect("PaintCell darf nicht fehlschlagen");
    }
    controller
        .handle_intent(state, AppIntent::PaintStrokeEnded)
        .expect("Strich-Ende darf nicht fehlschlagen");
}

// ─── Malen / Radieren ────────────────────────────────────────────────────────

#[test]
fn test_draw_then_erase_roundtrip() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    stroke(&mut controller, &mut state, StrokeMode::Draw, &[(3, 4), (4, 4)]);
    assert!(state.grid.is_set(3, 4));
    assert!(state.grid.is_set(4, 4));

    stroke(&mut controller, &mut state, StrokeMode::Erase, &[(3, 4)]);
    assert!(!state.grid.is_set(3, 4));
    assert!(state.grid.is_set(4, 4));
    assert_eq!(state.barrier_count(), 1);
    assert!(state.editor.stroke.is_none());
}

#[test]
fn test_out_of_bounds_paint_is_silently_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    stroke(
        &mut controller,
        &mut state,
        StrokeMode::Draw,
        &[(-1, 0), (0, -1), (32, 0), (0, 32)],
    );

    assert!(state.grid.is_empty());
    // Strich ohne Änderung erzeugt keinen Undo-Schritt
    assert!(!state.can_undo());
}

#[test]
fn test_stroke_is_single_undo_step() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    stroke(
        &mut controller,
        &mut state,
        StrokeMode::Draw,
        &[(0, 0), (1, 0), (2, 0)],
    );
    assert_eq!(state.barrier_count(), 3);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo darf nicht fehlschlagen");
    assert!(state.grid.is_empty());
    assert!(state.can_redo());

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo darf nicht fehlschlagen");
    assert_eq!(state.barrier_count(), 3);
}

#[test]
fn test_repainting_same_cell_logs_no_set_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    stroke(&mut controller, &mut state, StrokeMode::Draw, &[(7, 7), (7, 7)]);

    assert_eq!(state.command_log.cell_changes(), 1);
}

#[test]
fn test_undo_during_stroke_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    stroke(&mut controller, &mut state, StrokeMode::Draw, &[(0, 0)]);

    // Zweiter Strich, Ctrl+Z bei gedrückter Maustaste
    controller
        .handle_intent(
            &mut state,
            AppIntent::PaintStrokeStarted {
                mode: StrokeMode::Draw,
            },
        )
        .expect("Strich-Beginn darf nicht fehlschlagen");
    for (x, y) in [(1, 1), (2, 2)] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::PaintCell {
                    x,
                    y,
                    mode: StrokeMode::Draw,
                },
            )
            .expect("PaintCell darf nicht fehlschlagen");
        controller
            .handle_intent(&mut state, AppIntent::UndoRequested)
            .expect("Undo darf nicht fehlschlagen");
        controller
            .handle_intent(&mut state, AppIntent::RedoRequested)
            .expect("Redo darf nicht fehlschlagen");
    }
    assert!(state.grid.is_set(0, 0));
    assert!(state.grid.is_set(1, 1));

    controller
        .handle_intent(&mut state, AppIntent::PaintStrokeEnded)
        .expect("Strich-Ende darf nicht fehlschlagen");
    assert_eq!(state.barrier_count(), 3);

    // Zwei Striche = zwei Undo-Schritte bis zum leeren Raster
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo darf nicht fehlschlagen");
    let cells: Vec<(i32, i32)> = state.grid.iter().map(Into::into).collect();
    assert_eq!(cells, vec![(0, 0)]);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo darf nicht fehlschlagen");
    assert!(state.grid.is_empty());
    assert!(!state.can_undo());

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo darf nicht fehlschlagen");
    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo darf nicht fehlschlagen");
    assert_eq!(state.barrier_count(), 3);
}

#[test]
fn test_clear_grid_can_be_undone() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    stroke(&mut controller, &mut state, StrokeMode::Draw, &[(1, 1), (2, 2)]);

    controller
        .handle_intent(&mut state, AppIntent::ClearGridRequested)
        .expect("Clear darf nicht fehlschlagen");
    assert!(state.grid.is_empty());

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo darf nicht fehlschlagen");
    assert_eq!(state.barrier_count(), 2);
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[test]
fn test_export_with_empty_grid_shows_warning_and_no_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested darf nicht fehlschlagen");

    assert!(!state.ui.show_export_dialog);
    let notice = state.ui.notice.as_ref().expect("Warnung erwartet");
    assert_eq!(notice.kind, NoticeKind::Warning);

    controller
        .handle_intent(&mut state, AppIntent::NoticeDismissed)
        .expect("NoticeDismissed darf nicht fehlschlagen");
    assert!(state.ui.notice.is_none());
}

#[test]
fn test_open_notice_blocks_editing_until_dismissed() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested darf nicht fehlschlagen");
    assert!(state.is_input_blocked());

    // Malen und erneuter Export werden verworfen, solange der Hinweis offen ist
    stroke(&mut controller, &mut state, StrokeMode::Draw, &[(5, 5)]);
    assert!(state.grid.is_empty());
    state.grid.set_cell(6, 6, true);
    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested darf nicht fehlschlagen");
    assert!(!state.ui.show_export_dialog);

    controller
        .handle_intent(&mut state, AppIntent::NoticeDismissed)
        .expect("NoticeDismissed darf nicht fehlschlagen");
    assert!(!state.is_input_blocked());

    stroke(&mut controller, &mut state, StrokeMode::Draw, &[(5, 5)]);
    assert!(state.grid.is_set(5, 5));
}

#[test]
fn test_export_with_barriers_opens_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.grid.set_cell(0, 0, true);

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested darf nicht fehlschlagen");

    assert!(state.ui.show_export_dialog);
    assert!(state.ui.notice.is_none());
}

#[test]
fn test_export_path_selected_writes_file_and_confirms() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    stroke(
        &mut controller,
        &mut state,
        StrokeMode::Draw,
        &[(0, 0), (1, 0), (0, 1)],
    );

    let dir = unique_temp_dir("write");
    let path = dir.join("map_barrier.cpp");
    let path_str = path.to_string_lossy().into_owned();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: path_str.clone(),
            },
        )
        .expect("Export sollte gelingen");

    let written = std::fs::read_to_string(&path).expect("Exportdatei sollte existieren");
    assert_eq!(written, include_str!("fixtures/three_barriers.cpp"));

    let notice = state.ui.notice.as_ref().expect("Bestätigung erwartet");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert!(notice.message.contains(&path_str));
    assert!(notice.message.contains('3'));
    assert_eq!(state.ui.last_export_path.as_deref(), Some(path_str.as_str()));

    // Keine temporäre Datei bleibt liegen
    let leftovers: Vec<_> = std::fs::read_dir(&dir)
        .expect("Verzeichnis lesbar")
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_export_overwrites_existing_file() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.grid.set_cell(9, 9, true);

    let dir = unique_temp_dir("overwrite");
    let path = dir.join("map_barrier.cpp");
    std::fs::write(&path, "alter Inhalt").expect("Vorbelegung schreiben");

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("Export sollte gelingen");

    let written = std::fs::read_to_string(&path).expect("Exportdatei lesbar");
    assert!(written.contains("{ 9, 9 }"));
    assert!(!written.contains("alter Inhalt"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_export_path_with_empty_grid_writes_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let dir = unique_temp_dir("empty");
    let path = dir.join("map_barrier.cpp");

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("Leerer Export ist kein Fehler");

    assert!(!path.exists());
    assert_eq!(
        state.ui.notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::Warning)
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_export_into_missing_directory_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.grid.set_cell(1, 2, true);

    let dir = unique_temp_dir("missing");
    let path = dir.join("gibt_es_nicht").join("map_barrier.cpp");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ExportPathSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );

    assert!(result.is_err());
    assert!(state.ui.notice.is_none());
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|m| m.starts_with("Export fehlgeschlagen")));

    let _ = std::fs::remove_dir_all(&dir);
}

// ─── Anwendungssteuerung ─────────────────────────────────────────────────────

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    match state.command_log.last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_about_shows_version_notice() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AboutRequested)
        .expect("AboutRequested sollte ohne Fehler durchlaufen");

    let notice = state.ui.notice.as_ref().expect("About-Hinweis erwartet");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert!(notice.message.contains(env!("CARGO_PKG_VERSION")));
}
