//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, StrokeMode};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Bei offenem Hinweisfenster werden bearbeitende Intents verworfen.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    if state.is_input_blocked() && is_editing_intent(&intent) {
        log::debug!("Intent bei offenem Hinweis verworfen: {:?}", intent);
        return vec![];
    }

    match intent {
        AppIntent::PaintStrokeStarted { mode } => vec![AppCommand::BeginStroke { mode }],
        AppIntent::PaintCell { x, y, mode } => {
            // Schon gesetzte bzw. schon leere Zellen erzeugen keinen Command
            let present = mode == StrokeMode::Draw;
            if state.grid.is_set(x, y) == present {
                vec![]
            } else {
                vec![AppCommand::SetCell { x, y, present }]
            }
        }
        AppIntent::PaintStrokeEnded => vec![AppCommand::EndStroke],
        AppIntent::ClearGridRequested => vec![AppCommand::ClearGrid],
        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportToFile { path }],
        AppIntent::NoticeDismissed => vec![AppCommand::DismissNotice],
        AppIntent::AboutRequested => vec![AppCommand::ShowAbout],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

fn is_editing_intent(intent: &AppIntent) -> bool {
    matches!(
        intent,
        AppIntent::PaintStrokeStarted { .. }
            | AppIntent::PaintCell { .. }
            | AppIntent::ClearGridRequested
            | AppIntent::ExportRequested
            | AppIntent::UndoRequested
            | AppIntent::RedoRequested
    )
}
