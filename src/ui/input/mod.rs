//! Canvas-Input-Handling: Maustasten und Pointer-Bewegung → AppIntent.
//!
//! Linke Taste malt, rechte Taste radiert. Ein Strich reicht vom Drücken
//! bis zum Loslassen der Taste.

use crate::app::{AppIntent, StrokeMode};
use crate::core::GridLayout;
use glam::Vec2;

/// Verwaltet den Input-Zustand des Canvas zwischen zwei Frames.
#[derive(Default)]
pub struct InputState {
    active_stroke: Option<StrokeMode>,
    last_cell: Option<(i32, i32)>,
    hovered_cell: Option<(i32, i32)>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            active_stroke: None,
            last_cell: None,
            hovered_cell: None,
        }
    }

    /// Zelle unter dem Pointer (nur innerhalb des Rasters).
    pub fn hovered_cell(&self) -> Option<(i32, i32)> {
        self.hovered_cell
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        layout: &GridLayout,
    ) -> Vec<AppIntent> {
        let (primary_pressed, secondary_pressed, primary_down, secondary_down, pointer_pos) =
            ui.input(|i| {
                (
                    i.pointer.button_pressed(egui::PointerButton::Primary),
                    i.pointer.button_pressed(egui::PointerButton::Secondary),
                    i.pointer.primary_down(),
                    i.pointer.secondary_down(),
                    i.pointer.interact_pos(),
                )
            });

        let canvas_pos = pointer_pos.map(|p| {
            let rel = p - response.rect.min;
            Vec2::new(rel.x, rel.y)
        });

        self.hovered_cell = canvas_pos
            .filter(|_| response.hovered())
            .map(|pos| layout.pixel_to_cell_f32(pos))
            .filter(|&(x, y)| crate::core::Cell::in_bounds(x, y));

        let pressed = if response.hovered() {
            if primary_pressed {
                Some(StrokeMode::Draw)
            } else if secondary_pressed {
                Some(StrokeMode::Erase)
            } else {
                None
            }
        } else {
            None
        };

        let still_down = match self.active_stroke {
            Some(StrokeMode::Draw) => primary_down,
            Some(StrokeMode::Erase) => secondary_down,
            None => false,
        };

        self.process(pressed, still_down, canvas_pos, layout)
    }

    /// Zustandsautomat für Strich-Beginn, -Verlauf und -Ende.
    ///
    /// Getrennt von egui, damit der Ablauf ohne Fenster testbar ist.
    fn process(
        &mut self,
        pressed: Option<StrokeMode>,
        still_down: bool,
        canvas_pos: Option<Vec2>,
        layout: &GridLayout,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if self.active_stroke.is_some() && !still_down {
            events.push(AppIntent::PaintStrokeEnded);
            self.active_stroke = None;
            self.last_cell = None;
        }

        if self.active_stroke.is_none() {
            if let Some(mode) = pressed {
                events.push(AppIntent::PaintStrokeStarted { mode });
                self.active_stroke = Some(mode);
            }
        }

        let (Some(mode), Some(pos)) = (self.active_stroke, canvas_pos) else {
            return events;
        };

        let cell = layout.pixel_to_cell_f32(pos);
        let cells = match self.last_cell {
            Some(last) if last == cell => Vec::new(),
            // Die letzte Zelle wurde im vorigen Frame schon gemeldet
            Some(last) => cells_between(last, cell).into_iter().skip(1).collect(),
            None => vec![cell],
        };
        events.extend(
            cells
                .into_iter()
                .map(|(x, y)| AppIntent::PaintCell { x, y, mode }),
        );
        self.last_cell = Some(cell);

        events
    }
}

/// Alle Zellen auf der Strecke von `from` nach `to` (inklusive beider Enden).
///
/// Schnelle Mausbewegungen überspringen sonst Zellen zwischen zwei Frames.
pub fn cells_between(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![to];
    }

    let mut cells = Vec::with_capacity(steps as usize + 1);
    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        let x = from.0 + (dx as f32 * t).round() as i32;
        let y = from.1 + (dy as f32 * t).round() as i32;
        if cells.last() != Some(&(x, y)) {
            cells.push((x, y));
        }
    }
    cells
}
