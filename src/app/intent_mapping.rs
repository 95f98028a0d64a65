//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier liegt die Eingabegrenze: Tastenfilter und Umrechnung in das
//! Koordinatensystem des Backends passieren genau einmal, vor der Sitzung.

use super::events::{EditorKey, PointerButton};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderBackend;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerDown {
            pos,
            button: PointerButton::Primary,
        } => vec![AppCommand::PressControlPoint {
            canvas_pos: to_backend_space(state, pos),
        }],
        AppIntent::PointerDown { button, .. } => {
            log::debug!("Klick mit {:?} ignoriert", button);
            vec![]
        }
        AppIntent::PointerUp {
            button: PointerButton::Primary,
        } if state.session.is_dragging() => vec![AppCommand::ReleaseControlPoint],
        AppIntent::PointerUp { .. } => vec![],
        AppIntent::PointerMove { pos } if state.session.is_dragging() => {
            vec![AppCommand::DragControlPoint {
                canvas_pos: to_backend_space(state, pos),
            }]
        }
        AppIntent::PointerMove { .. } => vec![],
        AppIntent::Wheel { direction } => match state.options.backend {
            RenderBackend::Cpu => vec![AppCommand::AdjustSampleStep { direction }],
            RenderBackend::Gpu => vec![AppCommand::AdjustCurveThreshold { direction }],
        },
        AppIntent::KeyPress { key: EditorKey::F1 } => vec![AppCommand::ToggleDisplayMode],
        AppIntent::KeyPress {
            key: EditorKey::Other,
        } => vec![],
        AppIntent::Quit => vec![AppCommand::RequestExit],
    }
}

fn to_backend_space(state: &AppState, pos: glam::Vec2) -> glam::Vec2 {
    state
        .options
        .axis_orientation
        .apply(pos, state.options.canvas_height)
}
