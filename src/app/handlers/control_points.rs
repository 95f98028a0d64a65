//! Handler für Greifen, Ziehen und Anhängen von Kontrollpunkten.

use crate::app::session::PressOutcome;
use crate::app::AppState;

/// Klick auf die Canvas: Punkt greifen oder neuen Punkt anhängen.
pub fn press(state: &mut AppState, canvas_pos: glam::Vec2) {
    match state.session.press(canvas_pos) {
        PressOutcome::Selected(index) => {
            log::debug!("Kontrollpunkt {} gegriffen", index);
        }
        PressOutcome::Appended(index) => {
            log::debug!("Kontrollpunkt {} angehängt bei {:?}", index, canvas_pos);
        }
        PressOutcome::Ignored => {
            log::debug!(
                "Kapazität von {} Kontrollpunkten erreicht, Klick ignoriert",
                state.session.capacity()
            );
        }
    }
}

/// Gegriffenen Punkt an die Zeigerposition setzen.
pub fn drag(state: &mut AppState, canvas_pos: glam::Vec2) {
    state.session.drag_to(canvas_pos);
}

/// Gegriffenen Punkt loslassen.
pub fn release(state: &mut AppState) {
    state.session.release();
}
