//! Handler für Abtastung und Darstellung der Kurve.

use crate::app::events::WheelDirection;
use crate::app::AppState;

/// Verstellt die Abtast-Schrittweite um eine Raste.
pub fn adjust_sample_step(state: &mut AppState, direction: WheelDirection) {
    let step = state.session.adjust_sample_step(direction);
    log::debug!("Abtast-Schrittweite: {:.3}", step);
}

/// Verstellt die Kurven-Halbbreite des Shaders um eine Raste.
pub fn adjust_curve_threshold(state: &mut AppState, direction: WheelDirection) {
    let threshold = state.session.adjust_curve_threshold(direction);
    log::debug!("Kurven-Halbbreite: {:.1}", threshold);
}

/// Wechselt zwischen Marker- und Linienzug-Darstellung.
pub fn toggle_display_mode(state: &mut AppState) {
    let mode = state.session.toggle_display_mode();
    log::info!("Darstellung: {}", mode.label());
}
