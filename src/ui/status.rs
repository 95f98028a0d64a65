//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, DragState};
use crate::shared::RenderBackend;
use glam::Vec2;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, pointer: Option<Vec2>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let session = &state.session;
            ui.label(format!(
                "Kontrollpunkte: {} / {}",
                state.control_point_count(),
                session.capacity()
            ));

            ui.separator();

            match state.options.backend {
                RenderBackend::Cpu => {
                    ui.label(format!(
                        "Darstellung: {} (F1) | Schrittweite: {:.3}",
                        session.display_mode().label(),
                        session.sample_step()
                    ));
                }
                RenderBackend::Gpu => {
                    ui.label(format!("Kurvenbreite: {:.0}", session.curve_threshold()));
                }
            }

            ui.separator();

            match session.drag_state() {
                DragState::Dragging(index) => ui.label(format!("Ziehe Punkt {}", index)),
                DragState::Idle => ui.label("Bereit"),
            };

            if let Some(command) = state.command_log.last() {
                ui.separator();
                ui.label(format!(
                    "Letzter Befehl: {} (#{})",
                    command.label(),
                    state.command_log.total()
                ));
            }

            if let Some(pos) = pointer {
                ui.separator();
                ui.label(format!("Position: ({:.0}, {:.0})", pos.x, pos.y));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
