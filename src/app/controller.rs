//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::DrawSurface;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Verarbeitet alle Intents eines Frames strikt in Ankunftsreihenfolge.
    ///
    /// Ein fehlgeschlagener Intent wird geloggt, die übrigen laufen weiter.
    pub fn handle_intents(
        &mut self,
        state: &mut AppState,
        intents: impl IntoIterator<Item = AppIntent>,
    ) {
        for intent in intents {
            if let Err(e) = self.handle_intent(state, intent) {
                log::error!("Intent konnte nicht verarbeitet werden: {:#}", e);
            }
        }
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Kontrollpunkte ===
            AppCommand::PressControlPoint { canvas_pos } => {
                handlers::control_points::press(state, canvas_pos)
            }
            AppCommand::DragControlPoint { canvas_pos } => {
                handlers::control_points::drag(state, canvas_pos)
            }
            AppCommand::ReleaseControlPoint => handlers::control_points::release(state),

            // === Abtastung & Darstellung ===
            AppCommand::AdjustSampleStep { direction } => {
                handlers::display::adjust_sample_step(state, direction)
            }
            AppCommand::AdjustCurveThreshold { direction } => {
                handlers::display::adjust_curve_threshold(state, direction)
            }
            AppCommand::ToggleDisplayMode => handlers::display::toggle_display_mode(state),

            // === Anwendung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Zeichnet den aktuellen Frame der Sitzung auf `surface`.
    pub fn render_frame(
        &self,
        state: &AppState,
        surface: &mut dyn DrawSurface,
    ) -> anyhow::Result<()> {
        state.session.render(surface, &state.palette())?;
        Ok(())
    }
}
