//! Application State: zentrale Datenhaltung.

use super::session::{CurvePalette, EditorSession, SessionConfig};
use super::CommandLog;
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufende Editor-Sitzung (Kontrollpunkte, Drag, Schrittweite)
    pub session: EditorSession,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Backend)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State für die gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            session: EditorSession::new(SessionConfig::from_options(&options)),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Farben für den nächsten Frame.
    pub fn palette(&self) -> CurvePalette {
        CurvePalette::from_options(&self.options)
    }

    /// Anzahl der Kontrollpunkte (für UI-Anzeige)
    pub fn control_point_count(&self) -> usize {
        self.session.points().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
