//! Mutierende Schritte, die zentral vom Controller ausgeführt werden.

use super::WheelDirection;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kontrollpunkt greifen oder neuen Punkt anhängen
    PressControlPoint { canvas_pos: glam::Vec2 },
    /// Gegriffenen Kontrollpunkt verschieben
    DragControlPoint { canvas_pos: glam::Vec2 },
    /// Gegriffenen Kontrollpunkt loslassen
    ReleaseControlPoint,
    /// Abtast-Schrittweite um eine Raste verstellen
    AdjustSampleStep { direction: WheelDirection },
    /// Kurven-Halbbreite des Shaders um eine Raste verstellen
    AdjustCurveThreshold { direction: WheelDirection },
    /// Zwischen Marker- und Linienzug-Darstellung wechseln
    ToggleDisplayMode,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzbezeichnung für die Statusleiste.
    pub fn label(&self) -> &'static str {
        match self {
            AppCommand::PressControlPoint { .. } => "Punkt gedrückt",
            AppCommand::DragControlPoint { .. } => "Punkt gezogen",
            AppCommand::ReleaseControlPoint => "Punkt losgelassen",
            AppCommand::AdjustSampleStep { direction } => match direction {
                WheelDirection::Up => "Schrittweite +",
                WheelDirection::Down => "Schrittweite -",
            },
            AppCommand::AdjustCurveThreshold { direction } => match direction {
                WheelDirection::Up => "Kurvenbreite +",
                WheelDirection::Down => "Kurvenbreite -",
            },
            AppCommand::ToggleDisplayMode => "Darstellung gewechselt",
            AppCommand::RequestExit => "Beenden",
        }
    }
}
