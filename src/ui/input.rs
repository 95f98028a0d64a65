//! Canvas-Input: egui-Events in Ankunftsreihenfolge → AppIntent.

use crate::app::{AppIntent, EditorKey, PointerButton, WheelDirection};
use crate::shared::CanvasViewport;
use glam::Vec2;

/// Verwaltet den Input-Zustand der Canvas.
#[derive(Debug, Default)]
pub struct InputState {
    pointer_canvas_pos: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_canvas_pos: None,
        }
    }

    /// Letzte bekannte Zeigerposition in Canvas-Koordinaten (Ursprung oben links).
    pub fn pointer_canvas_pos(&self) -> Option<Vec2> {
        self.pointer_canvas_pos
    }

    /// Sammelt die Canvas-Events des Frames und gibt AppIntents zurück.
    ///
    /// Die Reihenfolge der egui-Events bleibt erhalten, damit z.B. Drücken,
    /// Ziehen und Loslassen innerhalb eines Frames korrekt ablaufen.
    pub fn collect_canvas_intents(
        &mut self,
        ui: &egui::Ui,
        viewport: &CanvasViewport,
    ) -> Vec<AppIntent> {
        let (events, close_requested) =
            ui.input(|i| (i.events.clone(), i.viewport().close_requested()));
        self.intents_from_events(&events, viewport, close_requested)
    }

    /// Übersetzt rohe egui-Events; Klicks außerhalb der Canvas werden verworfen.
    pub fn intents_from_events(
        &mut self,
        events: &[egui::Event],
        viewport: &CanvasViewport,
        close_requested: bool,
    ) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        let (canvas_min, canvas_size) = viewport.screen_rect();
        let inside = |screen: Vec2| {
            let rel = screen - canvas_min;
            rel.x >= 0.0 && rel.y >= 0.0 && rel.x <= canvas_size.x && rel.y <= canvas_size.y
        };

        for event in events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    let canvas_pos = viewport.screen_to_canvas(Vec2::new(pos.x, pos.y));
                    self.pointer_canvas_pos = Some(canvas_pos);
                    intents.push(AppIntent::PointerMove { pos: canvas_pos });
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => {
                    let screen = Vec2::new(pos.x, pos.y);
                    if !inside(screen) {
                        log::debug!("Klick außerhalb der Canvas bei {:?} ignoriert", screen);
                        continue;
                    }
                    intents.push(AppIntent::PointerDown {
                        pos: viewport.screen_to_canvas(screen),
                        button: map_button(*button),
                    });
                }
                egui::Event::PointerButton {
                    button,
                    pressed: false,
                    ..
                } => {
                    intents.push(AppIntent::PointerUp {
                        button: map_button(*button),
                    });
                }
                egui::Event::PointerGone => {
                    self.pointer_canvas_pos = None;
                }
                egui::Event::MouseWheel { delta, .. } => {
                    if let Some(direction) = WheelDirection::from_delta(delta.y) {
                        intents.push(AppIntent::Wheel { direction });
                    }
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => {
                    intents.push(AppIntent::KeyPress {
                        key: map_key(*key),
                    });
                }
                _ => {}
            }
        }

        if close_requested {
            intents.push(AppIntent::Quit);
        }

        intents
    }
}

fn map_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        egui::PointerButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

fn map_key(key: egui::Key) -> EditorKey {
    match key {
        egui::Key::F1 => EditorKey::F1,
        _ => EditorKey::Other,
    }
}
