//! Zeichenfläche über dem egui-Painter.

use super::CurveUniforms;
use crate::core::AxisOrientation;
use crate::shared::{CanvasViewport, DrawSurface, Rgba};
use glam::Vec2;

/// Rgba → egui-Farbe.
pub fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), color.a())
}

/// Kurven-Farben für den Shader.
#[derive(Debug, Clone, Copy)]
struct ShaderColors {
    curve: Rgba,
    control: Rgba,
}

/// Zeichnet Canvas-Geometrie über einen `egui::Painter` in das Fenster.
///
/// Eingehende Koordinaten liegen im System des Backends und werden über
/// `AxisOrientation` und `CanvasViewport` auf den Bildschirm abgebildet.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    viewport: CanvasViewport,
    orientation: AxisOrientation,
    shader: Option<ShaderColors>,
    uniforms: Option<CurveUniforms>,
}

impl<'a> PainterSurface<'a> {
    /// Fläche ohne Shader: die Kurve wird auf der CPU abgetastet.
    pub fn new(
        painter: &'a egui::Painter,
        viewport: CanvasViewport,
        orientation: AxisOrientation,
    ) -> Self {
        Self {
            painter,
            viewport,
            orientation,
            shader: None,
            uniforms: None,
        }
    }

    /// Nimmt Uniform-Uploads für den Kurven-Shader an.
    pub fn with_shader(mut self, curve_color: Rgba, control_color: Rgba) -> Self {
        self.shader = Some(ShaderColors {
            curve: curve_color,
            control: control_color,
        });
        self
    }

    /// Uniform-Block des Frames, falls die Kurve dem Shader übergeben wurde.
    pub fn take_uniforms(&mut self) -> Option<CurveUniforms> {
        self.uniforms.take()
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        let top_left = self.orientation.apply(p, self.viewport.canvas_size.y);
        let screen = self.viewport.canvas_to_screen(top_left);
        egui::pos2(screen.x, screen.y)
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn draw_line(&mut self, p0: Vec2, p1: Vec2, color: Rgba) {
        self.painter.line_segment(
            [self.to_screen(p0), self.to_screen(p1)],
            egui::Stroke::new(1.0, to_color32(color)),
        );
    }

    fn draw_filled_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        let rect = egui::Rect::from_two_pos(self.to_screen(origin), self.to_screen(origin + size));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn upload_curve_uniforms(&mut self, points: &[Vec2], threshold: f32, marker_size: f32) -> bool {
        let Some(colors) = self.shader else {
            return false;
        };
        self.uniforms = Some(CurveUniforms::new(
            points,
            threshold,
            marker_size,
            self.viewport.canvas_size,
            self.orientation,
            colors.curve,
            colors.control,
        ));
        true
    }
}
