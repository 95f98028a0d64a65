//! Zeichenvertrag zwischen Editor-Sitzung und Render-Backends.
//!
//! Die Sitzung beschreibt pro Frame nur Linien und gefüllte Rechtecke in
//! logischen Canvas-Koordinaten. Wie und wohin gezeichnet wird, entscheidet
//! das Backend (egui-Painter, wgpu-Shader, Aufzeichnung in Tests).

use super::Rgba;
use glam::Vec2;

/// Zeichenfläche für einen Frame.
pub trait DrawSurface {
    /// Zeichnet eine Linie von `p0` nach `p1`.
    fn draw_line(&mut self, p0: Vec2, p1: Vec2, color: Rgba);

    /// Zeichnet ein gefülltes achsenparalleles Rechteck ab der linken oberen Ecke `origin`.
    fn draw_filled_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);

    /// Übergibt Kontrollpunkte und Kurven-Halbbreite an einen GPU-Shader.
    ///
    /// Gibt `true` zurück, wenn die Fläche die Kurve selbst zeichnet.
    /// Standard: kein Shader vorhanden, der Aufrufer tastet auf der CPU ab.
    fn upload_curve_uniforms(
        &mut self,
        _points: &[Vec2],
        _threshold: f32,
        _marker_size: f32,
    ) -> bool {
        false
    }
}

/// Ein aufgezeichneter Zeichenaufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// `draw_line`
    Line { p0: Vec2, p1: Vec2, color: Rgba },
    /// `draw_filled_rect`
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    /// Angenommener `upload_curve_uniforms`-Aufruf
    Uniforms {
        points: Vec<Vec2>,
        threshold: f32,
        marker_size: f32,
    },
}

/// Zeichenfläche, die alle Aufrufe protokolliert (Tests, Benchmarks, Headless-Betrieb).
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    /// Aufrufe in Reihenfolge
    pub calls: Vec<DrawCall>,
    /// Ob Uniform-Uploads angenommen werden (simuliert einen GPU-Shader)
    pub accepts_uniforms: bool,
}

impl RecordingSurface {
    /// Fläche ohne Shader-Unterstützung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fläche, die Uniform-Uploads annimmt.
    pub fn with_shader() -> Self {
        Self {
            calls: Vec::new(),
            accepts_uniforms: true,
        }
    }

    /// Alle Rechtecke in der angegebenen Farbe.
    pub fn rects_with(&self, color: Rgba) -> Vec<(Vec2, Vec2)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect {
                    origin,
                    size,
                    color: c,
                } if *c == color => Some((*origin, *size)),
                _ => None,
            })
            .collect()
    }

    /// Alle Linien in der angegebenen Farbe.
    pub fn lines_with(&self, color: Rgba) -> Vec<(Vec2, Vec2)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line { p0, p1, color: c } if *c == color => Some((*p0, *p1)),
                _ => None,
            })
            .collect()
    }

    /// Anzahl angenommener Uniform-Uploads.
    pub fn uniform_uploads(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Uniforms { .. }))
            .count()
    }

    /// Verwirft alle Aufrufe (neuer Frame).
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_line(&mut self, p0: Vec2, p1: Vec2, color: Rgba) {
        self.calls.push(DrawCall::Line { p0, p1, color });
    }

    fn draw_filled_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.calls.push(DrawCall::Rect {
            origin,
            size,
            color,
        });
    }

    fn upload_curve_uniforms(&mut self, points: &[Vec2], threshold: f32, marker_size: f32) -> bool {
        if !self.accepts_uniforms {
            return false;
        }
        self.calls.push(DrawCall::Uniforms {
            points: points.to_vec(),
            threshold,
            marker_size,
        });
        true
    }
}
