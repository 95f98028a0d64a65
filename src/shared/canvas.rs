//! Einpassung der logischen Canvas in den Fensterbereich (Letterbox).

use glam::Vec2;

/// Gleichmäßig skalierte, zentrierte Abbildung Canvas ↔ Bildschirm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasViewport {
    /// Bildschirmposition der Canvas-Ecke (0, 0)
    pub origin: Vec2,
    /// Bildschirm-Pixel pro Canvas-Einheit
    pub scale: f32,
    /// Logische Canvas-Größe
    pub canvas_size: Vec2,
}

/// Kleinste zulässige Skalierung (minimiertes Fenster).
const MIN_SCALE: f32 = 1e-6;

impl CanvasViewport {
    /// Passt `canvas_size` in das Rechteck ab `available_min` mit Größe `available_size` ein.
    pub fn fit(available_min: Vec2, available_size: Vec2, canvas_size: Vec2) -> Self {
        let ratio = available_size / canvas_size.max(Vec2::ONE);
        let scale = ratio.min_element().max(MIN_SCALE);
        let used = canvas_size * scale;
        Self {
            origin: available_min + (available_size - used) * 0.5,
            scale,
            canvas_size,
        }
    }

    /// Bildschirmposition → Canvas-Koordinaten (Ursprung oben links).
    pub fn screen_to_canvas(&self, screen: Vec2) -> Vec2 {
        (screen - self.origin) / self.scale
    }

    /// Canvas-Koordinaten (Ursprung oben links) → Bildschirmposition.
    pub fn canvas_to_screen(&self, canvas: Vec2) -> Vec2 {
        self.origin + canvas * self.scale
    }

    /// Bildschirm-Rechteck der Canvas als (min, size).
    pub fn screen_rect(&self) -> (Vec2, Vec2) {
        (self.origin, self.canvas_size * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wide_window_is_pillarboxed() {
        let vp = CanvasViewport::fit(
            Vec2::ZERO,
            Vec2::new(1600.0, 600.0),
            Vec2::new(800.0, 600.0),
        );
        assert_relative_eq!(vp.scale, 1.0);
        assert_eq!(vp.origin, Vec2::new(400.0, 0.0));
    }

    #[test]
    fn tall_window_is_letterboxed_and_scaled() {
        let vp = CanvasViewport::fit(
            Vec2::new(0.0, 20.0),
            Vec2::new(400.0, 1000.0),
            Vec2::new(800.0, 600.0),
        );
        assert_relative_eq!(vp.scale, 0.5);
        assert_eq!(vp.origin, Vec2::new(0.0, 20.0 + 350.0));
        let (_, size) = vp.screen_rect();
        assert_eq!(size, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn mapping_round_trips() {
        let vp = CanvasViewport::fit(
            Vec2::new(10.0, 30.0),
            Vec2::new(1200.0, 900.0),
            Vec2::new(800.0, 600.0),
        );
        let canvas = Vec2::new(123.0, 456.0);
        let back = vp.screen_to_canvas(vp.canvas_to_screen(canvas));
        assert_relative_eq!(back.x, canvas.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, canvas.y, epsilon = 1e-3);
    }

    #[test]
    fn zero_sized_window_keeps_positive_scale() {
        let vp = CanvasViewport::fit(Vec2::ZERO, Vec2::ZERO, Vec2::new(800.0, 600.0));
        assert!(vp.scale > 0.0);
        assert!(vp.screen_to_canvas(Vec2::ONE).is_finite());
    }
}
