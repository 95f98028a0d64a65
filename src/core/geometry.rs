//! Geometrie-Grundlagen für Kontrollpunkte und Kurven.
//!
//! Alle Punkte sind `glam::Vec2` in logischen Canvas-Koordinaten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Lineare Interpolation `a + (b − a) · t`, komponentenweise.
///
/// `t` wird nicht begrenzt: Werte außerhalb von [0, 1] extrapolieren linear.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Linke obere Ecke und Größe des Marker-Quadrats um `center`.
#[inline]
pub fn marker_rect(center: Vec2, marker_size: f32) -> (Vec2, Vec2) {
    let size = Vec2::splat(marker_size);
    (center - size * 0.5, size)
}

/// Prüft, ob `pos` im achsenparallelen Marker-Quadrat um `center` liegt (Ränder inklusive).
pub fn marker_contains(center: Vec2, marker_size: f32, pos: Vec2) -> bool {
    let (begin, size) = marker_rect(center, marker_size);
    let end = begin + size;
    begin.x <= pos.x && pos.x <= end.x && begin.y <= pos.y && pos.y <= end.y
}

/// Orientierung der Y-Achse eines Koordinatensystems.
///
/// Eingaben kommen immer mit Ursprung oben links an. Backends mit Ursprung
/// unten links (OpenGL-Konvention) spiegeln die Y-Achse an der Canvas-Höhe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrientation {
    /// Ursprung oben links, Y wächst nach unten
    #[default]
    TopLeft,
    /// Ursprung unten links, Y wächst nach oben
    BottomLeft,
}

impl AxisOrientation {
    /// Überführt einen Punkt mit Ursprung oben links in dieses System.
    ///
    /// Die Abbildung ist ihre eigene Umkehrung und dient daher auch für den Rückweg.
    #[inline]
    pub fn apply(self, pos: Vec2, canvas_height: f32) -> Vec2 {
        match self {
            AxisOrientation::TopLeft => pos,
            AxisOrientation::BottomLeft => Vec2::new(pos.x, canvas_height - pos.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_halfway_and_extrapolation() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, -4.0);
        assert_eq!(lerp(a, b, 0.5), Vec2::new(5.0, -2.0));
        assert_eq!(lerp(a, b, 1.5), Vec2::new(15.0, -6.0));
        assert_eq!(lerp(a, b, -0.5), Vec2::new(-5.0, 2.0));
    }

    #[test]
    fn marker_contains_includes_edges() {
        let center = Vec2::new(100.0, 100.0);
        assert!(marker_contains(center, 15.0, center));
        assert!(marker_contains(center, 15.0, Vec2::new(107.5, 92.5)));
        assert!(!marker_contains(center, 15.0, Vec2::new(107.6, 100.0)));
        assert!(!marker_contains(center, 15.0, Vec2::new(100.0, 92.4)));
    }

    #[test]
    fn bottom_left_flips_and_is_involution() {
        let pos = Vec2::new(30.0, 100.0);
        let flipped = AxisOrientation::BottomLeft.apply(pos, 600.0);
        assert_eq!(flipped, Vec2::new(30.0, 500.0));
        assert_eq!(AxisOrientation::BottomLeft.apply(flipped, 600.0), pos);
        assert_eq!(AxisOrientation::TopLeft.apply(pos, 600.0), pos);
    }
}
