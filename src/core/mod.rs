//! Core-Domäne: Bézier-Auswertung, Kontrollpunkte, Geometrie.
//!
//! Frei von UI- und Render-Abhängigkeiten; alle Punkte sind `glam::Vec2`
//! in logischen Canvas-Koordinaten.

pub mod bezier;
pub mod control_points;
pub mod geometry;

pub use bezier::{evaluate, sample, sample_segments, CurveError, CurveSamples, CurveSegments};
pub use control_points::{ControlPointSet, HitShape};
pub use geometry::{lerp, marker_contains, marker_rect, AxisOrientation};
